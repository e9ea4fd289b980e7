//! Response entities.
//!
//! Every field carries its wire name explicitly. Field groups that recur
//! across entities live in [`common`] and are flattened into the entities
//! that use them, so a group's wire name is declared exactly once.

pub mod activity;
pub mod collection;
pub mod common;
pub mod launchpad;
pub mod listing;
pub mod offer;
pub mod token;
pub mod wallet;

use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

use crate::error::{MagicEdenError, Result};

pub use activity::{ActivityCore, CollectionActivity, TokenActivity, WalletActivity};
pub use collection::{CollectionItem, CollectionStats};
pub use common::{BuyerReferral, CollectionRef, Market, Mint, ProgramAddress, Project, Symbol};
pub use launchpad::LaunchpadCollection;
pub use listing::{CollectionListing, TokenListing};
pub use offer::Offer;
pub use token::{Attribute, Creator, File, Properties, TokenMetadata};
pub use wallet::EscrowBalance;

/// A top-level response shape.
pub trait Entity: DeserializeOwned {
    /// Name reported in decode errors.
    const NAME: &'static str;
}

macro_rules! impl_entity {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Entity for $ty {
                const NAME: &'static str = stringify!($ty);
            }
        )*
    };
}

impl_entity!(
    TokenMetadata,
    TokenListing,
    CollectionListing,
    Offer,
    TokenActivity,
    WalletActivity,
    CollectionActivity,
    EscrowBalance,
    CollectionItem,
    CollectionStats,
    LaunchpadCollection,
);

/// Decode a single entity from a JSON object.
pub fn decode<T: Entity>(value: Value) -> Result<T> {
    require_object::<T>(&value, ".")?;
    serde_path_to_error::deserialize(value).map_err(decode_error::<T>)
}

/// Decode a JSON array of objects into entities, keeping upstream order.
pub fn decode_many<T: Entity>(value: Value) -> Result<Vec<T>> {
    if let Value::Array(items) = &value {
        for (i, item) in items.iter().enumerate() {
            require_object::<T>(item, &format!("[{i}]"))?;
        }
    }
    serde_path_to_error::deserialize(value).map_err(decode_error::<T>)
}

// Derived struct visitors also accept a JSON array, read positionally.
fn require_object<T: Entity>(value: &Value, path: &str) -> Result<()> {
    if value.is_object() {
        return Ok(());
    }
    Err(MagicEdenError::Decode {
        entity: T::NAME,
        path: path.to_string(),
        source: serde_json::Error::invalid_type(common::unexpected(value), &"a JSON object"),
    })
}

fn decode_error<T: Entity>(e: serde_path_to_error::Error<serde_json::Error>) -> MagicEdenError {
    MagicEdenError::Decode {
        entity: T::NAME,
        path: e.path().to_string(),
        source: e.into_inner(),
    }
}
