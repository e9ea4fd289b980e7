//! Typed async client for the Magic Eden v2 read-only REST API.
//!
//! ```no_run
//! # async fn run() -> magiceden::Result<()> {
//! let client = magiceden::MagicEdenHttpClient::default();
//! let stats = client.get_collection_stats("degods").await?;
//! println!("{} listed, floor {} SOL", stats.listed_count, stats.floor_price_sol());
//! client.close();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod rest;
pub mod types;
pub mod utils;

// ---- Top-level re-exports for ergonomic usage ----

// Client + config
pub use config::{MagicEdenConfig, DEFAULT_BASE_URL};
pub use error::{MagicEdenError, Result};

// REST client
pub use rest::{MagicEdenHttpClient, Page, Query, Route};

// Tokens
pub use types::{Attribute, Creator, File, Properties, TokenMetadata};

// Listings + offers
pub use types::{CollectionListing, Offer, TokenListing};

// Activity
pub use types::{ActivityCore, CollectionActivity, TokenActivity, WalletActivity};

// Wallet
pub use types::EscrowBalance;

// Collections + launchpad
pub use types::{CollectionItem, CollectionStats, LaunchpadCollection};

// Shared field groups
pub use types::{BuyerReferral, CollectionRef, Market, Mint, ProgramAddress, Project, Symbol};

// Decoding
pub use types::Entity;

// Units
pub use utils::{lamports_to_sol, LAMPORTS_PER_SOL};
