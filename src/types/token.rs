use serde::{Deserialize, Serialize};

use super::common::{flag, object, objects, string_or_number, CollectionRef};

/// On-chain metadata of a single token.
///
/// Tokens outside any collection decode with `collection.collection` set to
/// `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    #[serde(rename = "mintAddress")]
    pub mint_address: String,
    pub owner: String,
    pub supply: u64,
    #[serde(flatten)]
    pub collection: CollectionRef,
    pub name: String,
    #[serde(rename = "updateAuthority")]
    pub update_authority: String,
    #[serde(rename = "primarySaleHappened", deserialize_with = "flag")]
    pub primary_sale_happened: bool,
    #[serde(rename = "sellerFeeBasisPoints")]
    pub seller_fee_basis_points: u32,
    pub image: Option<String>,
    #[serde(rename = "animationUrl")]
    pub animation_url: Option<String>,
    #[serde(rename = "externalUrl")]
    pub external_url: Option<String>,
    #[serde(deserialize_with = "objects")]
    pub attributes: Vec<Attribute>,
    #[serde(deserialize_with = "object")]
    pub properties: Properties,
    pub delegate: Option<String>,
}

impl TokenMetadata {
    /// Creator royalty as a percentage (500 bps -> 5.0).
    pub fn royalty_percent(&self) -> f64 {
        f64::from(self.seller_fee_basis_points) / 100.0
    }

    /// Value of the first attribute with the given trait type.
    pub fn attribute(&self, trait_type: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.trait_type == trait_type)
            .map(|a| a.value.as_str())
    }
}

/// Trait/value pair. Numeric values are kept in their string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(deserialize_with = "objects")]
    pub files: Vec<File>,
    pub category: String,
    #[serde(deserialize_with = "objects")]
    pub creators: Vec<Creator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub uri: String,
    #[serde(rename = "type")]
    pub file_type: String,
}

/// Creator address and its share of royalties, in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub address: String,
    pub share: u8,
}
