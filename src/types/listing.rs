use serde::{Deserialize, Serialize};

use super::common::{Market, Mint, ProgramAddress};

/// Listing returned by `/tokens/{mint}/listings`.
///
/// `price` is the integer amount sent by the upstream, never rescaled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenListing {
    #[serde(flatten)]
    pub pda: ProgramAddress,
    #[serde(rename = "auctionHouse")]
    pub auction_house: String,
    #[serde(rename = "tokenAddress")]
    pub token_address: String,
    #[serde(flatten)]
    pub mint: Mint,
    pub seller: Option<String>,
    #[serde(rename = "tokenSize")]
    pub token_size: u64,
    pub price: u64,
}

/// Listing returned by `/collections/{symbol}/listings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionListing {
    #[serde(flatten)]
    pub pda: ProgramAddress,
    #[serde(rename = "auctionHouse")]
    pub auction_house: String,
    #[serde(rename = "tokenAddress")]
    pub token_address: String,
    #[serde(flatten)]
    pub mint: Mint,
    pub seller: Option<String>,
    #[serde(rename = "tokenSize")]
    pub token_size: u64,
    #[serde(flatten)]
    pub market: Market,
}

impl TokenListing {
    /// A listing without a seller is no longer active.
    pub fn is_active(&self) -> bool {
        self.seller.is_some()
    }
}

impl CollectionListing {
    pub fn is_active(&self) -> bool {
        self.seller.is_some()
    }
}
