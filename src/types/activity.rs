use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{BuyerReferral, CollectionRef, Market, Mint};
use crate::utils::unix_to_datetime;

/// Fields common to every activity record.
///
/// `kind` is whatever the upstream reports (`list`, `delist`, `buyNow`,
/// `bid`, ...). Which of `buyer` / `seller` is set depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCore {
    pub signature: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub source: String,
    #[serde(flatten)]
    pub mint: Mint,
    pub slot: u64,
    #[serde(rename = "blockTime")]
    pub block_time: i64,
    pub buyer: Option<String>,
    #[serde(flatten)]
    pub buyer_referral: BuyerReferral,
    pub seller: Option<String>,
    #[serde(rename = "sellerReferral")]
    pub seller_referral: Option<String>,
    #[serde(flatten)]
    pub market: Market,
}

impl ActivityCore {
    pub fn block_datetime(&self) -> Option<DateTime<Utc>> {
        unix_to_datetime(self.block_time)
    }

    /// Whether either side of the trade is known.
    pub fn has_counterparty(&self) -> bool {
        self.buyer.is_some() || self.seller.is_some()
    }
}

/// Entry of `/tokens/{mint}/activities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenActivity {
    #[serde(flatten)]
    pub core: ActivityCore,
    #[serde(rename = "collectionSymbol")]
    pub collection_symbol: Option<String>,
}

/// Entry of `/wallets/{wallet}/activities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletActivity {
    #[serde(flatten)]
    pub core: ActivityCore,
    #[serde(flatten)]
    pub collection: CollectionRef,
}

/// Entry of `/collections/{symbol}/activities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionActivity {
    #[serde(flatten)]
    pub core: ActivityCore,
    #[serde(flatten)]
    pub collection: CollectionRef,
}
