use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{BuyerReferral, Mint, ProgramAddress};
use crate::utils::unix_to_datetime;

/// Bid on a token, as returned by the token and wallet offer routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(flatten)]
    pub pda: ProgramAddress,
    #[serde(flatten)]
    pub mint: Mint,
    #[serde(rename = "auctionHouse")]
    pub auction_house: String,
    pub buyer: String,
    #[serde(flatten)]
    pub referral: BuyerReferral,
    #[serde(rename = "tokenSize")]
    pub token_size: u64,
    pub price: f64,
    /// Unix seconds; zero or negative means the offer never expires.
    pub expiry: i64,
}

impl Offer {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if self.expiry <= 0 {
            return None;
        }
        unix_to_datetime(self.expiry)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|at| at <= now)
    }
}
