use serde::{Deserialize, Serialize};

use super::common::{Project, Symbol};
use crate::utils::lamports_to_sol;

/// Entry of `/collections`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    #[serde(flatten)]
    pub symbol: Symbol,
    #[serde(flatten)]
    pub project: Project,
    pub twitter: Option<String>,
    pub discord: Option<String>,
    pub website: Option<String>,
    pub categories: Option<Vec<Option<String>>>,
}

impl CollectionItem {
    /// Category tags, skipping null entries.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flatten()
            .filter_map(|c| c.as_deref())
    }
}

/// Response of `/collections/{symbol}/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionStats {
    #[serde(flatten)]
    pub symbol: Symbol,
    /// Lowest listing price, in lamports.
    #[serde(rename = "floorPrice")]
    pub floor_price: u64,
    #[serde(rename = "listedCount")]
    pub listed_count: u64,
    /// All-time volume, in lamports.
    #[serde(rename = "volumeAll")]
    pub volume_all: f64,
    #[serde(rename = "avgPrice24hr")]
    pub avg_price_24hr: Option<f64>,
}

impl CollectionStats {
    pub fn floor_price_sol(&self) -> f64 {
        lamports_to_sol(self.floor_price)
    }
}
