use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Market, Project, Symbol};

/// Entry of `/launchpad/collections`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchpadCollection {
    #[serde(flatten)]
    pub symbol: Symbol,
    #[serde(flatten)]
    pub project: Project,
    #[serde(flatten)]
    pub market: Market,
    /// Number of editions in the drop.
    pub size: u64,
    pub featured: Option<bool>,
    pub edition: Option<String>,
    #[serde(rename = "launchDatetime")]
    pub launch_datetime: Option<String>,
}

impl LaunchpadCollection {
    /// Launch time, if present and in RFC 3339 form.
    pub fn launch_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.launch_datetime.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}
