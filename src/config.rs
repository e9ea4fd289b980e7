use url::Url;

use crate::error::{MagicEdenError, Result};

/// Production endpoint of the Magic Eden v2 API.
pub const DEFAULT_BASE_URL: &str = "https://api-mainnet.magiceden.dev/v2";

/// Environment variable consulted by [`MagicEdenConfig::from_env`].
pub const BASE_URL_ENV: &str = "MAGICEDEN_BASE_URL";

/// Configuration for the Magic Eden client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicEdenConfig {
    /// Base URL every route is resolved against (e.g. a staging mirror or a
    /// local stub server).
    pub base_url: String,
}

impl Default for MagicEdenConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl MagicEdenConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from `MAGICEDEN_BASE_URL`, falling back to production.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Check that the base URL is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns `MagicEdenError::Config` if the URL does not parse or uses
    /// another scheme.
    pub fn validate(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| MagicEdenError::Config(format!("invalid base url {}: {e}", self.base_url)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(MagicEdenError::Config(format!(
                "unsupported scheme {other} in base url {}",
                self.base_url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_mainnet() {
        let config = MagicEdenConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let config = MagicEdenConfig::new("not a url");
        assert!(matches!(config.validate(), Err(MagicEdenError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = MagicEdenConfig::new("ftp://api-mainnet.magiceden.dev/v2");
        assert!(matches!(config.validate(), Err(MagicEdenError::Config(_))));
    }
}
