pub mod endpoints;
pub mod query;
pub mod routes;

use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{debug, trace};

use crate::config::{MagicEdenConfig, DEFAULT_BASE_URL};
use crate::error::{MagicEdenError, Result};
use crate::types::{self, Entity};

pub use query::{Page, Query};
pub use routes::Route;

/// HTTP client wrapper for the Magic Eden REST API.
///
/// The underlying `reqwest::Client` is the connection pool. It is created on
/// the first request unless one is handed in, is shared by every clone, and is
/// released when the last clone is dropped or closed.
#[derive(Debug, Clone)]
pub struct MagicEdenHttpClient {
    session: Arc<OnceCell<Client>>,
    base_url: String,
}

impl Default for MagicEdenHttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl MagicEdenHttpClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            session: Arc::new(OnceCell::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from a validated config.
    pub fn from_config(config: &MagicEdenConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(&config.base_url))
    }

    /// Use an existing `reqwest::Client`, e.g. to share one pool between
    /// several API clients.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            session: Arc::new(OnceCell::from(client)),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether the connection pool has been created yet.
    pub fn is_connected(&self) -> bool {
        self.session.initialized()
    }

    /// Release this handle on the connection pool.
    ///
    /// Idle connections close once no other clone holds the pool.
    pub fn close(self) {
        if self.is_connected() {
            debug!(base_url = %self.base_url, "closing http session");
        }
        drop(self);
    }

    async fn session(&self) -> Result<&Client> {
        self.session
            .get_or_try_init(|| async {
                debug!(base_url = %self.base_url, "opening http session");
                Client::builder().build().map_err(MagicEdenError::Request)
            })
            .await
    }

    /// GET a route and return the raw JSON body.
    pub async fn get_json(&self, route: Route, params: &[&str], query: &Query) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, route.resolve(params));
        debug!(%route, %url, query = ?query.pairs(), "GET");

        let resp = self
            .session()
            .await?
            .get(&url)
            .query(query.pairs())
            .send()
            .await?;
        trace!(%url, status = resp.status().as_u16(), "response");

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(MagicEdenError::Http {
                status,
                message: body,
            });
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(MagicEdenError::Json)
    }

    /// GET a route that returns a single object.
    pub async fn get_one<T: Entity>(
        &self,
        route: Route,
        params: &[&str],
        query: &Query,
    ) -> Result<T> {
        let value = self.get_json(route, params, query).await?;
        types::decode(value)
    }

    /// GET a route that returns an array of objects, in upstream order.
    pub async fn get_many<T: Entity>(
        &self,
        route: Route,
        params: &[&str],
        query: &Query,
    ) -> Result<Vec<T>> {
        let value = self.get_json(route, params, query).await?;
        types::decode_many(value)
    }
}
