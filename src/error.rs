use thiserror::Error;

#[derive(Error, Debug)]
pub enum MagicEdenError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body was valid JSON but did not match the expected entity.
    #[error("failed to decode {entity} at `{path}`: {source}")]
    Decode {
        entity: &'static str,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl MagicEdenError {
    /// True for failures raised by the HTTP layer (non-2xx status or I/O).
    pub fn is_transport(&self) -> bool {
        matches!(self, MagicEdenError::Http { .. } | MagicEdenError::Request(_))
    }

    /// True when the response body could not be turned into an entity.
    pub fn is_decode(&self) -> bool {
        matches!(self, MagicEdenError::Json(_) | MagicEdenError::Decode { .. })
    }

    /// HTTP status code, when the upstream answered with a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            MagicEdenError::Http { status, .. } => Some(*status),
            MagicEdenError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MagicEdenError>;
