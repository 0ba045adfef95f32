//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Transport-layer errors. The facade passes these through untouched.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request {status}: {body}")]
    BadRequest { status: u16, body: String },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Timeout")]
    Timeout,
}

impl HttpError {
    /// HTTP status code carried by the error, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::ServerError { status, .. } | HttpError::BadRequest { status, .. } => {
                Some(*status)
            }
            HttpError::RateLimited { .. } => Some(429),
            HttpError::Unauthorized => Some(401),
            HttpError::NotFound(_) => Some(404),
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
