// src/error.rs
// =============================================================================
// Error type shared by the client, the MCP server and the docs crawler.
//
// The binaries wrap these in anyhow::Error at the edge; inside the library
// every fallible function returns crate::Result<T>.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while talking to Katana or writing docs.
#[derive(Debug, Error)]
pub enum KatanaError {
    /// Transport failure (DNS, TLS, timeout, connection reset...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Body could not be encoded or decoded
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Base URL or endpoint path did not form a valid URL
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Status code outside the documented set, raised only when the client
    /// was built with `raise_on_unexpected_status`
    #[error("unexpected status {status}: {}", String::from_utf8_lossy(.content))]
    UnexpectedStatus { status: StatusCode, content: Vec<u8> },

    /// Documented error payload (401/422/429/500) surfaced by `fetch`
    #[error("Katana API error {status}: {message}")]
    Api { status: StatusCode, message: String },

    /// A documentation page answered with a non-success status
    #[error("fetching {url} returned {status}")]
    PageStatus { url: String, status: StatusCode },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("template error: {0}")]
    Template(String),
}

impl KatanaError {
    /// HTTP status attached to this error, if there is one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            KatanaError::UnexpectedStatus { status, .. }
            | KatanaError::Api { status, .. }
            | KatanaError::PageStatus { status, .. } => Some(*status),
            KatanaError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, KatanaError>;
