//! HTTP transport error types.

use thiserror::Error;

/// Result type for HTTP transport operations.
pub type Result<T> = std::result::Result<T, HttpClientError>;

/// HTTP transport errors.
///
/// Non-2xx responses are deliberately not represented here: the transport
/// returns them as ordinary [`crate::Response`] values for inspection.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request building error.
    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    /// Failed to encode a request body.
    #[error("Failed to encode request body: {0}")]
    BodyEncode(String),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Underlying HTTP client error (connect failure, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl HttpClientError {
    /// Check if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Check if this is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect())
    }
}
