//! SDK error types.

use pandago_auth::AuthError;
use pandago_http_client::HttpClientError;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Result type for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the Pandago SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to obtain an access token (includes crypto and transport
    /// failures on the authentication path).
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A resource endpoint answered with a non-2xx status after a token was
    /// successfully attached.
    #[error("API request failed (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Provider error code, when the body carried one.
        code: Option<String>,
        /// Human-readable message from the error body (or raw body text).
        message: String,
        /// Raw error payload for caller inspection.
        body: Option<serde_json::Value>,
    },

    /// Caller input rejected before any network call.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Transport failure on a resource request.
    #[error(transparent)]
    Http(#[from] HttpClientError),

    /// A 2xx response whose body could not be decoded.
    #[error("Failed to decode API response: {0}")]
    Decode(String),
}

impl Error {
    /// HTTP status of a failed API request, when one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Auth(auth) => auth.status_code(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            status: 404,
            code: None,
            message: "Order not found".to_string(),
            body: None,
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Order not found"));
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: Error = ValidationErrors::from(ValidationError::new("amount", "negative")).into();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_auth_error_passthrough() {
        let err: Error = AuthError::authentication(401, Some("invalid_client".into()), None).into();
        assert!(err.to_string().contains("invalid_client"));
        assert_eq!(err.status_code(), Some(401));
    }
}
