// Error types for token management

use pandago_http_client::HttpClientError;
use thiserror::Error;

/// Errors raised while obtaining an access token.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Malformed private key material or unsupported signing algorithm.
    ///
    /// A configuration defect: retrying cannot help.
    #[error("Invalid signing key: {0}")]
    Crypto(String),

    /// The authorization server rejected the token exchange.
    #[error("{message}")]
    Authentication {
        /// HTTP status returned by the token endpoint.
        status: u16,
        /// Provider error code (`invalid_client`, `invalid_scope`, ...).
        error: Option<String>,
        /// Preformatted message carrying status, code and description.
        message: String,
    },

    /// Transport failure while talking to the token endpoint.
    #[error("Failed to authenticate: transport error: {0}")]
    Transport(#[from] HttpClientError),

    /// The token endpoint returned 200 with a body we could not parse.
    #[error("Failed to authenticate: malformed token response: {0}")]
    MalformedResponse(String),
}

impl AuthError {
    /// Build an [`AuthError::Authentication`] from a token endpoint error body.
    pub fn authentication(
        status: u16,
        error: Option<String>,
        description: Option<String>,
    ) -> Self {
        let mut message = format!("Failed to authenticate (status {status})");
        if let Some(code) = &error {
            message.push_str(": ");
            message.push_str(code);
        }
        if let Some(desc) = &description {
            message.push_str(" - ");
            message.push_str(desc);
        }

        Self::Authentication {
            status,
            error,
            message,
        }
    }

    /// HTTP status of the failed exchange, when one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Provider error code (`invalid_client`, `invalid_scope`, ...), if any.
    pub fn provider_error(&self) -> Option<&str> {
        match self {
            Self::Authentication { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
