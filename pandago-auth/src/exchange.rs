//! OAuth2 client-credentials token exchange.

use pandago_http_client::HttpClient;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{AccessToken, AuthError, Credentials, Result};

/// `client_assertion_type` value for the JWT-bearer grant (RFC 7523).
pub const CLIENT_ASSERTION_TYPE: &str = "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
    #[allow(dead_code)]
    #[serde(default)]
    token_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
    error_description: Option<String>,
}

/// Exchanges a signed client assertion for a bearer access token.
///
/// One network round trip, no internal retry; retry policy belongs to the
/// caller.
#[derive(Clone)]
pub struct TokenExchange {
    http: HttpClient,
    token_url: String,
}

impl TokenExchange {
    /// Create an exchange client against the given token endpoint.
    pub fn new(http: HttpClient, token_url: impl Into<String>) -> Self {
        Self {
            http,
            token_url: token_url.into(),
        }
    }

    /// The configured token endpoint URL.
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Perform the form-encoded client-credentials exchange.
    pub async fn exchange(
        &self,
        credentials: &Credentials,
        assertion: &str,
    ) -> Result<AccessToken> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id()),
            ("client_assertion_type", CLIENT_ASSERTION_TYPE),
            ("client_assertion", assertion),
            ("scope", credentials.scope()),
        ];

        debug!(token_url = %self.token_url, client_id = %credentials.client_id(), "Exchanging client assertion for access token");

        let response = self
            .http
            .post(self.token_url.as_str())
            .form(&form)?
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            // A non-JSON body (proxy HTML, plain text) is kept as the
            // description so 5xx responses stay diagnosable.
            let body: ErrorResponse = response.json().unwrap_or_else(|_| {
                let raw = response.text().unwrap_or_default();
                let raw = raw.trim();
                ErrorResponse {
                    error: None,
                    error_description: (!raw.is_empty()).then(|| raw.to_string()),
                }
            });
            warn!(
                method = "POST",
                status = status.as_u16(),
                error = body.error.as_deref().unwrap_or("unknown"),
                "Token exchange rejected by authorization server"
            );
            return Err(AuthError::authentication(
                status.as_u16(),
                body.error,
                body.error_description,
            ));
        }

        let body: TokenResponse = response
            .json()
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        Ok(AccessToken::from_expires_in(
            body.access_token,
            body.expires_in,
        ))
    }
}
