//! Token cache and refresh policy.

use tokio::sync::Mutex;
use tracing::debug;

use crate::{AccessToken, Credentials, Result, TokenExchange, assertion};

/// Holds at most one live access token and refreshes it on demand.
///
/// The cache slot sits behind an async mutex that stays locked across a
/// refresh, so concurrent callers observing an empty or stale slot wait for
/// the single in-flight exchange and share its result instead of stampeding
/// the token endpoint.
///
/// Refresh is strictly lazy: nothing runs in the background, a stale token is
/// only replaced when the next caller asks for one.
pub struct TokenManager {
    credentials: Credentials,
    audience: String,
    exchange: TokenExchange,
    cache: Mutex<Option<AccessToken>>,
}

impl TokenManager {
    /// Create a manager for the given credentials, JWT audience and exchange
    /// client.
    pub fn new(credentials: Credentials, audience: impl Into<String>, exchange: TokenExchange) -> Self {
        Self {
            credentials,
            audience: audience.into(),
            exchange,
            cache: Mutex::new(None),
        }
    }

    /// The credentials this manager signs assertions with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Get a valid bearer token, exchanging a fresh assertion if the cached
    /// one is missing or expired.
    pub async fn access_token(&self) -> Result<AccessToken> {
        self.access_token_with_leeway(0).await
    }

    /// Like [`access_token`](Self::access_token), but treats tokens within
    /// `leeway_secs` of expiry as already stale, refreshing proactively.
    pub async fn access_token_with_leeway(&self, leeway_secs: i64) -> Result<AccessToken> {
        let mut slot = self.cache.lock().await;

        if let Some(token) = slot.as_ref()
            && !token.is_expired(leeway_secs)
        {
            debug!("Access token cache hit");
            return Ok(token.clone());
        }

        // A failed refresh must leave the slot empty, never half-updated.
        *slot = None;

        let client_assertion = assertion::build_assertion(&self.credentials, &self.audience)?;
        let token = self
            .exchange
            .exchange(&self.credentials, &client_assertion)
            .await?;

        debug!(expires_at = token.expires_at(), "Access token refreshed");
        *slot = Some(token.clone());
        Ok(token)
    }

    /// Seed the cache slot with a token.
    ///
    /// Test support and warm handoffs; normal operation never needs this.
    pub async fn prime(&self, token: AccessToken) {
        *self.cache.lock().await = Some(token);
    }

    /// Inspect the cached token without triggering a refresh.
    pub async fn cached_token(&self) -> Option<AccessToken> {
        self.cache.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pandago_http_client::HttpClient;

    const TEST_KEY: &str = include_str!("../tests/data/test_rsa_key.pem");

    fn manager() -> TokenManager {
        let exchange = TokenExchange::new(HttpClient::default(), "http://127.0.0.1:1/oauth2/token");
        TokenManager::new(
            Credentials::new("client-abc", "key-1", "pandago.api.sg", TEST_KEY),
            "https://sts-st.deliveryhero.io",
            exchange,
        )
    }

    #[tokio::test]
    async fn test_live_primed_token_is_returned_without_network() {
        let manager = manager();
        // The exchange endpoint is unroutable, so any network attempt fails.
        manager.prime(AccessToken::from_expires_in("tok1", 900)).await;

        let token = manager.access_token().await.unwrap();
        assert_eq!(token.token(), "tok1");
    }

    #[tokio::test]
    async fn test_failed_refresh_leaves_cache_empty() {
        let manager = manager();
        manager
            .prime(AccessToken::new("stale", Utc::now().timestamp() - 60))
            .await;

        let err = manager.access_token().await.unwrap_err();
        assert!(err.to_string().contains("Failed to authenticate"));
        assert!(manager.cached_token().await.is_none());
    }

    #[tokio::test]
    async fn test_leeway_forces_refresh_of_nearly_expired_token() {
        let manager = manager();
        manager.prime(AccessToken::from_expires_in("tok1", 30)).await;

        // Live with no leeway...
        assert!(manager.access_token().await.is_ok());
        // ...stale once a 60s grace window applies, and the unroutable
        // endpoint makes the forced refresh fail.
        assert!(manager.access_token_with_leeway(60).await.is_err());
    }
}
