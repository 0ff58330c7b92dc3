// Access token with absolute expiry

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Bearer access token returned by the authorization server.
///
/// Immutable value type: the token manager replaces the whole token on
/// refresh, so a clone handed to a caller stays valid for that caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessToken {
    access_token: String,
    expires_at: i64,
}

impl AccessToken {
    /// Create a token with an absolute expiry (unix timestamp).
    pub fn new(access_token: impl Into<String>, expires_at: i64) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at,
        }
    }

    /// Create a token from a server-declared `expires_in` window.
    ///
    /// A zero or negative `expires_in` yields an immediately stale token; the
    /// next cache lookup re-exchanges instead of erroring.
    pub fn from_expires_in(access_token: impl Into<String>, expires_in: i64) -> Self {
        Self::new(access_token, Utc::now().timestamp() + expires_in)
    }

    /// The opaque bearer string.
    pub fn token(&self) -> &str {
        &self.access_token
    }

    /// Absolute expiry as a unix timestamp.
    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// Whether the token is at or past expiry, with an optional grace window
    /// subtracted from the nominal expiry: true when
    /// `now >= expires_at - leeway_secs`.
    pub fn is_expired(&self, leeway_secs: i64) -> bool {
        Utc::now().timestamp() >= self.expires_at - leeway_secs
    }

    /// Return a copy with the expiry overridden.
    ///
    /// Test-support constructor; replaces the reflection the original test
    /// suite used to force expiry on private state.
    pub fn with_expiry(mut self, expires_at: i64) -> Self {
        self.expires_at = expires_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_is_live() {
        let token = AccessToken::from_expires_in("tok1", 900);
        assert!(!token.is_expired(0));
        assert_eq!(token.token(), "tok1");
    }

    #[test]
    fn test_past_expiry_is_stale() {
        let token = AccessToken::from_expires_in("tok1", 900).with_expiry(Utc::now().timestamp() - 60);
        assert!(token.is_expired(0));
    }

    #[test]
    fn test_zero_expires_in_is_immediately_stale() {
        let token = AccessToken::from_expires_in("tok1", 0);
        assert!(token.is_expired(0));
    }

    #[test]
    fn test_negative_expires_in_is_immediately_stale() {
        let token = AccessToken::from_expires_in("tok1", -30);
        assert!(token.is_expired(0));
    }

    #[test]
    fn test_leeway_triggers_early_staleness() {
        // 100 seconds of validity left, 300 seconds of leeway requested.
        let token = AccessToken::from_expires_in("tok1", 100);
        assert!(!token.is_expired(0));
        assert!(token.is_expired(300));
    }

    #[test]
    fn test_replacement_keeps_old_value_intact() {
        let old = AccessToken::from_expires_in("tok1", 900);
        let kept = old.clone();
        let new = AccessToken::from_expires_in("tok2", 900);
        assert_ne!(kept, new);
        assert_eq!(kept.token(), "tok1");
    }
}
