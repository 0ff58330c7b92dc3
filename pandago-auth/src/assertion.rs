// Signed JWT client assertion (RFC 7523)

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AuthError, Credentials, Result};

/// Validity window of the assertion itself, distinct from the access token's.
pub const ASSERTION_TTL_SECS: i64 = 3600;

/// Claims of the client assertion presented at the token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssertionClaims {
    /// Issuer: the client id.
    pub iss: String,
    /// Subject: also the client id.
    pub sub: String,
    /// Fresh v4 UUID per assertion; must never repeat, the authorization
    /// server uses it for replay detection.
    pub jti: String,
    /// Expiry, unix timestamp `now + 3600`.
    pub exp: i64,
    /// Authorization server origin for the configured environment.
    pub aud: String,
}

impl AssertionClaims {
    /// Create claims for a fresh assertion.
    pub fn new(client_id: impl Into<String>, audience: impl Into<String>) -> Self {
        let client_id = client_id.into();
        Self {
            iss: client_id.clone(),
            sub: client_id,
            jti: Uuid::new_v4().to_string(),
            exp: Utc::now().timestamp() + ASSERTION_TTL_SECS,
            aud: audience.into(),
        }
    }
}

/// Build a compact-encoded RS256 assertion for one token exchange attempt.
///
/// Assertions are single-use: built fresh per exchange, never cached.
pub fn build_assertion(credentials: &Credentials, audience: &str) -> Result<String> {
    let claims = AssertionClaims::new(credentials.client_id(), audience);

    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(credentials.key_id().to_string());

    let pem = credentials.private_key_pem()?;
    let key =
        EncodingKey::from_rsa_pem(pem.as_bytes()).map_err(|e| AuthError::Crypto(e.to_string()))?;

    encode(&header, &claims, &key).map_err(|e| AuthError::Crypto(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    const TEST_KEY: &str = include_str!("../tests/data/test_rsa_key.pem");

    fn credentials() -> Credentials {
        Credentials::new("client-abc", "key-1", "pandago.api.sg", TEST_KEY)
    }

    fn decode_segment(segment: &str) -> serde_json::Value {
        let bytes = URL_SAFE_NO_PAD.decode(segment).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_jti_unique_across_back_to_back_claims() {
        let a = AssertionClaims::new("client-abc", "https://sts.deliveryhero.io");
        let b = AssertionClaims::new("client-abc", "https://sts.deliveryhero.io");
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_expiry_is_one_hour_out() {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims::new("client-abc", "https://sts.deliveryhero.io");
        assert!(claims.exp >= now + 3500);
        assert!(claims.exp <= now + 3700);
    }

    #[test]
    fn test_assertion_is_compact_encoded_with_kid_header() {
        let jwt = build_assertion(&credentials(), "https://sts-st.deliveryhero.io").unwrap();
        let parts: Vec<&str> = jwt.split('.').collect();
        assert_eq!(parts.len(), 3);

        let header = decode_segment(parts[0]);
        assert_eq!(header["alg"], "RS256");
        assert_eq!(header["typ"], "JWT");
        assert_eq!(header["kid"], "key-1");

        let payload = decode_segment(parts[1]);
        assert_eq!(payload["iss"], "client-abc");
        assert_eq!(payload["sub"], "client-abc");
        assert_eq!(payload["aud"], "https://sts-st.deliveryhero.io");
        assert!(payload["jti"].as_str().unwrap().len() == 36);
    }

    #[test]
    fn test_two_assertions_differ() {
        let first = build_assertion(&credentials(), "https://sts-st.deliveryhero.io").unwrap();
        let second = build_assertion(&credentials(), "https://sts-st.deliveryhero.io").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_key_is_a_crypto_error() {
        let bad = Credentials::new("client-abc", "key-1", "pandago.api.sg", "not a pem");
        let err = build_assertion(&bad, "https://sts-st.deliveryhero.io").unwrap_err();
        assert!(matches!(err, AuthError::Crypto(_)));
    }
}
