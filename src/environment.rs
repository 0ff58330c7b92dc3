//! Environment and country routing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Deployment environment of the Pandago API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Sandbox for integration testing.
    Sandbox,
    /// Production.
    Production,
}

impl Environment {
    /// OAuth2 token endpoint for this environment.
    pub fn token_url(&self) -> &'static str {
        match self {
            Self::Sandbox => "https://sts-st.deliveryhero.io/oauth2/token",
            Self::Production => "https://sts.deliveryhero.io/oauth2/token",
        }
    }

    /// JWT audience: the authorization server origin.
    ///
    /// Kept as per-environment data so the constants can be adjusted in one
    /// place against the provider's documentation.
    pub fn audience(&self) -> &'static str {
        match self {
            Self::Sandbox => "https://sts-st.deliveryhero.io",
            Self::Production => "https://sts.deliveryhero.io",
        }
    }

    /// Base URL of the country-scoped REST API.
    pub fn api_base_url(&self, country: &Country) -> String {
        match self {
            Self::Sandbox => {
                format!("https://pandago-api-sandbox.deliveryhero.io/{country}/api/v1")
            }
            Self::Production => {
                format!("https://pandago-api-apse.deliveryhero.io/{country}/api/v1")
            }
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => write!(f, "sandbox"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// ISO 3166-1 alpha-2 country code, lowercase, as used in API paths and
/// OAuth2 scopes (`pandago.api.sg`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Country(String);

impl Country {
    /// Parse a two-letter country code; uppercase input is normalized.
    pub fn new(code: impl AsRef<str>) -> Result<Self, ValidationError> {
        let code = code.as_ref().to_ascii_lowercase();
        if code.len() == 2 && code.bytes().all(|b| b.is_ascii_lowercase()) {
            Ok(Self(code))
        } else {
            Err(ValidationError::new(
                "country",
                "country must be a two-letter ISO 3166-1 code",
            )
            .with_constraint("countryCode"))
        }
    }

    /// The lowercase two-letter code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Country {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Country {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Country> for String {
    fn from(country: Country) -> Self {
        country.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_normalization() {
        assert_eq!(Country::new("SG").unwrap().as_str(), "sg");
        assert_eq!(Country::new("my").unwrap().as_str(), "my");
    }

    #[test]
    fn test_country_rejects_garbage() {
        assert!(Country::new("sgp").is_err());
        assert!(Country::new("s1").is_err());
        assert!(Country::new("").is_err());
    }

    #[test]
    fn test_environments_route_to_distinct_origins() {
        assert_ne!(
            Environment::Sandbox.token_url(),
            Environment::Production.token_url()
        );
        assert_ne!(
            Environment::Sandbox.audience(),
            Environment::Production.audience()
        );
    }

    #[test]
    fn test_api_base_url_embeds_country() {
        let sg = Country::new("sg").unwrap();
        assert_eq!(
            Environment::Sandbox.api_base_url(&sg),
            "https://pandago-api-sandbox.deliveryhero.io/sg/api/v1"
        );
        assert_eq!(
            Environment::Production.api_base_url(&sg),
            "https://pandago-api-apse.deliveryhero.io/sg/api/v1"
        );
    }
}
