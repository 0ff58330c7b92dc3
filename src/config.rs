//! SDK configuration.

use std::time::Duration;

use crate::{Country, Environment};

/// Configuration for a [`crate::Pandago`] client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Deployment environment (sandbox or production).
    pub environment: Environment,
    /// Country the credentials are scoped to.
    pub country: Country,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Override for the REST API base URL (tests, proxies).
    pub api_base_url: Option<String>,
    /// Override for the OAuth2 token endpoint (tests, proxies).
    pub token_url: Option<String>,
}

impl Config {
    /// Create a configuration for the given environment and country.
    pub fn new(environment: Environment, country: Country) -> Self {
        Self {
            environment,
            country,
            timeout: Duration::from_secs(30),
            api_base_url: None,
            token_url: None,
        }
    }

    /// Set the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the REST API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Override the OAuth2 token endpoint.
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    /// Effective REST API base URL.
    pub fn resolved_api_base_url(&self) -> String {
        self.api_base_url
            .clone()
            .unwrap_or_else(|| self.environment.api_base_url(&self.country))
    }

    /// Effective token endpoint URL.
    pub fn resolved_token_url(&self) -> String {
        self.token_url
            .clone()
            .unwrap_or_else(|| self.environment.token_url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_environment() {
        let config = Config::new(Environment::Sandbox, Country::new("sg").unwrap());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(
            config.resolved_api_base_url(),
            "https://pandago-api-sandbox.deliveryhero.io/sg/api/v1"
        );
        assert_eq!(
            config.resolved_token_url(),
            "https://sts-st.deliveryhero.io/oauth2/token"
        );
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::new(Environment::Production, Country::new("sg").unwrap())
            .with_timeout(Duration::from_secs(5))
            .with_api_base_url("http://localhost:8080/sg/api/v1")
            .with_token_url("http://localhost:8080/oauth2/token");

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.resolved_api_base_url(),
            "http://localhost:8080/sg/api/v1"
        );
        assert_eq!(
            config.resolved_token_url(),
            "http://localhost:8080/oauth2/token"
        );
    }
}
