//! Pandago client facade.

use http::{Method, StatusCode};
use pandago_auth::{Credentials, TokenExchange, TokenManager};
use pandago_http_client::{HttpClient, HttpClientConfig, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{Config, Error, OrdersApi, OutletsApi, Result};

/// Entry point of the SDK: authenticates requests and routes them to the
/// country-scoped REST API.
///
/// Holds one token manager and one connection pool; share it across tasks by
/// wrapping it in an `Arc` rather than constructing several clients.
pub struct Pandago {
    config: Config,
    http: HttpClient,
    auth: TokenManager,
}

impl Pandago {
    /// Create a client for the given credentials and configuration.
    pub fn new(credentials: Credentials, config: Config) -> Self {
        let http = HttpClient::new(
            HttpClientConfig::builder()
                .base_url(config.resolved_api_base_url())
                .timeout(config.timeout)
                .user_agent(format!("pandago-sdk/{}", env!("CARGO_PKG_VERSION")))
                .build(),
        );

        // The token endpoint URL is absolute, so sharing the pool with the
        // API transport is safe: base_url only applies to relative paths.
        let exchange = TokenExchange::new(http.clone(), config.resolved_token_url());
        let auth = TokenManager::new(credentials, config.environment.audience(), exchange);

        Self { config, http, auth }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The token manager backing this client.
    pub fn token_manager(&self) -> &TokenManager {
        &self.auth
    }

    /// Order lifecycle operations.
    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi::new(self)
    }

    /// Outlet lifecycle operations.
    pub fn outlets(&self) -> OutletsApi<'_> {
        OutletsApi::new(self)
    }

    /// Send an authenticated request without a body.
    ///
    /// `Authorization` and `Accept` are owned by this layer and always set
    /// here; a caller-supplied value for either in `options` is overridden.
    pub async fn authorized_request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        self.dispatch::<()>(method, path, None, options).await
    }

    /// Send an authenticated request with a JSON body.
    pub async fn authorized_request_with_body<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        self.dispatch(method, path, Some(body), options).await
    }

    async fn dispatch<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        let token = self.auth.access_token().await?;

        debug!(
            %method,
            path,
            authorization = redact_authorization(&format!("Bearer {}", token.token())),
            "Dispatching API request"
        );

        let mut request = self.http.request(method, path).headers(options.headers);
        for (key, value) in options.query {
            request = request.query(key, value);
        }

        // Facade-owned headers go last so they win over caller-supplied ones.
        request = request
            .bearer_auth(token.token())
            .header("Accept", "application/json");

        if let Some(body) = body {
            request = request.json(body).map_err(Error::Http)?;
        }

        let response = request.send().await.map_err(Error::Http)?;
        debug!(status = response.status().as_u16(), "API response received");

        interpret(&response)
    }
}

/// Per-request extras for an authenticated request: additional headers and
/// query parameters.
///
/// `Authorization` and `Accept` cannot be overridden through this; the facade
/// always sets them itself.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
}

impl RequestOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a request header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Parsed outcome of an authenticated request: a 2xx status plus the decoded
/// JSON body, or no body at all for 204-style responses.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: Option<serde_json::Value>,
}

impl ApiResponse {
    /// The HTTP status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the response carried no body.
    pub fn is_empty(&self) -> bool {
        self.body.is_none()
    }

    /// Decode the body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        match &self.body {
            Some(value) => {
                serde_json::from_value(value.clone()).map_err(|e| Error::Decode(e.to_string()))
            }
            None => Err(Error::Decode("empty response body".to_string())),
        }
    }

    /// The raw JSON body, if any.
    pub fn into_body(self) -> Option<serde_json::Value> {
        self.body
    }
}

fn interpret(response: &Response) -> Result<ApiResponse> {
    interpret_parts(response.status(), response.bytes())
}

fn interpret_parts(status: StatusCode, body: &[u8]) -> Result<ApiResponse> {
    if status.as_u16() >= 400 {
        let raw: Option<serde_json::Value> = serde_json::from_slice(body).ok();
        let message = raw
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string());
        let code = raw
            .as_ref()
            .and_then(|v| v.get("code").or_else(|| v.get("error")))
            .and_then(|c| c.as_str())
            .map(str::to_string);

        return Err(Error::Api {
            status: status.as_u16(),
            code,
            message,
            body: raw,
        });
    }

    // 204 and other empty-bodied successes: no JSON parse attempted.
    if status == StatusCode::NO_CONTENT || body.is_empty() {
        return Ok(ApiResponse { status, body: None });
    }

    let value = serde_json::from_slice(body).map_err(|e| Error::Decode(e.to_string()))?;
    Ok(ApiResponse {
        status,
        body: Some(value),
    })
}

/// Sanitize an Authorization header value for logging.
pub(crate) fn redact_authorization(value: &str) -> &'static str {
    if value.starts_with("Bearer ") {
        "Bearer [redacted]"
    } else {
        "[redacted]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redaction_never_leaks_the_token() {
        assert_eq!(redact_authorization("Bearer tok1"), "Bearer [redacted]");
        assert_eq!(redact_authorization("Basic dXNlcg=="), "[redacted]");
    }

    #[test]
    fn test_no_content_yields_empty_success() {
        let response = interpret_parts(StatusCode::NO_CONTENT, b"").unwrap();
        assert!(response.is_empty());
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_ok_parses_json_body() {
        let response =
            interpret_parts(StatusCode::OK, br#"{"order_id":"y0ud-000001"}"#).unwrap();
        let body = response.into_body().unwrap();
        assert_eq!(body["order_id"], "y0ud-000001");
    }

    #[test]
    fn test_client_error_maps_to_api_error() {
        let err = interpret_parts(
            StatusCode::NOT_FOUND,
            br#"{"message":"Order not found"}"#,
        )
        .unwrap_err();

        match err {
            Error::Api {
                status,
                message,
                body,
                ..
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Order not found");
                assert!(body.is_some());
            }
            other => panic!("expected Error::Api, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_error_body_kept_as_text() {
        let err = interpret_parts(StatusCode::BAD_GATEWAY, b"upstream unavailable").unwrap_err();
        match err {
            Error::Api { status, message, body, .. } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream unavailable");
                assert!(body.is_none());
            }
            other => panic!("expected Error::Api, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_success_body_is_a_decode_error() {
        let err = interpret_parts(StatusCode::OK, b"not json").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
