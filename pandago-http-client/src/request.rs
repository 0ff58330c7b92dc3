//! Request builder.

use std::time::Duration;

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;

use crate::{HttpClient, HttpClientError, Response, Result};

/// HTTP request builder.
pub struct RequestBuilder<'a> {
    client: &'a HttpClient,
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    timeout: Option<Duration>,
}

impl<'a> RequestBuilder<'a> {
    pub(crate) fn new(client: &'a HttpClient, method: Method, url: String) -> Self {
        Self {
            client,
            method,
            url,
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// Add a header to the request. A header set twice keeps the last value.
    ///
    /// Names and values are validated in [`send`](Self::send); an invalid one
    /// fails the request with [`HttpClientError::RequestBuild`] before
    /// anything goes on the wire.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add multiple headers to the request.
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, json: &T) -> Result<Self> {
        let bytes =
            serde_json::to_vec(json).map_err(|e| HttpClientError::BodyEncode(e.to_string()))?;
        self.headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        self.body = Some(bytes);
        Ok(self)
    }

    /// Set the request body as form-urlencoded data.
    pub fn form<T: Serialize>(mut self, form: &T) -> Result<Self> {
        let encoded = serde_urlencoded::to_string(form)
            .map_err(|e| HttpClientError::BodyEncode(e.to_string()))?;
        self.headers.push((
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        ));
        self.body = Some(encoded.into_bytes());
        Ok(self)
    }

    /// Set a custom timeout for this request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set bearer authentication.
    pub fn bearer_auth(self, token: impl Into<String>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.into()))
    }

    /// Build the URL, joining relative paths onto the configured base URL.
    fn build_url(&self) -> Result<url::Url> {
        let raw = match &self.client.config().base_url {
            Some(base) if !self.url.contains("://") => {
                // Plain concatenation; Url::join would drop the base path
                // segments ("/sg/api/v1") for non-slash-terminated bases.
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    self.url.trim_start_matches('/')
                )
            }
            _ => self.url.clone(),
        };

        let mut url =
            url::Url::parse(&raw).map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?;

        if !self.query.is_empty() {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                query_pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Validate the buffered name/value pairs into a typed header map.
    ///
    /// Later entries for the same name replace earlier ones, so the caller
    /// closest to the request wins.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in self
            .client
            .config()
            .default_headers
            .iter()
            .chain(&self.headers)
        {
            let name = HeaderName::try_from(name.as_str()).map_err(|e| {
                HttpClientError::RequestBuild(format!("invalid header name {name:?}: {e}"))
            })?;
            let value = HeaderValue::try_from(value.as_str()).map_err(|e| {
                HttpClientError::RequestBuild(format!("invalid value for header {name}: {e}"))
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Send the request.
    ///
    /// Fails with [`HttpClientError::RequestBuild`] before any network I/O if
    /// a buffered header name or value is invalid.
    pub async fn send(self) -> Result<Response> {
        let url = self.build_url()?;
        let headers = self.build_headers()?;

        let mut request = self
            .client
            .inner()
            .request(self.method.clone(), url)
            .headers(headers);

        if let Some(body) = self.body {
            request = request.body(body);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let request = request
            .build()
            .map_err(|e| HttpClientError::RequestBuild(e.to_string()))?;

        self.client.execute(request).await
    }
}
