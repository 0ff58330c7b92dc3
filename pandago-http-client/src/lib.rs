//! # Pandago HTTP Client
//!
//! The HTTP transport used by the Pandago SDK. A thin wrapper around
//! `reqwest` that buffers responses and hands back raw status + body so the
//! layers above can inspect 4xx/5xx responses instead of catching errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pandago_http_client::{HttpClient, HttpClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new(HttpClientConfig::default());
//!
//!     let response = client
//!         .get("https://pandago-api-sandbox.deliveryhero.io/sg/api/v1/orders/abc123")
//!         .send()
//!         .await?;
//!
//!     println!("Status: {}", response.status());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::HttpClient;
pub use config::{HttpClientConfig, HttpClientConfigBuilder};
pub use error::{HttpClientError, Result};
pub use request::RequestBuilder;
pub use response::Response;

// Re-export common types
pub use bytes::Bytes;
pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
pub use url::Url;
