//! # Pandago SDK
//!
//! Client SDK for the Pandago last-mile delivery REST API. Authenticates via
//! signed JWT client assertions exchanged for bearer tokens (OAuth2
//! client-credentials grant, RFC 7523), caches the live token, and exposes
//! typed order and outlet lifecycle operations.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pandago::models::{Location, NewOrder, PaymentMethod, Recipient};
//! use pandago::{Config, Country, Credentials, Environment, Pandago};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::new(
//!         "pandago:sg:00000000-0000-0000-0000-000000000000",
//!         "key-1",
//!         "pandago.api.sg",
//!         "/etc/pandago/client.pem",
//!     );
//!     let config = Config::new(Environment::Sandbox, Country::new("sg")?);
//!     let client = Pandago::new(credentials, config);
//!
//!     let order = NewOrder::new(
//!         Recipient::new(
//!             "Merlion",
//!             "+6500000000",
//!             Location::new("20 Esplanade Drive", 1.2923742, 103.8486029),
//!         ),
//!         PaymentMethod::Paid,
//!         23.50,
//!         "Refreshing drink",
//!     );
//!
//!     let placed = client.orders().create(&order).await?;
//!     println!("Order {} is {:?}", placed.order_id, placed.status);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod environment;
mod error;
pub mod models;
mod orders;
mod outlets;
pub mod validation;

pub use client::{ApiResponse, Pandago, RequestOptions};
pub use config::Config;
pub use environment::{Country, Environment};
pub use error::{Error, Result};
pub use orders::OrdersApi;
pub use outlets::OutletsApi;

// Re-export the authentication core so callers rarely need the sub-crates.
pub use pandago_auth::{AccessToken, AuthError, Credentials, TokenExchange, TokenManager};
pub use pandago_http_client::{HttpClient, HttpClientConfig};
