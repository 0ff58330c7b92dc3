//! # Pandago Auth
//!
//! JWT-bearer OAuth2 token management for the Pandago SDK: signs RS256 client
//! assertions (RFC 7523), exchanges them for bearer access tokens via the
//! client-credentials grant, and caches the live token so API calls skip the
//! authentication round trip.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pandago_auth::{Credentials, TokenExchange, TokenManager};
//! use pandago_http_client::HttpClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::new(
//!         "pandago:sg:00000000-0000-0000-0000-000000000000",
//!         "key-1",
//!         "pandago.api.sg",
//!         "/etc/pandago/client.pem",
//!     );
//!
//!     let exchange = TokenExchange::new(
//!         HttpClient::default(),
//!         "https://sts-st.deliveryhero.io/oauth2/token",
//!     );
//!     let manager = TokenManager::new(credentials, "https://sts-st.deliveryhero.io", exchange);
//!
//!     let token = manager.access_token().await?;
//!     println!("Bearer token expires at {}", token.expires_at());
//!     Ok(())
//! }
//! ```

pub mod assertion;
pub mod credentials;
pub mod error;
pub mod exchange;
pub mod manager;
pub mod token;

pub use assertion::{ASSERTION_TTL_SECS, AssertionClaims, build_assertion};
pub use credentials::Credentials;
pub use error::{AuthError, Result};
pub use exchange::{CLIENT_ASSERTION_TYPE, TokenExchange};
pub use manager::TokenManager;
pub use token::AccessToken;
