//! REST API client for the Obiex cryptocurrency exchange
//!
//! Every request is signed with HMAC-SHA256 over
//! `METHOD + path-with-query + timestamp` and carries the `x-api-key`,
//! `x-api-timestamp`, and `x-api-signature` headers. The slow-changing
//! currency list is memoized per client for 24 hours; everything else hits
//! the network on every call.
//!
//! # Example
//!
//! ```no_run
//! use obiex_rest::{Credentials, ObiexClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads OBIEX_API_KEY and OBIEX_API_SECRET
//!     let creds = Credentials::from_env()?;
//!
//!     // Production client; use ObiexClient::sandbox(creds) for staging
//!     let client = ObiexClient::new(creds);
//!
//!     let currencies = client.get_currencies().await?;
//!     println!("{} currencies", currencies.len());
//!
//!     let address = client.get_deposit_address("USDT", "TRX", "user-42").await?;
//!     println!("deposit to {}", address.address);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error handling
//!
//! Non-2xx responses with a structured body surface as
//! [`RestError::Api`] carrying the status code and the body's `data`
//! payload; inspect [`RestError::status_code`] to branch. Responses
//! without a structured body propagate the transport error unchanged.
//! Nothing is retried.

pub mod auth;
pub mod cache;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod query;

mod transport;

// Re-export main types
pub use auth::{Credentials, SignedRequest};
pub use cache::TtlCache;
pub use client::{ClientConfig, ObiexClient};
pub use error::{RestError, RestResult};

// Re-export the domain types crate
pub use obiex_types as types;
