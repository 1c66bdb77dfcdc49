//! REST API client for the BitoPro cryptocurrency exchange
//!
//! This crate provides a REST API client covering BitoPro's public market
//! data and private account endpoints.
//!
//! # Features
//!
//! - **Market Data**: Tickers, order book, recent trades, currency and pair metadata
//! - **Account**: Balances, single orders, order history, order listings
//! - **Trading**: Create and cancel orders
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Each private request carries
//! the API key, a base64url JSON payload, and an HMAC-SHA384 signature of
//! that payload (see `bitopro-auth`).
//!
//! # Example
//!
//! ```no_run
//! use bitopro_rest::{BitoproRestClient, Credentials, OrderRequest};
//! use bitopro_rest::types::OrderAction;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = BitoproRestClient::new()?;
//!     let tickers = client.get_tickers(Some("bito_twd")).await?;
//!     println!("BITO/TWD: {}", tickers);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::new("me@example.com", "api_key", "api_secret")?;
//!     let auth_client = BitoproRestClient::with_credentials(creds)?;
//!     let order = OrderRequest::limit(
//!         "bito_twd",
//!         OrderAction::Sell,
//!         Decimal::from(600),
//!         Decimal::from(123456),
//!     );
//!     let placed = auth_client.create_order(&order).await?;
//!     println!("Placed: {}", placed);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Nothing is retried. Non-2xx responses come back as [`RestError::Status`]
//! carrying the exchange's raw error body; timeouts as [`RestError::Timeout`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod transport;
pub mod types;

// Re-export main types
pub use bitopro_auth::{Clock, Credentials, FixedClock, SystemClock};
pub use client::{BitoproRestClient, ClientConfig};
pub use endpoints::Endpoint;
pub use error::{RestError, RestResult};
pub use request::{RequestBuilder, RestRequest};
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};
pub use types::{OrderAction, OrderRequest, OrderType, Pair};
