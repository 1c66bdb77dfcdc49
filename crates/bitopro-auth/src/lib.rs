//! Credentials and request signing for the BitoPro API
//!
//! Private BitoPro endpoints authenticate every request with three headers:
//! the API key, a base64url-encoded JSON payload, and a hex HMAC-SHA384
//! signature of that payload keyed with the API secret.
//!
//! # Example
//!
//! ```
//! use bitopro_auth::{Credentials, FixedClock, RequestSigner};
//! use bitopro_types::{HttpMethod, ParameterSet, RequestScope};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::new("user@example.com", "api_key", "api_secret")?;
//! let signer = RequestSigner::new("my-app/1.0")
//!     .with_credentials(creds)
//!     .with_clock(Arc::new(FixedClock::new(1_700_000_000_000)));
//!
//! let params = ParameterSet::new();
//! let headers = signer.build_headers(RequestScope::Private, HttpMethod::Get, &params)?;
//! assert!(headers.contains("X-BITOPRO-SIGNATURE"));
//! # Ok(())
//! # }
//! ```

mod clock;
mod credentials;
mod error;
mod signer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use signer::{
    encode_payload, HeaderSet, RequestSigner, SignedPayload, HEADER_ACCEPT, HEADER_API_KEY,
    HEADER_CONTENT_TYPE, HEADER_PAYLOAD, HEADER_SIGNATURE, HEADER_USER_AGENT,
};
