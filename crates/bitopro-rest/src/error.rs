//! Error types for REST API operations

use bitopro_auth::AuthError;
use bitopro_types::{EnumParseError, PairParseError};

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Network, DNS or TLS failure
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Server answered with a non-2xx status
    #[error("HTTP status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, usually the exchange's JSON error payload
        body: String,
    },

    /// Parameters could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A 2xx response body was not valid JSON
    #[error("Failed to decode response: {message}")]
    Decode {
        /// Decoder message
        message: String,
        /// Raw response body
        body: String,
    },

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RestError {
    /// HTTP status code, for `Status` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, when the server sent one
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

impl From<AuthError> for RestError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials => Self::AuthRequired,
            AuthError::InvalidCredentials(msg) => Self::InvalidCredentials(msg),
            AuthError::Serialization(e) => Self::Serialization(e.to_string()),
        }
    }
}

impl From<PairParseError> for RestError {
    fn from(err: PairParseError) -> Self {
        Self::InvalidParameter(err.to_string())
    }
}

impl From<EnumParseError> for RestError {
    fn from(err: EnumParseError) -> Self {
        Self::InvalidParameter(err.to_string())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
