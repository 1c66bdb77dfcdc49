//! Error types for authentication operations

/// Errors that can occur while signing requests
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// A private request was signed without credentials
    #[error("Credentials are required to sign private requests")]
    MissingCredentials,

    /// Parameters could not be encoded into the signed payload
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::InvalidCredentials("api_secret is empty".to_string());
        assert!(err.to_string().contains("api_secret"));
        assert!(AuthError::MissingCredentials.to_string().contains("private"));
    }
}
