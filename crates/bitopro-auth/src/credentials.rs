//! Authentication credentials for the BitoPro API
//!
//! Implements the HMAC-SHA384 signature used by BitoPro's private endpoints.
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha384;

use crate::error::{AuthError, AuthResult};

type HmacSha384 = Hmac<Sha384>;

/// API credentials for authenticated requests
///
/// The secret is automatically zeroized when the Credentials are dropped.
pub struct Credentials {
    /// Account identity (the e-mail address registered with BitoPro)
    account: String,
    /// API key (public)
    api_key: String,
    /// API secret (zeroized on drop)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials
    ///
    /// # Arguments
    /// * `account` - Account identity, sent as `identity` in signed payloads
    /// * `api_key` - Your BitoPro API key
    /// * `api_secret` - Your BitoPro API secret
    ///
    /// # Returns
    /// Result containing Credentials or error if any field is empty
    pub fn new(
        account: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> AuthResult<Self> {
        let account = account.into();
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if account.is_empty() {
            return Err(AuthError::InvalidCredentials("account is empty".to_string()));
        }
        if api_key.is_empty() {
            return Err(AuthError::InvalidCredentials("api_key is empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(AuthError::InvalidCredentials("api_secret is empty".to_string()));
        }

        Ok(Self {
            account,
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Get the account identity
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign an encoded payload
    ///
    /// BitoPro signature algorithm:
    /// 1. HMAC-SHA384(api_secret, payload), both as UTF-8 bytes
    /// 2. Lower-case hex encode result
    pub fn sign(&self, payload: &str) -> AuthResult<String> {
        let mut mac = HmacSha384::new_from_slice(self.api_secret.expose_secret().as_bytes())
            .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;
        mac.update(payload.as_bytes());

        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            account: self.account.clone(),
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("account", &self.account)
            .field("api_key", &format!("{}...", prefix))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds =
            Credentials::new("user@example.com", "test_api_key_123", "very_secret_value").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("very_secret_value"));
        assert!(!debug.contains("test_api_key_123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(matches!(
            Credentials::new("", "key", "secret"),
            Err(AuthError::InvalidCredentials(_))
        ));
        assert!(Credentials::new("me", "", "secret").is_err());
        assert!(Credentials::new("me", "key", "").is_err());
    }

    #[test]
    fn test_sign_known_vector() {
        let creds = Credentials::new("user@example.com", "key", "test_secret").unwrap();
        let signature = creds
            .sign("eyJpZGVudGl0eSI6InVzZXJAZXhhbXBsZS5jb20iLCJub25jZSI6MTcwMDAwMDAwMDAwMH0=")
            .unwrap();

        assert_eq!(
            signature,
            "6b6c91a234422b8a93aef0827208e1398950c4ae5c22f75e97968ecd617bbac7318cc42c0e33d9459cdc36699dc704d8"
        );
    }

    #[test]
    fn test_clone_signs_identically() {
        let creds = Credentials::new("me", "key", "secret").unwrap();
        let cloned = creds.clone();
        assert_eq!(creds.sign("abc").unwrap(), cloned.sign("abc").unwrap());
        assert_eq!(cloned.account(), "me");
        assert_eq!(cloned.api_key(), "key");
    }
}
