//! Header construction and payload signing

use base64::{engine::general_purpose::URL_SAFE, Engine};
use bitopro_types::{HttpMethod, ParameterSet, RequestScope};
use std::sync::Arc;
use tracing::trace;

use crate::clock::{Clock, SystemClock};
use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

pub const HEADER_ACCEPT: &str = "Accept";
pub const HEADER_USER_AGENT: &str = "User-Agent";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_API_KEY: &str = "X-BITOPRO-APIKEY";
pub const HEADER_PAYLOAD: &str = "X-BITOPRO-PAYLOAD";
pub const HEADER_SIGNATURE: &str = "X-BITOPRO-SIGNATURE";

const APPLICATION_JSON: &str = "application/json";

/// Ordered list of request headers
///
/// Lookups ignore ASCII case, as HTTP header names do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    headers: Vec<(&'static str, String)>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header, replacing any existing value with the same name
    pub fn insert(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value,
            None => self.headers.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.headers.iter().map(|(n, v)| (*n, v.as_str()))
    }
}

/// A payload and its signature, derived fresh for each request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    /// The parameters that were signed
    pub params: ParameterSet,
    /// base64url(JSON(params)), sent as `X-BITOPRO-PAYLOAD`
    pub encoded_payload: String,
    /// hex(HMAC-SHA384(secret, encoded_payload)), sent as `X-BITOPRO-SIGNATURE`
    pub signature: String,
}

/// Encode parameters as the signed payload
///
/// Compact JSON in insertion order, then URL-safe base64 with padding.
pub fn encode_payload(params: &ParameterSet) -> AuthResult<String> {
    let json = serde_json::to_vec(params)?;
    Ok(URL_SAFE.encode(json))
}

/// Builds the header set for public and private requests
#[derive(Debug, Clone)]
pub struct RequestSigner {
    user_agent: String,
    credentials: Option<Arc<Credentials>>,
    clock: Arc<dyn Clock>,
}

impl RequestSigner {
    /// Create a signer without credentials
    ///
    /// Only public headers can be built until credentials are attached.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            credentials: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Attach credentials for private requests
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(Arc::new(credentials));
        self
    }

    /// Replace the nonce source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Check if private requests can be signed
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Get the credentials, if attached
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_deref()
    }

    /// Get the user agent sent with every request
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Build the headers for a request
    ///
    /// Public requests get `Accept` and `User-Agent` only. Private requests
    /// additionally carry the API key, payload and signature. For GET and
    /// DELETE the signed payload is always `{identity, nonce}` and `params`
    /// is ignored; for POST `params` is signed exactly as given.
    pub fn build_headers(
        &self,
        scope: RequestScope,
        method: HttpMethod,
        params: &ParameterSet,
    ) -> AuthResult<HeaderSet> {
        let mut headers = HeaderSet::new();
        headers.insert(HEADER_ACCEPT, APPLICATION_JSON);
        headers.insert(HEADER_USER_AGENT, self.user_agent.as_str());

        if !scope.is_private() {
            return Ok(headers);
        }

        let credentials = self.credentials.as_deref().ok_or(AuthError::MissingCredentials)?;

        let signed = if method.signs_identity() {
            self.sign(self.identity_params(credentials))?
        } else {
            self.sign(params.clone())?
        };

        trace!(method = %method, "Signed private request payload");

        headers.insert(HEADER_API_KEY, credentials.api_key());
        headers.insert(HEADER_PAYLOAD, signed.encoded_payload);
        headers.insert(HEADER_SIGNATURE, signed.signature);

        Ok(headers)
    }

    /// Encode and sign a parameter set with the attached credentials
    pub fn sign(&self, params: ParameterSet) -> AuthResult<SignedPayload> {
        let credentials = self.credentials.as_deref().ok_or(AuthError::MissingCredentials)?;

        let encoded_payload = encode_payload(&params)?;
        let signature = credentials.sign(&encoded_payload)?;

        Ok(SignedPayload {
            params,
            encoded_payload,
            signature,
        })
    }

    fn identity_params(&self, credentials: &Credentials) -> ParameterSet {
        ParameterSet::new()
            .with("identity", credentials.account())
            .with("nonce", self.clock.now_millis())
    }
}
