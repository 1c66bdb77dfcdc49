//! Request assembly
//!
//! Turns `(scope, method, path, params)` into an inert [`RestRequest`]:
//! the final URL, the signed header set, and the body. No I/O happens here.

use bitopro_auth::{HeaderSet, RequestSigner, HEADER_CONTENT_TYPE};
use bitopro_types::{HttpMethod, ParameterSet, RequestScope};

use crate::error::{RestError, RestResult};

/// A fully assembled request, ready for a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HeaderSet,
    pub body: Option<String>,
}

/// Builds requests against one base URL
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    signer: RequestSigner,
}

impl RequestBuilder {
    /// Create a builder for `<base_url>/<api_version>/...`
    pub fn new(base_url: &str, api_version: &str, signer: RequestSigner) -> Self {
        let base_url = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            api_version.trim_matches('/')
        );

        Self { base_url, signer }
    }

    /// The versioned base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Endpoint URL without any query string
    pub fn url(&self, endpoint_path: &str) -> String {
        format!("{}/{}", self.base_url, endpoint_path.trim_start_matches('/'))
    }

    /// Assemble a request
    ///
    /// With non-empty `params`:
    /// - GET appends the caller's params as a query string, even for private
    ///   requests whose signed payload is `{identity, nonce}`
    /// - POST sends the params as a JSON body
    /// - DELETE sends neither; the params only drive signing
    pub fn build(
        &self,
        scope: RequestScope,
        method: HttpMethod,
        endpoint_path: &str,
        params: &ParameterSet,
    ) -> RestResult<RestRequest> {
        let mut url = self.url(endpoint_path);
        let mut headers = self.signer.build_headers(scope, method, params)?;
        let mut body = None;

        if !params.is_empty() {
            match method {
                HttpMethod::Get => {
                    let query = serde_urlencoded::to_string(params.to_query_pairs())
                        .map_err(|e| RestError::Serialization(e.to_string()))?;
                    url.push('?');
                    url.push_str(&query);
                }
                HttpMethod::Post => {
                    let json = serde_json::to_string(params)
                        .map_err(|e| RestError::Serialization(e.to_string()))?;
                    headers.insert(HEADER_CONTENT_TYPE, "application/json");
                    body = Some(json);
                }
                HttpMethod::Delete => {}
            }
        }

        Ok(RestRequest {
            method,
            url,
            headers,
            body,
        })
    }
}
