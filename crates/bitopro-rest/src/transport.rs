//! HTTP transport seam
//!
//! The client hands finished [`RestRequest`]s to an [`HttpTransport`]. The
//! default implementation is backed by `reqwest`; tests and embedding
//! applications can supply their own.

use async_trait::async_trait;
use bitopro_types::HttpMethod;
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::debug;

use crate::error::RestResult;
use crate::request::RestRequest;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes requests built by the client
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// Send the request and return the raw status and body
    ///
    /// Non-2xx statuses are not errors at this layer.
    async fn execute(&self, request: RestRequest) -> RestResult<RawResponse>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the given per-request timeout
    pub fn new(timeout: Duration) -> RestResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: RestRequest) -> RestResult<RawResponse> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, bytes = body.len(), "Received response");

        Ok(RawResponse { status, body })
    }
}
