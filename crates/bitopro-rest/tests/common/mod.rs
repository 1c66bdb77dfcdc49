//! Common test utilities and fixtures for integration tests

#![allow(dead_code)]

use base64::{engine::general_purpose::URL_SAFE, Engine};
use bitopro_rest::{BitoproRestClient, ClientConfig, Credentials, FixedClock};
use std::sync::Arc;
use wiremock::MockServer;

/// Fixed clock value used by every test client
pub const NOW_MILLIS: i64 = 1_700_000_000_000;

pub const ACCOUNT: &str = "user@example.com";
pub const API_KEY: &str = "test_api_key";
pub const API_SECRET: &str = "test_secret";

/// Sample ticker response
pub const TICKER_RESPONSE: &str = r#"{
    "data": {
        "pair": "bito_twd",
        "lastPrice": "0.1425",
        "isBuyer": true,
        "priceChange24hr": "-1.05",
        "volume24hr": "1825321.0000",
        "high24hr": "0.1450",
        "low24hr": "0.1400"
    }
}"#;

/// Sample error payload returned with HTTP 401
pub const SIGNATURE_ERROR: &str = r#"{"error":"Invalid signature"}"#;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(ACCOUNT, API_KEY, API_SECRET).expect("valid test credentials")
}

/// Config pointing at the mock server with a frozen clock
pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::new()
        .with_base_url(server.uri())
        .with_user_agent("bitopro-rest-tests")
        .with_clock(Arc::new(FixedClock::new(NOW_MILLIS)))
}

pub fn public_client(server: &MockServer) -> BitoproRestClient {
    BitoproRestClient::with_config(test_config(server)).expect("client builds")
}

pub fn private_client(server: &MockServer) -> BitoproRestClient {
    BitoproRestClient::with_config(test_config(server).with_credentials(test_credentials()))
        .expect("client builds")
}

/// Decode an `X-BITOPRO-PAYLOAD` header value back into JSON
pub fn decode_payload(payload: &str) -> serde_json::Value {
    let bytes = URL_SAFE.decode(payload).expect("payload is base64url");
    serde_json::from_slice(&bytes).expect("payload is JSON")
}

/// Header value from a recorded request
pub fn header<'a>(request: &'a wiremock::Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}
