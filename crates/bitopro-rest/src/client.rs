//! Main REST client implementation

use bitopro_auth::{Clock, Credentials, RequestSigner, SystemClock};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::endpoints::{AccountEndpoints, Endpoint, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::request::{RequestBuilder, RestRequest};
use crate::transport::{HttpTransport, RawResponse, ReqwestTransport};
use crate::types::OrderRequest;

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.bitopro.com";

/// API version prefix
pub const DEFAULT_API_VERSION: &str = "v3";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

const DEFAULT_USER_AGENT: &str = concat!("bitopro-rest/", env!("CARGO_PKG_VERSION"));

/// BitoPro REST API client
///
/// Provides access to both public and private endpoints. Every call builds a
/// fresh request from immutable state, so a client can be cloned and shared
/// across tasks freely.
///
/// # Example
///
/// ```no_run
/// use bitopro_rest::{BitoproRestClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BitoproRestClient::new()?;
///     let book = client.get_order_book("bito_twd", Some(10)).await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::new("me@example.com", "api_key", "api_secret")?;
///     let auth_client = BitoproRestClient::with_credentials(creds)?;
///     let balance = auth_client.get_account_balance().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitoproRestClient {
    builder: RequestBuilder,
    transport: Arc<dyn HttpTransport>,
    clock: Arc<dyn Clock>,
}

impl BitoproRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a new client that sends requests through `transport`
    ///
    /// `config.timeout_secs` is left to the transport to honour.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let mut signer = RequestSigner::new(user_agent).with_clock(Arc::clone(&config.clock));
        if let Some(credentials) = config.credentials {
            signer = signer.with_credentials(credentials);
        }

        let builder = RequestBuilder::new(&config.base_url, &config.api_version, signer);

        info!(base_url = builder.base_url(), "Created BitoPro REST client");

        Self {
            builder,
            transport,
            clock: config.clock,
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.builder.signer().has_credentials()
    }

    /// The versioned base URL every request is sent to
    pub fn base_url(&self) -> &str {
        self.builder.base_url()
    }

    /// Assemble the request for an operation without sending it
    pub fn build_request(&self, endpoint: &Endpoint) -> RestResult<RestRequest> {
        let params = endpoint.params(self.clock.now_millis());
        self.builder
            .build(endpoint.scope(), endpoint.method(), &endpoint.path(), &params)
    }

    /// Execute an operation and return the decoded JSON response verbatim
    #[instrument(skip(self, endpoint), fields(operation = endpoint.name()))]
    pub async fn execute(&self, endpoint: Endpoint) -> RestResult<Value> {
        let request = self.build_request(&endpoint)?;

        debug!("Sending {} {}", request.method, endpoint.path());

        let response = self.transport.execute(request).await?;
        decode_response(response)
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Get tickers for all pairs, or for one pair
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "bito_twd")
    pub async fn get_tickers(&self, pair: Option<&str>) -> RestResult<Value> {
        self.market().get_tickers(pair).await
    }

    /// Get currency metadata
    pub async fn get_currencies(&self) -> RestResult<Value> {
        self.market().get_currencies().await
    }

    /// Get trading pair metadata
    pub async fn get_trading_pairs(&self) -> RestResult<Value> {
        self.market().get_trading_pairs().await
    }

    /// Get order book for a trading pair
    ///
    /// # Arguments
    /// * `pair` - Trading pair
    /// * `limit` - Number of price levels (default 5)
    pub async fn get_order_book(&self, pair: &str, limit: Option<u32>) -> RestResult<Value> {
        self.market().get_order_book(pair, limit).await
    }

    /// Get recent trades for a trading pair
    pub async fn get_recent_trades(&self, pair: &str) -> RestResult<Value> {
        self.market().get_recent_trades(pair).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        self.require_credentials()?;
        Ok(AccountEndpoints::new(self))
    }

    /// Get account balances
    pub async fn get_account_balance(&self) -> RestResult<Value> {
        self.account()?.get_balance().await
    }

    /// Get one order by pair and ID
    pub async fn get_order(&self, pair: &str, order_id: &str) -> RestResult<Value> {
        self.account()?.get_order(pair, order_id).await
    }

    /// Get order history
    pub async fn get_order_history(&self) -> RestResult<Value> {
        self.account()?.get_order_history().await
    }

    /// List orders for a pair
    pub async fn get_orders(
        &self,
        pair: &str,
        page: Option<u32>,
        active: Option<bool>,
    ) -> RestResult<Value> {
        self.account()?.get_orders(pair, page, active).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        self.require_credentials()?;
        Ok(TradingEndpoints::new(self))
    }

    /// Place a new order
    pub async fn create_order(&self, order: &OrderRequest) -> RestResult<Value> {
        self.trading()?.create_order(order).await
    }

    /// Cancel an order by pair and ID
    pub async fn cancel_order(&self, pair: &str, order_id: &str) -> RestResult<Value> {
        self.trading()?.cancel_order(pair, order_id).await
    }

    fn require_credentials(&self) -> RestResult<()> {
        if self.has_credentials() {
            Ok(())
        } else {
            Err(RestError::AuthRequired)
        }
    }
}

fn decode_response(response: RawResponse) -> RestResult<Value> {
    if !response.is_success() {
        warn!(status = response.status, "Request rejected by server");
        return Err(RestError::Status {
            status: response.status,
            body: response.body,
        });
    }

    match serde_json::from_str(&response.body) {
        Ok(value) => Ok(value),
        Err(e) => Err(RestError::Decode {
            message: e.to_string(),
            body: response.body,
        }),
    }
}

impl std::fmt::Debug for BitoproRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitoproRestClient")
            .field("base_url", &self.base_url())
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// API host, without version prefix
    pub base_url: String,
    /// API version prefix
    pub api_version: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Source of nonces and order timestamps
    pub clock: Arc<dyn Clock>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            clock: Arc::new(SystemClock),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set API version prefix
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
