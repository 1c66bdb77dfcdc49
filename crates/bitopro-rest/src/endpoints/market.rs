//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use serde_json::Value;
use tracing::instrument;

use super::Endpoint;
use crate::client::BitoproRestClient;
use crate::error::RestResult;

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a BitoproRestClient,
}

impl<'a> MarketEndpoints<'a> {
    pub(crate) fn new(client: &'a BitoproRestClient) -> Self {
        Self { client }
    }

    /// Get tickers
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "bito_twd"); `None` or empty for all pairs
    #[instrument(skip(self))]
    pub async fn get_tickers(&self, pair: Option<&str>) -> RestResult<Value> {
        self.client.execute(Endpoint::tickers(pair)?).await
    }

    /// Get information for every listed currency
    #[instrument(skip(self))]
    pub async fn get_currencies(&self) -> RestResult<Value> {
        self.client.execute(Endpoint::Currencies).await
    }

    /// Get information for every trading pair
    #[instrument(skip(self))]
    pub async fn get_trading_pairs(&self) -> RestResult<Value> {
        self.client.execute(Endpoint::TradingPairs).await
    }

    /// Get order book
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "bito_twd")
    /// * `limit` - Number of price levels per side (default 5)
    #[instrument(skip(self))]
    pub async fn get_order_book(&self, pair: &str, limit: Option<u32>) -> RestResult<Value> {
        self.client.execute(Endpoint::order_book(pair, limit)?).await
    }

    /// Get recent trades
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "bito_twd")
    #[instrument(skip(self))]
    pub async fn get_recent_trades(&self, pair: &str) -> RestResult<Value> {
        self.client.execute(Endpoint::recent_trades(pair)?).await
    }
}
