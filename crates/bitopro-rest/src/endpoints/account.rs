//! Private account endpoints
//!
//! These endpoints require authentication.

use serde_json::Value;
use tracing::instrument;

use super::Endpoint;
use crate::client::BitoproRestClient;
use crate::error::RestResult;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a BitoproRestClient,
}

impl<'a> AccountEndpoints<'a> {
    pub(crate) fn new(client: &'a BitoproRestClient) -> Self {
        Self { client }
    }

    /// Get balances for every currency
    #[instrument(skip(self))]
    pub async fn get_balance(&self) -> RestResult<Value> {
        self.client.execute(Endpoint::AccountBalance).await
    }

    /// Get one order
    ///
    /// # Arguments
    /// * `pair` - Trading pair the order was placed on
    /// * `order_id` - Order ID
    #[instrument(skip(self))]
    pub async fn get_order(&self, pair: &str, order_id: &str) -> RestResult<Value> {
        self.client.execute(Endpoint::order_status(pair, order_id)?).await
    }

    /// Get completed orders across all pairs
    #[instrument(skip(self))]
    pub async fn get_order_history(&self) -> RestResult<Value> {
        self.client.execute(Endpoint::OrderHistory).await
    }

    /// List orders for a pair
    ///
    /// # Arguments
    /// * `pair` - Trading pair
    /// * `page` - Page number (default 1)
    /// * `active` - Only orders still in progress (default true)
    #[instrument(skip(self))]
    pub async fn get_orders(
        &self,
        pair: &str,
        page: Option<u32>,
        active: Option<bool>,
    ) -> RestResult<Value> {
        self.client
            .execute(Endpoint::order_list(pair, page, active)?)
            .await
    }
}
