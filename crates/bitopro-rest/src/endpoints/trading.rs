//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use serde_json::Value;
use tracing::{debug, instrument};

use super::Endpoint;
use crate::client::BitoproRestClient;
use crate::error::RestResult;
use crate::types::OrderRequest;

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a BitoproRestClient,
}

impl<'a> TradingEndpoints<'a> {
    pub(crate) fn new(client: &'a BitoproRestClient) -> Self {
        Self { client }
    }

    /// Place a new order
    ///
    /// The order is stamped with the client clock's current time.
    #[instrument(
        skip(self, order),
        fields(pair = %order.pair, action = %order.action, order_type = %order.order_type)
    )]
    pub async fn create_order(&self, order: &OrderRequest) -> RestResult<Value> {
        debug!(
            "Placing {} {} order for {} @ {}",
            order.action, order.order_type, order.amount, order.price
        );
        self.client
            .execute(Endpoint::create_order(order.clone())?)
            .await
    }

    /// Cancel an order
    ///
    /// # Arguments
    /// * `pair` - Trading pair the order was placed on
    /// * `order_id` - Order ID to cancel
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, pair: &str, order_id: &str) -> RestResult<Value> {
        debug!("Cancelling order {}", order_id);
        self.client
            .execute(Endpoint::cancel_order(pair, order_id)?)
            .await
    }
}
