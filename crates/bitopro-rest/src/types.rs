//! Request types for BitoPro REST endpoints
//!
//! Responses are returned as raw JSON, so only request shapes live here.

pub use bitopro_types::{
    HttpMethod, OrderAction, OrderType, Pair, ParamValue, ParameterSet, RequestScope,
};
use rust_decimal::Decimal;

/// Order request for `POST orders/{pair}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Trading pair (lower-cased)
    pub pair: Pair,
    /// Buy or sell
    pub action: OrderAction,
    /// Order amount in base currency
    pub amount: Decimal,
    /// Limit price in quote currency
    pub price: Decimal,
    /// Order type
    pub order_type: OrderType,
}

impl OrderRequest {
    /// Create a limit order
    pub fn limit(
        pair: impl Into<Pair>,
        action: OrderAction,
        amount: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            pair: pair.into(),
            action,
            amount,
            price,
            order_type: OrderType::Limit,
        }
    }

    /// Create a market order
    ///
    /// The API still expects a price field on market orders.
    pub fn market(
        pair: impl Into<Pair>,
        action: OrderAction,
        amount: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            order_type: OrderType::Market,
            ..Self::limit(pair, action, amount, price)
        }
    }

    /// Set order type
    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    /// Body parameters, in the order the API documents them
    pub fn to_params(&self, timestamp_millis: i64) -> ParameterSet {
        ParameterSet::new()
            .with("action", self.action.as_str())
            .with("amount", self.amount)
            .with("price", self.price)
            .with("timestamp", timestamp_millis)
            .with("type", self.order_type.as_str())
    }
}
