//! API endpoint catalog and grouped endpoint accessors
//!
//! [`Endpoint`] is the declarative table: each operation knows its scope,
//! method, path and parameter shape. The group structs wrap it in typed
//! methods on top of the client.

pub mod account;
pub mod market;
pub mod trading;

pub use account::AccountEndpoints;
pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;

use bitopro_types::{HttpMethod, Pair, ParameterSet, RequestScope};

use crate::error::{RestError, RestResult};
use crate::types::OrderRequest;

/// Default order-book depth
pub const DEFAULT_ORDER_BOOK_LIMIT: u32 = 5;

/// Default page for order listings
pub const DEFAULT_ORDER_PAGE: u32 = 1;

/// One logical API operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET tickers[/{pair}]`
    Tickers { pair: Option<Pair> },
    /// `GET provisioning/currencies`
    Currencies,
    /// `GET provisioning/trading-pairs`
    TradingPairs,
    /// `GET order-book/{pair}?limit=`
    OrderBook { pair: Pair, limit: u32 },
    /// `GET trades/{pair}`
    RecentTrades { pair: Pair },
    /// `GET accounts/balance`
    AccountBalance,
    /// `GET orders/{pair}/{id}`
    OrderStatus { pair: Pair, order_id: String },
    /// `GET orders/history`
    OrderHistory,
    /// `GET orders/{pair}?page=&active=`
    OrderList { pair: Pair, page: u32, active: bool },
    /// `DELETE orders/{pair}/{id}`
    CancelOrder { pair: Pair, order_id: String },
    /// `POST orders/{pair}`
    CreateOrder(OrderRequest),
}

impl Endpoint {
    /// Tickers for every pair, or one pair when `pair` is non-empty
    pub fn tickers(pair: Option<&str>) -> RestResult<Self> {
        let pair = match pair.map(str::trim) {
            Some(p) if !p.is_empty() => Some(p.parse()?),
            _ => None,
        };
        Ok(Self::Tickers { pair })
    }

    pub fn order_book(pair: &str, limit: Option<u32>) -> RestResult<Self> {
        Ok(Self::OrderBook {
            pair: pair.parse()?,
            limit: limit.unwrap_or(DEFAULT_ORDER_BOOK_LIMIT),
        })
    }

    pub fn recent_trades(pair: &str) -> RestResult<Self> {
        Ok(Self::RecentTrades { pair: pair.parse()? })
    }

    pub fn order_status(pair: &str, order_id: &str) -> RestResult<Self> {
        Ok(Self::OrderStatus {
            pair: pair.parse()?,
            order_id: validate_order_id(order_id)?,
        })
    }

    pub fn order_list(pair: &str, page: Option<u32>, active: Option<bool>) -> RestResult<Self> {
        Ok(Self::OrderList {
            pair: pair.parse()?,
            page: page.unwrap_or(DEFAULT_ORDER_PAGE),
            active: active.unwrap_or(true),
        })
    }

    pub fn cancel_order(pair: &str, order_id: &str) -> RestResult<Self> {
        Ok(Self::CancelOrder {
            pair: pair.parse()?,
            order_id: validate_order_id(order_id)?,
        })
    }

    pub fn create_order(mut order: OrderRequest) -> RestResult<Self> {
        order.pair = order.pair.as_str().parse()?;
        Ok(Self::CreateOrder(order))
    }

    /// Operation name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tickers { .. } => "tickers",
            Self::Currencies => "currencies",
            Self::TradingPairs => "trading_pairs",
            Self::OrderBook { .. } => "order_book",
            Self::RecentTrades { .. } => "recent_trades",
            Self::AccountBalance => "account_balance",
            Self::OrderStatus { .. } => "order_status",
            Self::OrderHistory => "order_history",
            Self::OrderList { .. } => "order_list",
            Self::CancelOrder { .. } => "cancel_order",
            Self::CreateOrder(_) => "create_order",
        }
    }

    pub fn scope(&self) -> RequestScope {
        match self {
            Self::Tickers { .. }
            | Self::Currencies
            | Self::TradingPairs
            | Self::OrderBook { .. }
            | Self::RecentTrades { .. } => RequestScope::Public,
            Self::AccountBalance
            | Self::OrderStatus { .. }
            | Self::OrderHistory
            | Self::OrderList { .. }
            | Self::CancelOrder { .. }
            | Self::CreateOrder(_) => RequestScope::Private,
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Self::CancelOrder { .. } => HttpMethod::Delete,
            Self::CreateOrder(_) => HttpMethod::Post,
            _ => HttpMethod::Get,
        }
    }

    /// Path relative to the versioned base URL
    pub fn path(&self) -> String {
        match self {
            Self::Tickers { pair: Some(pair) } => format!("tickers/{}", pair),
            Self::Tickers { pair: None } => "tickers".to_string(),
            Self::Currencies => "provisioning/currencies".to_string(),
            Self::TradingPairs => "provisioning/trading-pairs".to_string(),
            Self::OrderBook { pair, .. } => format!("order-book/{}", pair),
            Self::RecentTrades { pair } => format!("trades/{}", pair),
            Self::AccountBalance => "accounts/balance".to_string(),
            Self::OrderStatus { pair, order_id } | Self::CancelOrder { pair, order_id } => {
                format!("orders/{}/{}", pair, order_id)
            }
            Self::OrderHistory => "orders/history".to_string(),
            Self::OrderList { pair, .. } => format!("orders/{}", pair),
            Self::CreateOrder(order) => format!("orders/{}", order.pair),
        }
    }

    /// Request parameters; `now_millis` stamps order creation
    pub fn params(&self, now_millis: i64) -> ParameterSet {
        match self {
            Self::OrderBook { limit, .. } => ParameterSet::new().with("limit", *limit),
            Self::OrderList { page, active, .. } => {
                ParameterSet::new().with("page", *page).with("active", *active)
            }
            Self::CreateOrder(order) => order.to_params(now_millis),
            _ => ParameterSet::new(),
        }
    }
}

fn validate_order_id(order_id: &str) -> RestResult<String> {
    let order_id = order_id.trim();
    if order_id.is_empty() {
        return Err(RestError::InvalidParameter("Empty order id".to_string()));
    }
    if order_id.contains('/') || order_id.contains('?') {
        return Err(RestError::InvalidParameter(format!(
            "Order id may not contain '/' or '?': {}",
            order_id
        )));
    }
    Ok(order_id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitopro_types::{OrderAction, ParamValue};
    use rust_decimal_macros::dec;

    #[test]
    fn test_public_catalog() {
        let all = Endpoint::tickers(None).unwrap();
        assert_eq!(all.path(), "tickers");
        assert_eq!(Endpoint::tickers(Some("")).unwrap().path(), "tickers");
        assert_eq!(Endpoint::tickers(Some("BITO_TWD")).unwrap().path(), "tickers/bito_twd");
        assert_eq!(Endpoint::Currencies.path(), "provisioning/currencies");
        assert_eq!(Endpoint::TradingPairs.path(), "provisioning/trading-pairs");
        assert_eq!(Endpoint::recent_trades("Bito_Twd").unwrap().path(), "trades/bito_twd");

        for endpoint in [all, Endpoint::Currencies, Endpoint::TradingPairs] {
            assert_eq!(endpoint.scope(), RequestScope::Public);
            assert_eq!(endpoint.method(), HttpMethod::Get);
            assert!(endpoint.params(0).is_empty());
        }
    }

    #[test]
    fn test_order_book_default_limit() {
        let book = Endpoint::order_book("BITO_TWD", None).unwrap();
        assert_eq!(book.path(), "order-book/bito_twd");
        assert_eq!(book.params(0).get("limit"), Some(&ParamValue::Int(5)));

        let deep = Endpoint::order_book("bito_twd", Some(10)).unwrap();
        assert_eq!(deep.params(0).get("limit"), Some(&ParamValue::Int(10)));
    }

    #[test]
    fn test_private_catalog() {
        assert_eq!(Endpoint::AccountBalance.path(), "accounts/balance");
        assert_eq!(Endpoint::OrderHistory.path(), "orders/history");

        let status = Endpoint::order_status("BITO_TWD", "12345678").unwrap();
        assert_eq!(status.path(), "orders/bito_twd/12345678");
        assert_eq!(status.method(), HttpMethod::Get);
        assert_eq!(status.scope(), RequestScope::Private);

        let cancel = Endpoint::cancel_order("bito_twd", "12345678").unwrap();
        assert_eq!(cancel.path(), "orders/bito_twd/12345678");
        assert_eq!(cancel.method(), HttpMethod::Delete);
        assert!(cancel.params(0).is_empty());
    }

    #[test]
    fn test_order_list_defaults() {
        let list = Endpoint::order_list("bito_twd", None, None).unwrap();
        let params = list.params(0);
        assert_eq!(params.get("page"), Some(&ParamValue::Int(1)));
        assert_eq!(params.get("active"), Some(&ParamValue::Bool(true)));

        let inactive = Endpoint::order_list("bito_twd", Some(2), Some(false)).unwrap();
        assert_eq!(inactive.params(0).get("active"), Some(&ParamValue::Bool(false)));
    }

    #[test]
    fn test_create_order_endpoint() {
        let order = OrderRequest::limit("BITO_TWD", OrderAction::Sell, dec!(600), dec!(123456));
        let endpoint = Endpoint::create_order(order).unwrap();

        assert_eq!(endpoint.path(), "orders/bito_twd");
        assert_eq!(endpoint.method(), HttpMethod::Post);
        assert_eq!(endpoint.scope(), RequestScope::Private);
        assert_eq!(endpoint.name(), "create_order");

        let params = endpoint.params(1_700_000_000_000);
        assert_eq!(params.get("timestamp"), Some(&ParamValue::Int(1_700_000_000_000)));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(matches!(
            Endpoint::order_book("", None),
            Err(RestError::InvalidParameter(_))
        ));
        assert!(Endpoint::order_status("bito_twd", "").is_err());
        assert!(Endpoint::cancel_order("bito_twd", "1/2").is_err());
        assert!(Endpoint::recent_trades("bito/twd").is_err());

        let order = OrderRequest::limit("bito twd", OrderAction::Buy, dec!(1), dec!(1));
        assert!(Endpoint::create_order(order).is_err());
    }
}
