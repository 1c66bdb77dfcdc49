//! Demo: every BitoPro REST endpoint
//!
//! Calls each public endpoint, then each private read endpoint when
//! credentials are available. Order cancellation and placement only run
//! with `--trade`.
//!
//! Credentials are read from `BITOPRO_ACCOUNT`, `BITOPRO_API_KEY` and
//! `BITOPRO_API_SECRET`.
//!
//! Run: cargo run --bin all_api_endpoints [-- --trade]

use bitopro_rest::{
    BitoproRestClient, Credentials, OrderAction, OrderRequest, RestError, RestResult,
};
use colored::*;
use rust_decimal_macros::dec;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

const PAIR: &str = "bito_twd";
const ORDER_ID: &str = "12345678";

fn report(label: &str, result: RestResult<Value>) {
    match result {
        Ok(value) => {
            println!("{} {}", "[I]".green(), label);
            println!("    {}\n", value);
        }
        Err(err) => {
            println!("{} {}: {}", "[X]".red(), label, err);
            if let Some(body) = err.response_body() {
                println!("    {}\n", body.yellow());
            }
        }
    }
}

fn sample_order() -> OrderRequest {
    OrderRequest::limit(PAIR, OrderAction::Sell, dec!(600), dec!(123456))
}

fn credentials_from_env() -> Option<Credentials> {
    let account = std::env::var("BITOPRO_ACCOUNT").ok()?;
    let api_key = std::env::var("BITOPRO_API_KEY").ok()?;
    let api_secret = std::env::var("BITOPRO_API_SECRET").ok()?;

    match Credentials::new(account, api_key, api_secret) {
        Ok(creds) => Some(creds),
        Err(err) => {
            println!("{} Ignoring credentials: {}", "[X]".red(), err);
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), RestError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let trade = std::env::args().any(|arg| arg == "--trade");

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  BITOPRO REST API - ALL ENDPOINTS".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = match credentials_from_env() {
        Some(creds) => BitoproRestClient::with_credentials(creds)?,
        None => BitoproRestClient::new()?,
    };

    // Public (Read)
    report("get_tickers()", client.get_tickers(None).await);
    report("get_currencies()", client.get_currencies().await);
    report("get_trading_pairs()", client.get_trading_pairs().await);
    report(
        "get_order_book('bito_twd', 10)",
        client.get_order_book(PAIR, Some(10)).await,
    );
    report("get_recent_trades('bito_twd')", client.get_recent_trades(PAIR).await);

    if !client.has_credentials() {
        println!(
            "{} No credentials in environment, skipping private endpoints",
            "[!]".yellow()
        );
        return Ok(());
    }

    // Private (Read)
    report("get_account_balance()", client.get_account_balance().await);
    report(
        "get_order('bito_twd', 12345678)",
        client.get_order(PAIR, ORDER_ID).await,
    );
    report("get_order_history()", client.get_order_history().await);
    report(
        "get_orders('bito_twd', 1, false)",
        client.get_orders(PAIR, Some(1), Some(false)).await,
    );

    // Private (Write)
    if trade {
        report(
            "cancel_order('bito_twd', 12345678)",
            client.cancel_order(PAIR, ORDER_ID).await,
        );

        let order = sample_order();
        report(
            "create_order('bito_twd', SELL, 600, 123456)",
            client.create_order(&order).await,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitopro_rest::OrderType;

    #[test]
    fn test_sample_order() {
        let order = sample_order();
        assert_eq!(order.pair.as_str(), PAIR);
        assert_eq!(order.action, OrderAction::Sell);
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.amount, dec!(600));
        assert_eq!(order.price, dec!(123456));
    }
}
