//! Unit tests for the exchange/price filter

use async_trait::async_trait;
use newsquant::errors::{EngineError, EngineResult};
use newsquant::filters::ExchangePriceFilter;
use newsquant::models::{Candle, SkipReason};
use newsquant::services::market_data::{MarketDataProvider, Quote};
use std::sync::Arc;

struct StubQuotes {
    exchange: &'static str,
    price: f64,
    fail: bool,
}

#[async_trait]
impl MarketDataProvider for StubQuotes {
    async fn get_history(&self, _symbol: &str, _limit: usize) -> EngineResult<Vec<Candle>> {
        Ok(Vec::new())
    }

    async fn get_quote(&self, symbol: &str) -> EngineResult<Quote> {
        if self.fail {
            return Err(EngineError::malformed("quote service down"));
        }
        Ok(Quote {
            symbol: symbol.to_string(),
            exchange: self.exchange.to_string(),
            last_price: self.price,
        })
    }
}

fn filter_with(exchange: &'static str, price: f64) -> ExchangePriceFilter {
    ExchangePriceFilter::new(
        Arc::new(StubQuotes {
            exchange,
            price,
            fail: false,
        }),
        8.0,
    )
}

#[tokio::test]
async fn test_price_at_floor_passes() {
    let filter = filter_with("NMS", 8.0);
    let quote = filter.admit("ACME").await.expect("8.00 must pass");
    assert_eq!(quote.last_price, 8.0);
}

#[tokio::test]
async fn test_price_below_floor_fails() {
    let filter = filter_with("NMS", 7.99);
    assert_eq!(
        filter.admit("ACME").await.unwrap_err(),
        SkipReason::BelowPriceFloor
    );
}

#[tokio::test]
async fn test_unrecognized_exchange_fails() {
    let filter = filter_with("LSE", 120.0);
    assert_eq!(
        filter.admit("ACME").await.unwrap_err(),
        SkipReason::UnrecognizedExchange
    );
}

#[tokio::test]
async fn test_quote_failure_is_skip_not_panic() {
    let filter = ExchangePriceFilter::new(
        Arc::new(StubQuotes {
            exchange: "NMS",
            price: 10.0,
            fail: true,
        }),
        8.0,
    );
    assert_eq!(
        filter.admit("ACME").await.unwrap_err(),
        SkipReason::QuoteUnavailable
    );
}
