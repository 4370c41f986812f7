//! Exchange listing and price-floor filter.
//!
//! Admits a security only when it trades on a recognized US venue at or
//! above the configured floor. Used both to validate dynamic-resolution
//! results and to prune the candidate set before technical analysis.

use crate::models::SkipReason;
use crate::services::market_data::{MarketDataProvider, Quote};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::warn;

/// Recognized venue identifiers, both short codes and display names.
pub const US_EXCHANGES: &[&str] = &[
    "NMS",
    "NGM",
    "NCM",
    "NYQ",
    "PCX",
    "ASE",
    "NYSE",
    "NASDAQ",
    "NasdaqGS",
    "NasdaqGM",
    "NasdaqCM",
    "NYSE Arca",
    "NYSE American",
];

/// Quotes are reused within a cycle rather than refetched per candidate.
const QUOTE_TTL: Duration = Duration::from_secs(120);

pub fn is_recognized_exchange(exchange: &str) -> bool {
    US_EXCHANGES.contains(&exchange)
}

pub struct ExchangePriceFilter {
    quotes: Arc<dyn MarketDataProvider>,
    min_price: f64,
    cache: RwLock<HashMap<String, (Quote, Instant)>>,
}

impl ExchangePriceFilter {
    pub fn new(quotes: Arc<dyn MarketDataProvider>, min_price: f64) -> Self {
        Self {
            quotes,
            min_price,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Pass/fail check for one ticker. A price of exactly the floor passes.
    pub async fn admit(&self, symbol: &str) -> Result<Quote, SkipReason> {
        let quote = match self.cached_quote(symbol).await {
            Some(quote) => quote,
            None => {
                let quote = self.quotes.get_quote(symbol).await.map_err(|e| {
                    warn!(symbol = %symbol, error = %e, "quote lookup failed");
                    SkipReason::QuoteUnavailable
                })?;
                let mut cache = self.cache.write().await;
                cache.insert(symbol.to_string(), (quote.clone(), Instant::now()));
                quote
            }
        };

        if !is_recognized_exchange(&quote.exchange) {
            return Err(SkipReason::UnrecognizedExchange);
        }
        if quote.last_price < self.min_price {
            return Err(SkipReason::BelowPriceFloor);
        }
        Ok(quote)
    }

    async fn cached_quote(&self, symbol: &str) -> Option<Quote> {
        let cache = self.cache.read().await;
        let (quote, fetched_at) = cache.get(symbol)?;
        if fetched_at.elapsed() >= QUOTE_TTL {
            return None;
        }
        Some(quote.clone())
    }
}
