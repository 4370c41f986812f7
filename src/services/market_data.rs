//! External data-service contracts.
//!
//! Three narrow seams back the pipeline: daily price history, a quote
//! (venue + last price) for the listing filter, and free-text symbol
//! search for dynamic resolution. Implementations may block or fail per
//! call; callers isolate every failure to the security it concerns.

use crate::errors::EngineResult;
use crate::models::Candle;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Venue and last traded price for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub exchange: String,
    pub last_price: f64,
}

/// One result row from the symbol-search service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolMatch {
    pub symbol: String,
    pub exchange: String,
    pub display_name: String,
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Ordered-by-time daily bars, most recent last. May return fewer than
    /// `limit` bars; the caller decides whether that is enough.
    async fn get_history(&self, symbol: &str, limit: usize) -> EngineResult<Vec<Candle>>;

    /// Current quote for the exchange/price filter.
    async fn get_quote(&self, symbol: &str) -> EngineResult<Quote>;
}

#[async_trait]
pub trait SymbolSearch: Send + Sync {
    /// Resolve free text to candidate symbols; callers take the top match.
    async fn search(&self, query: &str) -> EngineResult<Vec<SymbolMatch>>;
}
