//! Dynamic name resolution through the external symbol-search service.

use crate::filters::ExchangePriceFilter;
use crate::resolver::cache::ResolutionCache;
use crate::services::market_data::SymbolSearch;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub struct DynamicResolver {
    search: Arc<dyn SymbolSearch>,
    filter: Arc<ExchangePriceFilter>,
    cache: ResolutionCache,
}

impl DynamicResolver {
    pub fn new(
        search: Arc<dyn SymbolSearch>,
        filter: Arc<ExchangePriceFilter>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            search,
            filter,
            cache: ResolutionCache::new(cache_ttl),
        }
    }

    /// Resolve a free-text name to a validated ticker, or `None`.
    ///
    /// Cache-first; on a miss the per-key guard ensures one outstanding
    /// external call per name even under concurrent batches. Successful
    /// lookups cache both hits and misses; transport failures are dropped
    /// without caching so the next cycle can retry.
    pub async fn resolve_name(&self, name: &str) -> Option<String> {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }

        if let Some(cached) = self.cache.lookup(&key).await {
            return cached;
        }

        let _guard = self.cache.key_guard(&key).await;
        // Another task may have populated the entry while we waited.
        if let Some(cached) = self.cache.lookup(&key).await {
            return cached;
        }

        match self.query(name).await {
            Ok(outcome) => {
                self.cache.store(&key, outcome.clone()).await;
                outcome
            }
            Err(()) => None,
        }
    }

    /// One search round-trip plus exchange/price validation of the top match.
    /// `Err(())` marks a transport-level failure that must not be cached.
    async fn query(&self, name: &str) -> Result<Option<String>, ()> {
        let matches = match self.search.search(name).await {
            Ok(matches) => matches,
            Err(e) => {
                warn!(name = %name, error = %e, "symbol search failed, dropping candidate");
                return Err(());
            }
        };

        let Some(top) = matches.into_iter().next() else {
            debug!(name = %name, "symbol search returned no matches");
            return Ok(None);
        };

        match self.filter.admit(&top.symbol).await {
            Ok(_) => {
                debug!(name = %name, symbol = %top.symbol, "dynamically resolved");
                Ok(Some(top.symbol))
            }
            Err(reason) => {
                debug!(
                    name = %name,
                    symbol = %top.symbol,
                    reason = reason.describe(),
                    "search match rejected by listing filter"
                );
                Ok(None)
            }
        }
    }
}
