//! TTL cache for dynamic symbol resolution.
//!
//! Entries record both positive and negative outcomes so an unresolvable
//! name does not trigger a fresh external call on every batch. A per-key
//! in-flight lock collapses concurrent lookups for the same name to a
//! single outstanding external call.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

#[derive(Debug, Clone)]
struct CacheEntry {
    /// `Some(ticker)` for a validated symbol, `None` for a confirmed miss.
    ticker: Option<String>,
    checked_at: Instant,
}

pub struct ResolutionCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ResolutionCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Look up a key. Outer `None` means miss or expired; inner value is the
    /// cached resolution outcome.
    pub async fn lookup(&self, key: &str) -> Option<Option<String>> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if entry.checked_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.ticker.clone())
    }

    /// Record an outcome (positive or negative) for a key.
    pub async fn store(&self, key: &str, ticker: Option<String>) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            CacheEntry {
                ticker,
                checked_at: Instant::now(),
            },
        );
    }

    /// Acquire the in-flight lock for a key. While the guard is held, any
    /// concurrent `key_guard` call for the same key waits; callers re-check
    /// the cache after acquiring so only one of them performs the external
    /// call.
    pub async fn key_guard(&self, key: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut in_flight = self.in_flight.lock().await;
            // Drop stale locks nobody is waiting on.
            in_flight.retain(|k, l| k.as_str() == key || Arc::strong_count(l) > 1);
            in_flight
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
