//! Security candidates produced by the resolution stages.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a candidate was derived from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionMethod {
    /// Matched the static company alias table.
    Alias,
    /// Matched a ticker-shaped token in the text.
    Ticker,
    /// Implied by a theme keyword basket.
    Theme,
    /// Resolved through the external symbol-search service.
    Lookup,
}

/// One resolved (or tentatively resolved) security mention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityCandidate {
    pub ticker: String,
    pub method: ResolutionMethod,
    /// Relevance weight in [0, 1]; direct mentions outrank theme hits.
    pub relevance: f64,
}

impl SecurityCandidate {
    pub fn new(ticker: impl Into<String>, method: ResolutionMethod, relevance: f64) -> Self {
        Self {
            ticker: ticker.into(),
            method,
            relevance: relevance.clamp(0.0, 1.0),
        }
    }
}

/// Merge candidates by ticker, keeping the highest relevance seen.
///
/// Theme-derived relevance is dampened before the merge by the caller; here
/// duplicates simply collapse to the strongest evidence.
pub fn merge_candidates(candidates: Vec<SecurityCandidate>) -> HashMap<String, SecurityCandidate> {
    let mut merged: HashMap<String, SecurityCandidate> = HashMap::new();
    for candidate in candidates {
        match merged.get_mut(&candidate.ticker) {
            Some(existing) => {
                if candidate.relevance > existing.relevance {
                    *existing = candidate;
                }
            }
            None => {
                merged.insert(candidate.ticker.clone(), candidate);
            }
        }
    }
    merged
}
