//! Free text → security candidates.
//!
//! Ordered resolution stages, each adding candidates and never removing
//! ones already found:
//!   1. static alias table (longest match first)
//!   2. ticker-shaped tokens, denylist-filtered
//!   3. dynamic lookup of remaining proper nouns via symbol search
//!
//! Theme expansion is a separate stage composed by the orchestrator.

pub mod aliases;
pub mod cache;
pub mod dynamic;
pub mod themes;
pub mod tickers;

pub use cache::ResolutionCache;
pub use dynamic::DynamicResolver;
pub use themes::ThemeMapper;

use crate::models::{ResolutionMethod, SecurityCandidate};
use futures_util::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;

/// Relevance assigned to dynamically resolved names. Below a repeated
/// direct mention, above a typical theme hit.
const LOOKUP_RELEVANCE: f64 = 0.7;

pub struct EntityResolver {
    extra_aliases: Vec<(String, String)>,
    dynamic: Option<Arc<DynamicResolver>>,
}

impl EntityResolver {
    pub fn new() -> Self {
        Self {
            extra_aliases: Vec::new(),
            dynamic: None,
        }
    }

    /// Enable the dynamic lookup stage.
    pub fn with_dynamic(mut self, dynamic: Arc<DynamicResolver>) -> Self {
        self.dynamic = Some(dynamic);
        self
    }

    /// Add deployment-specific aliases on top of the built-in table.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        self.add_aliases(aliases);
        self
    }

    pub fn add_aliases<I, S>(&mut self, aliases: I)
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        self.extra_aliases.extend(
            aliases
                .into_iter()
                .map(|(alias, ticker)| (alias.into().to_lowercase(), ticker.into())),
        );
    }

    /// Run all resolution stages over one text.
    pub async fn resolve(&self, text: &str) -> Vec<SecurityCandidate> {
        let mut hits: HashMap<String, (usize, ResolutionMethod)> = HashMap::new();

        for (ticker, count) in aliases::scan_aliases(text, &self.extra_aliases) {
            let entry = hits.entry(ticker).or_insert((0, ResolutionMethod::Alias));
            entry.0 += count;
        }

        for token in tickers::extract_ticker_tokens(text) {
            let entry = hits.entry(token).or_insert((0, ResolutionMethod::Ticker));
            entry.0 += 1;
        }

        let mut candidates = relevance_from_hits(&hits);

        if let Some(dynamic) = &self.dynamic {
            let names: Vec<String> = tickers::extract_proper_nouns(text)
                .into_iter()
                .filter(|name| !self.known_alias(name))
                .collect();

            let lookups = join_all(
                names
                    .iter()
                    .map(|name| dynamic.resolve_name(name)),
            )
            .await;

            for ticker in lookups.into_iter().flatten() {
                if !hits.contains_key(&ticker) {
                    candidates.push(SecurityCandidate::new(
                        ticker,
                        ResolutionMethod::Lookup,
                        LOOKUP_RELEVANCE,
                    ));
                }
            }
        }

        candidates
    }

    fn known_alias(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        aliases::COMPANY_ALIASES
            .iter()
            .any(|(alias, _)| *alias == lower)
            || self.extra_aliases.iter().any(|(alias, _)| *alias == lower)
    }
}

impl Default for EntityResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Hit counts → relevance in [0, 1], normalized by the strongest mention
/// within the text so repeated mentions outrank passing ones.
fn relevance_from_hits(
    hits: &HashMap<String, (usize, ResolutionMethod)>,
) -> Vec<SecurityCandidate> {
    let max_hits = hits.values().map(|(count, _)| *count).max().unwrap_or(0);
    if max_hits == 0 {
        return Vec::new();
    }

    hits.iter()
        .map(|(ticker, (count, method))| {
            let relevance = (*count as f64 / max_hits as f64).min(1.0);
            SecurityCandidate::new(ticker.clone(), *method, relevance)
        })
        .collect()
}
