//! Batch orchestration: news in, recommendations out.
//!
//! One synchronous pass per cycle. Every external failure is contained to
//! the candidate or security it concerns; the batch always emits whatever
//! subset it could compute, with skipped securities listed explicitly.

use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::filters::ExchangePriceFilter;
use crate::models::{
    merge_candidates, BatchReport, NewsItem, SkippedSecurity, StoryDetail, TechnicalSnapshot,
    TradeAction,
};
use crate::resolver::{DynamicResolver, EntityResolver, ThemeMapper};
use crate::sentiment::SentimentScorer;
use crate::services::market_data::{MarketDataProvider, SymbolSearch};
use crate::signals::{FusionEngine, StoryObservation, TechnicalEngine};
use chrono::Utc;
use futures_util::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Bars requested from the history service; comfortably above the minimum
/// lookback so weekends and holidays cannot starve the indicators.
const HISTORY_FETCH_LIMIT: usize = 120;

/// Theme-derived relevance is added at this strength when merged with
/// direct mentions.
const THEME_DAMPING: f64 = 0.6;

pub struct TradingEngine {
    config: EngineConfig,
    scorer: SentimentScorer,
    resolver: EntityResolver,
    filter: Arc<ExchangePriceFilter>,
    technical: TechnicalEngine,
    fusion: FusionEngine,
    market_data: Arc<dyn MarketDataProvider>,
}

impl TradingEngine {
    pub fn new(
        config: EngineConfig,
        market_data: Arc<dyn MarketDataProvider>,
        search: Arc<dyn SymbolSearch>,
    ) -> Self {
        let filter = Arc::new(ExchangePriceFilter::new(
            market_data.clone(),
            config.min_price,
        ));
        let dynamic = Arc::new(DynamicResolver::new(
            search,
            filter.clone(),
            config.resolution_cache_ttl,
        ));
        let resolver = EntityResolver::new().with_dynamic(dynamic);
        let technical = TechnicalEngine::new(config.min_lookback);
        let fusion = FusionEngine::new(&config);

        Self {
            config,
            scorer: SentimentScorer::new(),
            resolver,
            filter,
            technical,
            fusion,
            market_data,
        }
    }

    /// Add deployment-specific company aliases.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        self.resolver.add_aliases(aliases);
        self
    }

    /// Analyze one batch of news items and emit recommendations.
    pub async fn analyze_batch(&self, stories: &[NewsItem]) -> BatchReport {
        let now = Utc::now();
        let mut observations: HashMap<String, Vec<StoryObservation>> = HashMap::new();
        let mut story_details = Vec::new();

        for story in stories {
            let text = story.text();
            if text.trim().is_empty() {
                debug!("skipping empty news item");
                continue;
            }

            let sentiment = self.scorer.score(&text);
            let direct = self.resolver.resolve(&text).await;
            let themed = ThemeMapper::map(&text);

            // Direct mentions keep their relevance; theme evidence is added
            // dampened and the combined relevance capped at 1.
            let mut combined: HashMap<String, f64> = merge_candidates(direct)
                .into_iter()
                .map(|(ticker, candidate)| (ticker, candidate.relevance))
                .collect();
            for theme in themed {
                let entry = combined.entry(theme.ticker).or_insert(0.0);
                *entry = (*entry + theme.relevance * THEME_DAMPING).min(1.0);
            }

            let age_hours = story.age_hours(now);
            story_details.push(StoryDetail {
                snippet: story.snippet(),
                sentiment_score: sentiment.score,
                sentiment_confidence: sentiment.confidence,
                term_hits: sentiment.term_hits,
                tickers: {
                    let mut tickers: Vec<(String, f64)> =
                        combined.iter().map(|(t, r)| (t.clone(), *r)).collect();
                    tickers.sort_by(|a, b| a.0.cmp(&b.0));
                    tickers
                },
                age_hours,
            });

            for (ticker, relevance) in combined {
                observations
                    .entry(ticker)
                    .or_default()
                    .push(StoryObservation {
                        sentiment: sentiment.score,
                        confidence: sentiment.confidence,
                        relevance,
                        age_hours,
                        snippet: story.snippet(),
                    });
            }
        }

        // Listing filter: prune everything cheap, foreign, or unquotable
        // before spending history calls on it.
        let mut detected: Vec<String> = observations.keys().cloned().collect();
        detected.sort();

        let mut admitted = Vec::new();
        let mut skipped = Vec::new();
        for symbol in detected {
            match self.filter.admit(&symbol).await {
                Ok(_) => admitted.push(symbol),
                Err(reason) => {
                    debug!(symbol = %symbol, reason = reason.describe(), "security skipped");
                    skipped.push(SkippedSecurity { symbol, reason });
                }
            }
        }

        // Technical snapshots for the surviving set, fetched concurrently.
        let snapshots: HashMap<String, Option<TechnicalSnapshot>> = join_all(
            admitted
                .iter()
                .map(|symbol| async move { (symbol.clone(), self.technical_snapshot(symbol).await) }),
        )
        .await
        .into_iter()
        .collect();

        let mut signals = Vec::new();
        for symbol in &admitted {
            let Some(story_obs) = observations.get(symbol) else {
                continue;
            };
            let technical = snapshots.get(symbol).and_then(|s| s.as_ref());
            if let Some(signal) = self.fusion.fuse(symbol, story_obs, technical, now) {
                signals.push(signal);
            }
        }

        // Actionable signals first, then by confidence.
        signals.sort_by(|a, b| {
            action_rank(a.action)
                .cmp(&action_rank(b.action))
                .then(b.confidence.total_cmp(&a.confidence))
        });
        if self.config.suppress_holds {
            signals.retain(|s| s.action.is_actionable());
        }
        signals.truncate(self.config.max_recommendations);

        let buys = signals.iter().filter(|s| s.action == TradeAction::Buy).count();
        let sells = signals
            .iter()
            .filter(|s| s.action == TradeAction::Sell)
            .count();
        let bias = if buys > sells {
            "bullish"
        } else if sells > buys {
            "bearish"
        } else {
            "mixed"
        };
        let summary = format!(
            "Analyzed {} stories, {} tradeable tickers. Overall bias is {} with {} BUY and {} SELL signals.",
            stories.len(),
            admitted.len(),
            bias,
            buys,
            sells
        );

        info!(
            stories = stories.len(),
            admitted = admitted.len(),
            signals = signals.len(),
            skipped = skipped.len(),
            "batch analysis complete"
        );

        BatchReport {
            signals,
            skipped,
            story_details,
            stories_analyzed: stories.len(),
            tickers_detected: admitted.len(),
            summary,
            timestamp: now,
        }
    }

    /// History fetch + indicator evaluation, with both failure modes folded
    /// into `None` so the security degrades to sentiment-only scoring.
    async fn technical_snapshot(&self, symbol: &str) -> Option<TechnicalSnapshot> {
        let candles = match self
            .market_data
            .get_history(symbol, HISTORY_FETCH_LIMIT)
            .await
        {
            Ok(candles) => candles,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "history fetch failed, sentiment-only fallback");
                return None;
            }
        };

        match self.technical.evaluate(symbol, &candles) {
            Ok(snapshot) => Some(snapshot),
            Err(EngineError::InsufficientData {
                available,
                required,
                ..
            }) => {
                debug!(
                    symbol = %symbol,
                    available,
                    required,
                    "insufficient history, sentiment-only fallback"
                );
                None
            }
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "technical evaluation failed");
                None
            }
        }
    }
}

fn action_rank(action: TradeAction) -> u8 {
    match action {
        TradeAction::Buy => 0,
        TradeAction::Sell => 1,
        TradeAction::Hold => 2,
    }
}
