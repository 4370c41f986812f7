//! Output signal models handed to the portfolio consumer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final per-security decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

impl TradeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeAction::Buy => "BUY",
            TradeAction::Sell => "SELL",
            TradeAction::Hold => "HOLD",
        }
    }

    pub fn is_actionable(&self) -> bool {
        !matches!(self, TradeAction::Hold)
    }
}

/// Explainability entry attached to a composite signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalReason {
    pub description: String,
    pub weight: f64,
}

/// Fused per-security recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeSignal {
    pub symbol: String,
    pub action: TradeAction,
    /// Blended score in [-1, 1].
    pub score: f64,
    /// Decay-weighted aggregate sentiment in [-1, 1].
    pub sentiment_component: f64,
    /// Composite technical score, absent when history was insufficient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_component: Option<f64>,
    pub confidence: f64,
    /// True when the signal fell back to sentiment-only scoring.
    pub low_confidence: bool,
    pub story_count: usize,
    pub reasons: Vec<SignalReason>,
    pub timestamp: DateTime<Utc>,
}

/// Why a detected security was excluded from the final output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Last trade below the configured price floor.
    BelowPriceFloor,
    /// Listing venue is not a recognized US exchange.
    UnrecognizedExchange,
    /// The quote service failed or returned no usable price.
    QuoteUnavailable,
}

impl SkipReason {
    pub fn describe(&self) -> &'static str {
        match self {
            SkipReason::BelowPriceFloor => "price below floor",
            SkipReason::UnrecognizedExchange => "not listed on a recognized US exchange",
            SkipReason::QuoteUnavailable => "quote unavailable",
        }
    }
}

/// A security that was resolved but dropped before signal generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedSecurity {
    pub symbol: String,
    pub reason: SkipReason,
}

/// Per-story breakdown retained for the consumer's display layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDetail {
    pub snippet: String,
    pub sentiment_score: f64,
    pub sentiment_confidence: f64,
    pub term_hits: usize,
    /// ticker → relevance after merging direct and thematic evidence.
    pub tickers: Vec<(String, f64)>,
    pub age_hours: f64,
}

/// Everything one orchestration cycle produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub signals: Vec<CompositeSignal>,
    pub skipped: Vec<SkippedSecurity>,
    pub story_details: Vec<StoryDetail>,
    pub stories_analyzed: usize,
    pub tickers_detected: usize,
    pub summary: String,
    pub timestamp: DateTime<Utc>,
}
