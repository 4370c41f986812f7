//! Engine configuration with environment overrides.
//!
//! All tunables of the scoring pipeline live here. None of the weights or
//! thresholds carry predictive validity; they are heuristics and are kept
//! out of the pipeline code so deployments can adjust them.

use std::env;
use std::time::Duration;

/// Returns the runtime environment name (`ENVIRONMENT`, default "sandbox").
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Weight of the aggregated sentiment component in the final blend.
    pub sentiment_weight: f64,
    /// Weight of the technical component in the final blend.
    pub technical_weight: f64,
    /// Decision threshold θ: final > θ → BUY, final < -θ → SELL.
    /// A final score of exactly ±θ resolves to HOLD.
    pub decision_threshold: f64,
    /// Half-life in hours for exponential story decay.
    pub decay_half_life_hours: f64,
    /// Minimum blended confidence for a non-HOLD decision.
    pub min_confidence: f64,
    /// Price floor for the exchange/price filter (quote currency).
    pub min_price: f64,
    /// Minimum number of daily bars required for technical scoring.
    pub min_lookback: usize,
    /// Cap on recommendations emitted per batch.
    pub max_recommendations: usize,
    /// Drop HOLD rows from the batch report.
    pub suppress_holds: bool,
    /// TTL for dynamic resolution cache entries.
    pub resolution_cache_ttl: Duration,
    /// Per-call timeout for external HTTP services.
    pub http_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sentiment_weight: 0.55,
            technical_weight: 0.45,
            decision_threshold: 0.15,
            decay_half_life_hours: 6.0,
            min_confidence: 0.3,
            min_price: 8.0,
            min_lookback: 50,
            max_recommendations: 8,
            suppress_holds: true,
            resolution_cache_ttl: Duration::from_secs(30 * 60),
            http_timeout: Duration::from_secs(10),
        }
    }
}

impl EngineConfig {
    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(v) = env_f64("SENTIMENT_WEIGHT") {
            config.sentiment_weight = v;
        }
        if let Some(v) = env_f64("TECHNICAL_WEIGHT") {
            config.technical_weight = v;
        }
        if let Some(v) = env_f64("DECISION_THRESHOLD") {
            config.decision_threshold = v;
        }
        if let Some(v) = env_f64("DECAY_HALF_LIFE_HOURS") {
            config.decay_half_life_hours = v;
        }
        if let Some(v) = env_f64("MIN_CONFIDENCE") {
            config.min_confidence = v;
        }
        if let Some(v) = env_f64("MIN_PRICE") {
            config.min_price = v;
        }
        if let Some(v) = env_usize("MIN_LOOKBACK") {
            config.min_lookback = v;
        }
        if let Some(v) = env_usize("MAX_RECOMMENDATIONS") {
            config.max_recommendations = v;
        }
        if let Some(v) = env_u64("RESOLUTION_CACHE_TTL_SECONDS") {
            config.resolution_cache_ttl = Duration::from_secs(v);
        }
        if let Some(v) = env_u64("HTTP_TIMEOUT_SECONDS") {
            config.http_timeout = Duration::from_secs(v);
        }

        config
    }

    /// The two blend weights must partition the final score.
    pub fn verify_weights(&self) -> bool {
        (self.sentiment_weight + self.technical_weight - 1.0).abs() < 1e-9
    }
}

fn env_f64(key: &str) -> Option<f64> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

fn env_usize(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

fn env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
