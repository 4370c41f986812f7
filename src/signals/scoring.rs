//! Per-indicator normalization to the common [-1, 1] scale.
//!
//! Each function is a pure, stateless transform so it can be tested without
//! the rest of the pipeline. Nothing leaves this module out of range.

use crate::indicators::{EmaSlope, MacdReading, SmaTrend, VolumeTrend};

/// ROC percentage treated as a full-scale move; ±10% maps to ±1.
pub const ROC_FULL_SCALE_PCT: f64 = 10.0;

/// Clamp any scalar into the signal range.
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// Map RSI's [0, 100] linearly onto [-1, 1]; 50 is neutral.
pub fn normalize_rsi(rsi: f64) -> f64 {
    clamp_score((rsi - 50.0) / 50.0)
}

/// Directional trend score from price vs the short and long averages.
///
/// Above both with a golden cross scores fully bullish; below both with a
/// dead cross fully bearish; mixed states attenuate toward zero.
pub fn score_sma_trend(trend: &SmaTrend) -> f64 {
    let mut score = 0.0;
    score += if trend.price > trend.sma_short { 0.3 } else { -0.3 };
    score += if trend.price > trend.sma_long { 0.3 } else { -0.3 };
    score += if trend.sma_short > trend.sma_long { 0.4 } else { -0.4 };
    clamp_score(score)
}

/// EMA slope as a volatility-relative z-score, clamped.
pub fn score_ema_slope(slope: &EmaSlope) -> f64 {
    if slope.volatility < 1e-10 {
        return 0.0;
    }
    clamp_score(slope.slope / slope.volatility)
}

/// Histogram sign and magnitude against its own rolling scale. A histogram
/// equal to the recent mean magnitude scores ±0.5.
pub fn normalize_macd(macd: &MacdReading) -> f64 {
    if macd.histogram_scale < 1e-10 {
        return 0.0;
    }
    clamp_score(macd.histogram / (2.0 * macd.histogram_scale))
}

/// ROC percent clamped through a fixed full-scale ceiling.
pub fn normalize_roc(roc_pct: f64) -> f64 {
    clamp_score(roc_pct / ROC_FULL_SCALE_PCT)
}

/// Volume expansion signed by the price move over the same window.
/// Contracting volume carries no conviction and scores zero.
pub fn score_volume_trend(trend: &VolumeTrend) -> f64 {
    let expansion = (trend.ratio - 1.0).clamp(0.0, 1.0);
    if expansion == 0.0 || trend.price_change == 0.0 {
        return 0.0;
    }
    let direction = if trend.price_change > 0.0 { 1.0 } else { -1.0 };
    clamp_score(direction * expansion)
}
