//! ROC (Rate of Change) indicator.

use crate::models::Candle;

/// Percentage price change over `period` bars.
pub fn calculate_roc(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period + 1 {
        return None;
    }
    let current = candles.last()?.close;
    let past = candles[candles.len() - 1 - period].close;
    if past.abs() < 1e-10 {
        return None;
    }
    Some((current - past) / past * 100.0)
}

/// ROC with the standard 10-bar period.
pub fn calculate_roc_default(candles: &[Candle]) -> Option<f64> {
    calculate_roc(candles, 10)
}
