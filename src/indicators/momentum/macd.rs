//! MACD (Moving Average Convergence Divergence) indicator.

use crate::indicators::math;
use crate::models::Candle;

/// MACD reading plus the rolling magnitude scale used for normalization.
#[derive(Debug, Clone)]
pub struct MacdReading {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    /// Mean absolute histogram over the recent window; the natural unit for
    /// comparing the current histogram against its own history.
    pub histogram_scale: f64,
}

/// Calculate MACD.
///
/// MACD = EMA(fast) - EMA(slow); Signal = EMA(signal_period) of MACD;
/// Histogram = MACD - Signal.
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<MacdReading> {
    if candles.len() < slow_period + signal_period {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let fast_series = math::ema_series(&closes, fast_period)?;
    let slow_series = math::ema_series(&closes, slow_period)?;

    // Align the two series on the slow start and difference them.
    let offset = slow_period - fast_period;
    let macd_series: Vec<f64> = slow_series
        .iter()
        .enumerate()
        .map(|(i, slow)| fast_series[i + offset] - slow)
        .collect();

    let signal_series = math::ema_series(&macd_series, signal_period)?;
    let histogram_series: Vec<f64> = signal_series
        .iter()
        .enumerate()
        .map(|(i, signal)| macd_series[i + signal_period - 1] - signal)
        .collect();

    let macd = *macd_series.last()?;
    let signal = *signal_series.last()?;
    let histogram = *histogram_series.last()?;

    let scale_window = histogram_series.len().min(signal_period * 2);
    let recent = &histogram_series[histogram_series.len() - scale_window..];
    let histogram_scale =
        recent.iter().map(|h| h.abs()).sum::<f64>() / scale_window.max(1) as f64;

    Some(MacdReading {
        macd,
        signal,
        histogram,
        histogram_scale,
    })
}

/// MACD with the standard (12, 26, 9) periods.
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdReading> {
    calculate_macd(candles, 12, 26, 9)
}
