//! SMA (Simple Moving Average) indicator.

use crate::indicators::math;
use crate::models::Candle;

/// Simple moving average of closes over `period` bars.
pub fn calculate_sma(candles: &[Candle], period: usize) -> Option<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::sma(&closes, period)
}

/// The trend state used for directional scoring: the latest close relative
/// to the 20- and 50-bar averages, and their relation to each other.
#[derive(Debug, Clone)]
pub struct SmaTrend {
    pub price: f64,
    pub sma_short: f64,
    pub sma_long: f64,
}

pub fn calculate_sma_trend(
    candles: &[Candle],
    short_period: usize,
    long_period: usize,
) -> Option<SmaTrend> {
    let price = candles.last()?.close;
    Some(SmaTrend {
        price,
        sma_short: calculate_sma(candles, short_period)?,
        sma_long: calculate_sma(candles, long_period)?,
    })
}
