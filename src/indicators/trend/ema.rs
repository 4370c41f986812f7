//! EMA (Exponential Moving Average) indicator.

use crate::indicators::math;
use crate::models::Candle;

/// Latest EMA of closes over `period` bars.
pub fn calculate_ema(candles: &[Candle], period: usize) -> Option<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::ema(&closes, period)
}

/// Short-term EMA slope with the volatility context needed to normalize it.
#[derive(Debug, Clone)]
pub struct EmaSlope {
    pub ema: f64,
    /// Last one-bar change of the EMA.
    pub slope: f64,
    /// Standard deviation of one-bar close changes over the recent window.
    pub volatility: f64,
}

/// EMA slope over the last bar, with close-change volatility measured over
/// `volatility_window` bars.
pub fn calculate_ema_slope(
    candles: &[Candle],
    period: usize,
    volatility_window: usize,
) -> Option<EmaSlope> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let series = math::ema_series(&closes, period)?;
    if series.len() < 2 {
        return None;
    }

    let ema = series[series.len() - 1];
    let slope = ema - series[series.len() - 2];

    let window = volatility_window.min(closes.len().saturating_sub(1));
    if window == 0 {
        return None;
    }
    let changes: Vec<f64> = closes[closes.len() - window - 1..]
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .collect();
    let volatility = math::stddev(&changes);

    Some(EmaSlope {
        ema,
        slope,
        volatility,
    })
}
