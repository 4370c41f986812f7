//! Volume trend indicator.

use crate::models::Candle;

/// Volume expansion state over a recent-vs-baseline window, with the price
/// move over the same window for sign attribution.
#[derive(Debug, Clone)]
pub struct VolumeTrend {
    /// Recent average volume divided by the longer baseline average.
    pub ratio: f64,
    /// Close-to-close price change across the recent window.
    pub price_change: f64,
}

/// Compare average volume over the last `short` bars against the last
/// `long` bars.
pub fn calculate_volume_trend(
    candles: &[Candle],
    short: usize,
    long: usize,
) -> Option<VolumeTrend> {
    if short == 0 || long <= short || candles.len() < long + 1 {
        return None;
    }

    let avg = |window: &[Candle]| -> f64 {
        window.iter().map(|c| c.volume).sum::<f64>() / window.len() as f64
    };

    let recent = avg(&candles[candles.len() - short..]);
    let baseline = avg(&candles[candles.len() - long..]);
    if baseline < 1e-10 {
        return None;
    }

    let price_now = candles.last()?.close;
    let price_then = candles[candles.len() - 1 - short].close;

    Some(VolumeTrend {
        ratio: recent / baseline,
        price_change: price_now - price_then,
    })
}

/// Volume trend with the standard 5-vs-20 bar windows.
pub fn calculate_volume_trend_default(candles: &[Candle]) -> Option<VolumeTrend> {
    calculate_volume_trend(candles, 5, 20)
}
