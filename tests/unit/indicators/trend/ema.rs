//! Unit tests for the EMA indicator

use chrono::Utc;
use newsquant::indicators::trend::ema::{calculate_ema, calculate_ema_slope};
use newsquant::models::Candle;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .map(|&close| Candle::new(close, close + 0.1, close - 0.1, close, 1000.0, Utc::now()))
        .collect()
}

#[test]
fn test_ema_insufficient_data() {
    let candles = candles_from_closes(&[100.0; 5]);
    assert!(calculate_ema(&candles, 12).is_none());
}

#[test]
fn test_ema_of_constant_series() {
    let candles = candles_from_closes(&[75.0; 40]);
    let ema = calculate_ema(&candles, 12).expect("enough bars");
    assert!((ema - 75.0).abs() < 1e-9);
}

#[test]
fn test_ema_tracks_recent_prices() {
    // Jump at the end pulls the EMA above the older level.
    let mut closes = vec![100.0; 30];
    closes.extend(vec![120.0; 10]);
    let ema = calculate_ema(&candles_from_closes(&closes), 12).expect("enough bars");
    assert!(ema > 100.0);
    assert!(ema < 120.0);
}

#[test]
fn test_slope_positive_in_noisy_uptrend() {
    let closes: Vec<f64> = (0..60)
        .map(|i| 100.0 + i as f64 * 0.8 + if i % 2 == 0 { 0.5 } else { -0.5 })
        .collect();
    let slope = calculate_ema_slope(&candles_from_closes(&closes), 12, 20).expect("enough bars");
    assert!(slope.slope > 0.0);
    assert!(slope.volatility > 0.0);
}

#[test]
fn test_slope_negative_in_downtrend() {
    let closes: Vec<f64> = (0..60)
        .map(|i| 200.0 - i as f64 * 0.8 + if i % 3 == 0 { 0.4 } else { -0.2 })
        .collect();
    let slope = calculate_ema_slope(&candles_from_closes(&closes), 12, 20).expect("enough bars");
    assert!(slope.slope < 0.0);
}
