//! Unit tests for the ROC indicator

use chrono::Utc;
use newsquant::indicators::momentum::roc::calculate_roc;
use newsquant::models::Candle;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .map(|&close| Candle::new(close, close + 0.1, close - 0.1, close, 1000.0, Utc::now()))
        .collect()
}

#[test]
fn test_insufficient_data() {
    let candles = candles_from_closes(&[100.0; 10]);
    assert!(calculate_roc(&candles, 10).is_none());
}

#[test]
fn test_ten_percent_rise() {
    let mut closes = vec![100.0; 11];
    closes[10] = 110.0;
    let roc = calculate_roc(&candles_from_closes(&closes), 10).expect("enough bars");
    assert!((roc - 10.0).abs() < 1e-9);
}

#[test]
fn test_decline_is_negative() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
    let roc = calculate_roc(&candles_from_closes(&closes), 10).expect("enough bars");
    assert!(roc < 0.0);
}

#[test]
fn test_flat_is_zero() {
    let candles = candles_from_closes(&[42.0; 15]);
    let roc = calculate_roc(&candles, 10).expect("enough bars");
    assert_eq!(roc, 0.0);
}
