//! Unit tests for the composite technical engine

use chrono::Utc;
use newsquant::errors::EngineError;
use newsquant::models::{Candle, IndicatorKind};
use newsquant::signals::{IndicatorWeights, TechnicalEngine};

fn rising_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 50.0 * 1.02_f64.powi(i as i32);
            Candle::new(
                close * 0.995,
                close * 1.005,
                close * 0.99,
                close,
                1000.0 + i as f64 * 25.0,
                Utc::now(),
            )
        })
        .collect()
}

fn falling_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 200.0 * 0.98_f64.powi(i as i32);
            Candle::new(
                close * 1.005,
                close * 1.01,
                close * 0.995,
                close,
                1000.0 + i as f64 * 25.0,
                Utc::now(),
            )
        })
        .collect()
}

#[test]
fn test_weights_sum_to_one() {
    assert!(IndicatorWeights::default().verify());
}

#[test]
fn test_insufficient_lookback_refuses() {
    let engine = TechnicalEngine::new(50);
    let result = engine.evaluate("ACME", &rising_candles(30));
    match result {
        Err(EngineError::InsufficientData {
            available,
            required,
            ..
        }) => {
            assert_eq!(available, 30);
            assert_eq!(required, 50);
        }
        other => panic!("expected InsufficientData, got {:?}", other.map(|s| s.score)),
    }
}

#[test]
fn test_rising_series_scores_positive() {
    let engine = TechnicalEngine::new(50);
    let snapshot = engine.evaluate("ACME", &rising_candles(60)).expect("enough bars");

    assert!(snapshot.score > 0.0);
    assert!(snapshot.score <= 1.0);
    for kind in [IndicatorKind::Rsi14, IndicatorKind::SmaTrend, IndicatorKind::Roc10] {
        let reading = snapshot.reading(kind).expect("reading present");
        assert!(reading.score > 0.0, "{:?} should be positive", kind);
    }
}

#[test]
fn test_falling_series_scores_negative() {
    let engine = TechnicalEngine::new(50);
    let snapshot = engine
        .evaluate("ACME", &falling_candles(60))
        .expect("enough bars");

    assert!(snapshot.score < 0.0);
    assert!(snapshot.score >= -1.0);
    for kind in [IndicatorKind::Rsi14, IndicatorKind::SmaTrend, IndicatorKind::Roc10] {
        let reading = snapshot.reading(kind).expect("reading present");
        assert!(reading.score < 0.0, "{:?} should be negative", kind);
    }
}

#[test]
fn test_all_readings_in_range() {
    let engine = TechnicalEngine::new(50);
    for candles in [rising_candles(80), falling_candles(80)] {
        let snapshot = engine.evaluate("ACME", &candles).expect("enough bars");
        assert_eq!(snapshot.readings.len(), 6);
        for reading in &snapshot.readings {
            assert!(
                (-1.0..=1.0).contains(&reading.score),
                "{:?} out of range: {}",
                reading.kind,
                reading.score
            );
        }
        assert!((0.0..=1.0).contains(&snapshot.confidence));
    }
}
