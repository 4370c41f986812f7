//! Composite technical evaluation for one security.

use crate::errors::{EngineError, EngineResult};
use crate::indicators::{
    calculate_ema_slope, calculate_macd, calculate_roc, calculate_rsi, calculate_sma_trend,
    volume::calculate_volume_trend,
};
use crate::models::{Candle, IndicatorKind, IndicatorReading, TechnicalSnapshot};
use crate::signals::scoring;

/// Fixed weights over the six normalized readings. Must sum to 1.
#[derive(Debug, Clone)]
pub struct IndicatorWeights {
    pub rsi: f64,
    pub sma_trend: f64,
    pub ema: f64,
    pub macd: f64,
    pub roc: f64,
    pub volume: f64,
}

impl Default for IndicatorWeights {
    fn default() -> Self {
        Self {
            rsi: 0.20,
            sma_trend: 0.20,
            ema: 0.15,
            macd: 0.20,
            roc: 0.15,
            volume: 0.10,
        }
    }
}

impl IndicatorWeights {
    pub fn sum(&self) -> f64 {
        self.rsi + self.sma_trend + self.ema + self.macd + self.roc + self.volume
    }

    pub fn verify(&self) -> bool {
        (self.sum() - 1.0).abs() < 1e-9
    }
}

pub struct TechnicalEngine {
    weights: IndicatorWeights,
    min_lookback: usize,
}

impl TechnicalEngine {
    pub fn new(min_lookback: usize) -> Self {
        Self {
            weights: IndicatorWeights::default(),
            min_lookback,
        }
    }

    pub fn with_weights(mut self, weights: IndicatorWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Compute the full indicator set and blend it into one snapshot.
    ///
    /// Fewer bars than the minimum lookback is a refusal, not a degraded
    /// answer; the caller falls back to sentiment-only scoring.
    pub fn evaluate(&self, symbol: &str, candles: &[Candle]) -> EngineResult<TechnicalSnapshot> {
        if candles.len() < self.min_lookback {
            return Err(EngineError::InsufficientData {
                symbol: symbol.to_string(),
                available: candles.len(),
                required: self.min_lookback,
            });
        }

        let insufficient = || EngineError::InsufficientData {
            symbol: symbol.to_string(),
            available: candles.len(),
            required: self.min_lookback,
        };

        let rsi = calculate_rsi(candles, 14).ok_or_else(insufficient)?;
        let sma_trend = calculate_sma_trend(candles, 20, 50).ok_or_else(insufficient)?;
        let ema_slope = calculate_ema_slope(candles, 12, 20).ok_or_else(insufficient)?;
        let macd = calculate_macd(candles, 12, 26, 9).ok_or_else(insufficient)?;
        let roc = calculate_roc(candles, 10).ok_or_else(insufficient)?;
        let volume = calculate_volume_trend(candles, 5, 20).ok_or_else(insufficient)?;

        let readings = vec![
            IndicatorReading {
                kind: IndicatorKind::Rsi14,
                raw: rsi,
                score: scoring::normalize_rsi(rsi),
            },
            IndicatorReading {
                kind: IndicatorKind::SmaTrend,
                raw: sma_trend.sma_short,
                score: scoring::score_sma_trend(&sma_trend),
            },
            IndicatorReading {
                kind: IndicatorKind::Ema12,
                raw: ema_slope.ema,
                score: scoring::score_ema_slope(&ema_slope),
            },
            IndicatorReading {
                kind: IndicatorKind::Macd,
                raw: macd.histogram,
                score: scoring::normalize_macd(&macd),
            },
            IndicatorReading {
                kind: IndicatorKind::Roc10,
                raw: roc,
                score: scoring::normalize_roc(roc),
            },
            IndicatorReading {
                kind: IndicatorKind::VolumeTrend,
                raw: volume.ratio,
                score: scoring::score_volume_trend(&volume),
            },
        ];

        let composite = scoring::clamp_score(
            readings[0].score * self.weights.rsi
                + readings[1].score * self.weights.sma_trend
                + readings[2].score * self.weights.ema
                + readings[3].score * self.weights.macd
                + readings[4].score * self.weights.roc
                + readings[5].score * self.weights.volume,
        );

        // Confidence: agreement across readings plus signal strength.
        let agreeing = readings
            .iter()
            .filter(|r| r.score * composite > 0.0)
            .count() as f64;
        let agreement = agreeing / readings.len() as f64;
        let strength = (composite.abs() * 2.0).min(1.0);
        let confidence = (0.3 + agreement * 0.4 + strength * 0.3).min(1.0);

        let as_of = candles
            .last()
            .map(|c| c.timestamp)
            .ok_or_else(insufficient)?;

        Ok(TechnicalSnapshot {
            symbol: symbol.to_string(),
            score: composite,
            confidence,
            readings,
            as_of,
        })
    }
}
