//! Price history and technical indicator models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One daily OHLCV bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }
}

/// The fixed indicator set computed per security.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorKind {
    Rsi14,
    SmaTrend,
    Ema12,
    Macd,
    Roc10,
    VolumeTrend,
}

impl IndicatorKind {
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Rsi14 => "RSI(14)",
            IndicatorKind::SmaTrend => "SMA(20/50)",
            IndicatorKind::Ema12 => "EMA(12)",
            IndicatorKind::Macd => "MACD(12,26,9)",
            IndicatorKind::Roc10 => "ROC(10)",
            IndicatorKind::VolumeTrend => "Volume trend",
        }
    }
}

/// One indicator reading: the raw value and its normalized score.
///
/// `score` always lies in [-1, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorReading {
    pub kind: IndicatorKind,
    pub raw: f64,
    pub score: f64,
}

/// Composite technical state for one security as of its latest bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalSnapshot {
    pub symbol: String,
    /// Weighted composite of the normalized readings, in [-1, 1].
    pub score: f64,
    /// Agreement-and-strength confidence in [0, 1].
    pub confidence: f64,
    pub readings: Vec<IndicatorReading>,
    pub as_of: DateTime<Utc>,
}

impl TechnicalSnapshot {
    pub fn reading(&self, kind: IndicatorKind) -> Option<&IndicatorReading> {
        self.readings.iter().find(|r| r.kind == kind)
    }
}
