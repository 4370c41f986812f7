//! Technical indicator computations.
//!
//! Each function is a pure transform over a candle slice, returning `None`
//! when the lookback is too short for the indicator.

pub mod math;
pub mod momentum;
pub mod trend;
pub mod volume;

pub use momentum::{calculate_macd, calculate_roc, calculate_rsi, MacdReading};
pub use trend::{calculate_ema_slope, calculate_sma_trend, EmaSlope, SmaTrend};
pub use volume::{calculate_volume_trend, VolumeTrend};
