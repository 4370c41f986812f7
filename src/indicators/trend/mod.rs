//! Trend indicators.

pub mod ema;
pub mod sma;

pub use ema::{calculate_ema, calculate_ema_slope, EmaSlope};
pub use sma::{calculate_sma, calculate_sma_trend, SmaTrend};
