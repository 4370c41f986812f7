//! Momentum indicators.

pub mod macd;
pub mod roc;
pub mod rsi;

pub use macd::{calculate_macd, calculate_macd_default, MacdReading};
pub use roc::{calculate_roc, calculate_roc_default};
pub use rsi::{calculate_rsi, calculate_rsi_default};
