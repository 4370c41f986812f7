//! Batch orchestration layer.

pub mod orchestrator;

pub use orchestrator::TradingEngine;
