//! Signal scoring and fusion.

pub mod fusion;
pub mod scoring;
pub mod technical;

pub use fusion::{FusionEngine, StoryObservation};
pub use technical::{IndicatorWeights, TechnicalEngine};
