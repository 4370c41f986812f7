//! Fusion of decayed sentiment and technical state into a decision.

use crate::config::EngineConfig;
use crate::models::{CompositeSignal, SignalReason, TechnicalSnapshot, TradeAction};
use crate::signals::scoring::clamp_score;
use chrono::{DateTime, Utc};

/// One (story, security) sentiment observation entering the fusion stage.
#[derive(Debug, Clone)]
pub struct StoryObservation {
    /// Lexicon sentiment in [-1, 1].
    pub sentiment: f64,
    /// Scorer confidence in [0, 1].
    pub confidence: f64,
    /// Resolver relevance for this security in [0, 1].
    pub relevance: f64,
    pub age_hours: f64,
    pub snippet: String,
}

pub struct FusionEngine {
    sentiment_weight: f64,
    technical_weight: f64,
    threshold: f64,
    min_confidence: f64,
    /// Decay rate λ = ln 2 / half-life.
    lambda: f64,
}

impl FusionEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            sentiment_weight: config.sentiment_weight,
            technical_weight: config.technical_weight,
            threshold: config.decision_threshold,
            min_confidence: config.min_confidence,
            lambda: std::f64::consts::LN_2 / config.decay_half_life_hours.max(0.1),
        }
    }

    /// Exponential recency weight: e^(-λ · age).
    pub fn decay_weight(&self, age_hours: f64) -> f64 {
        (-self.lambda * age_hours.max(0.0)).exp()
    }

    /// Decay-and-relevance-weighted average sentiment for one security.
    /// Returns `None` when the combined weight is negligible.
    pub fn aggregate_sentiment(&self, observations: &[StoryObservation]) -> Option<(f64, f64)> {
        let mut weighted_sum = 0.0;
        let mut weight_sum = 0.0;
        let mut confidence_sum = 0.0;

        for obs in observations {
            let weight = self.decay_weight(obs.age_hours) * obs.relevance * obs.confidence;
            weighted_sum += obs.sentiment * weight;
            weight_sum += weight;
            confidence_sum += obs.confidence * obs.relevance;
        }

        if weight_sum < 1e-2 {
            return None;
        }

        let component = clamp_score(weighted_sum / weight_sum);
        // Corroboration: confidence saturates once about three stories agree.
        let avg_confidence = confidence_sum / observations.len() as f64;
        let corroboration = (observations.len() as f64 / 3.0).min(1.0);
        let confidence = (avg_confidence * corroboration).clamp(0.0, 1.0);

        Some((component, confidence))
    }

    /// Blend sentiment with the technical snapshot (when present) and
    /// threshold the result into a decision.
    pub fn fuse(
        &self,
        symbol: &str,
        observations: &[StoryObservation],
        technical: Option<&TechnicalSnapshot>,
        now: DateTime<Utc>,
    ) -> Option<CompositeSignal> {
        let (sentiment_component, sentiment_confidence) =
            self.aggregate_sentiment(observations)?;

        let (score, confidence, technical_component, low_confidence) = match technical {
            Some(snapshot) => {
                let score = clamp_score(
                    sentiment_component * self.sentiment_weight
                        + snapshot.score * self.technical_weight,
                );
                let confidence = sentiment_confidence * self.sentiment_weight
                    + snapshot.confidence * self.technical_weight;
                (score, confidence, Some(snapshot.score), false)
            }
            // Sentiment-only fallback: the blended score IS the sentiment
            // component, and the signal is flagged low-confidence.
            None => (
                sentiment_component,
                sentiment_confidence,
                None,
                true,
            ),
        };

        let action = self.decide(score, confidence);

        let mut reasons: Vec<SignalReason> = observations
            .iter()
            .take(3)
            .map(|obs| SignalReason {
                description: obs.snippet.clone(),
                weight: self.decay_weight(obs.age_hours) * obs.relevance,
            })
            .collect();
        if let Some(snapshot) = technical {
            reasons.push(SignalReason {
                description: format!("technical composite {:+.3}", snapshot.score),
                weight: self.technical_weight,
            });
        }

        Some(CompositeSignal {
            symbol: symbol.to_string(),
            action,
            score,
            sentiment_component,
            technical_component,
            confidence,
            low_confidence,
            story_count: observations.len(),
            reasons,
            timestamp: now,
        })
    }

    /// Threshold the blended score. Strict inequality: a score of exactly
    /// ±θ resolves to HOLD, as does insufficient confidence.
    fn decide(&self, score: f64, confidence: f64) -> TradeAction {
        if confidence < self.min_confidence {
            return TradeAction::Hold;
        }
        if score > self.threshold {
            TradeAction::Buy
        } else if score < -self.threshold {
            TradeAction::Sell
        } else {
            TradeAction::Hold
        }
    }
}
