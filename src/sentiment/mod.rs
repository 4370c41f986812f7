//! Lexicon-based sentiment scoring.
//!
//! Pure text-in, score-out; no I/O. Scores saturate toward ±1 with many
//! matches instead of growing unbounded.

pub mod lexicon;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// How many tokens back a negation still flips a sentiment term.
const NEGATION_WINDOW: usize = 2;

/// Sign-flip strength applied by a negation ("didn't gain" is weaker
/// evidence of loss than "lost").
const NEGATION_FACTOR: f64 = -0.75;

/// Saturation constant: the summed term weights are squashed through
/// tanh(sum / SATURATION).
const SATURATION: f64 = 2.0;

/// Result of scoring one text span.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Scalar in [-1, 1]; 0.0 for text with no lexicon matches.
    pub score: f64,
    /// Caller-side weighting hint in [0.1, 1].
    pub confidence: f64,
    /// Number of matched lexicon terms and phrases.
    pub term_hits: usize,
}

impl SentimentScore {
    fn neutral() -> Self {
        Self {
            score: 0.0,
            confidence: 0.1,
            term_hits: 0,
        }
    }
}

pub struct SentimentScorer {
    token_pattern: Regex,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            token_pattern: Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("static token pattern"),
        }
    }

    /// Score a text span against the financial lexicon.
    ///
    /// Matching order: multi-word phrases first (substring matches on the
    /// lowercased text), then single tokens with intensifier and negation
    /// handling. A zero-match result is neutral, not missing.
    pub fn score(&self, text: &str) -> SentimentScore {
        let text_lower = text.to_lowercase();
        if text_lower.trim().is_empty() {
            return SentimentScore::neutral();
        }

        let mut weights: Vec<f64> = Vec::new();

        for (phrase, weight) in lexicon::PHRASES {
            let count = text_lower.matches(phrase).count();
            for _ in 0..count {
                weights.push(*weight);
            }
        }

        let tokens: Vec<&str> = self
            .token_pattern
            .find_iter(&text_lower)
            .map(|m| m.as_str())
            .collect();

        for (i, token) in tokens.iter().enumerate() {
            let Some(base) = lexicon::term_weight(token) else {
                continue;
            };

            let mut weight = base;
            if i > 0 {
                if let Some(factor) = lexicon::intensifier_factor(tokens[i - 1]) {
                    weight *= factor;
                }
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| lexicon::is_negation(t)) {
                weight *= NEGATION_FACTOR;
            }

            weights.push(weight);
        }

        if weights.is_empty() {
            return SentimentScore::neutral();
        }

        let sum: f64 = weights.iter().sum();
        let score = (sum / SATURATION).tanh().clamp(-1.0, 1.0);

        // Confidence grows with hit count (saturating around five matches)
        // and with score magnitude.
        let hit_confidence = (weights.len() as f64 / 5.0).min(1.0);
        let magnitude_confidence = (score.abs() * 2.0).min(1.0);
        let confidence = (hit_confidence * 0.4 + magnitude_confidence * 0.6).clamp(0.1, 1.0);

        SentimentScore {
            score,
            confidence,
            term_hits: weights.len(),
        }
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}
