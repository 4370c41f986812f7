//! Theme keyword → ticker basket expansion.
//!
//! A theme hit is weaker evidence than a named mention, so basket weights
//! are dampened before merging with direct detections.

use crate::models::{ResolutionMethod, SecurityCandidate};
use std::collections::HashMap;

/// Keyword (lowercased) → related tickers with per-ticker relevance.
pub const THEME_BASKETS: &[(&str, &[(&str, f64)])] = &[
    (
        "semiconductor",
        &[
            ("NVDA", 1.0),
            ("AMD", 0.9),
            ("INTC", 0.85),
            ("AVGO", 0.8),
            ("TXN", 0.7),
            ("QCOM", 0.7),
        ],
    ),
    (
        "chipmaker",
        &[
            ("NVDA", 0.95),
            ("AMD", 0.9),
            ("INTC", 0.9),
            ("AVGO", 0.8),
            ("QCOM", 0.75),
        ],
    ),
    (
        "chip",
        &[
            ("NVDA", 0.9),
            ("AMD", 0.85),
            ("INTC", 0.85),
            ("AVGO", 0.75),
            ("QCOM", 0.7),
        ],
    ),
    ("gpu", &[("NVDA", 1.0), ("AMD", 0.8), ("INTC", 0.5)]),
    ("cpu", &[("INTC", 0.95), ("AMD", 0.95)]),
    (
        "data center",
        &[("NVDA", 0.9), ("AMD", 0.7), ("MSFT", 0.5), ("AMZN", 0.5)],
    ),
    (
        "artificial intelligence",
        &[
            ("NVDA", 0.95),
            ("MSFT", 0.8),
            ("GOOGL", 0.8),
            ("META", 0.6),
            ("AMD", 0.5),
        ],
    ),
    (
        "generative ai",
        &[("NVDA", 0.9), ("MSFT", 0.8), ("GOOGL", 0.8), ("META", 0.6)],
    ),
    (
        "machine learning",
        &[("NVDA", 0.85), ("GOOGL", 0.75), ("MSFT", 0.7), ("AMZN", 0.5)],
    ),
    (
        "cloud computing",
        &[("AMZN", 0.9), ("MSFT", 0.9), ("GOOGL", 0.8)],
    ),
    ("cloud", &[("AMZN", 0.7), ("MSFT", 0.7), ("GOOGL", 0.6)]),
    ("electric vehicle", &[("TSLA", 1.0)]),
    ("battery", &[("TSLA", 0.7)]),
    ("self-driving", &[("TSLA", 0.8), ("GOOGL", 0.5)]),
    ("autonomous driving", &[("TSLA", 0.8), ("GOOGL", 0.5)]),
    ("robotaxi", &[("TSLA", 0.8), ("GOOGL", 0.7)]),
    ("driverless", &[("TSLA", 0.8), ("GOOGL", 0.75)]),
    ("social media", &[("META", 0.9), ("GOOGL", 0.5)]),
    ("digital advertising", &[("META", 0.8), ("GOOGL", 0.85)]),
    (
        "streaming",
        &[("NFLX", 0.9), ("DIS", 0.7), ("AMZN", 0.4), ("CMCSA", 0.4)],
    ),
    ("subscriber", &[("NFLX", 0.8), ("DIS", 0.5)]),
    ("e-commerce", &[("AMZN", 0.9), ("WMT", 0.5)]),
    ("online shopping", &[("AMZN", 0.85), ("WMT", 0.4)]),
    (
        "retail",
        &[("WMT", 0.7), ("COST", 0.6), ("HD", 0.5), ("NKE", 0.4)],
    ),
    ("payment", &[("V", 0.8), ("MA", 0.8), ("PYPL", 0.7)]),
    ("fintech", &[("PYPL", 0.8), ("V", 0.6), ("MA", 0.6)]),
    (
        "credit card",
        &[("V", 0.8), ("MA", 0.8), ("JPM", 0.5), ("BAC", 0.4)],
    ),
    ("banking", &[("JPM", 0.9), ("BAC", 0.85)]),
    (
        "interest rate",
        &[("JPM", 0.7), ("BAC", 0.7), ("V", 0.3), ("MA", 0.3)],
    ),
    ("federal reserve", &[("JPM", 0.6), ("BAC", 0.6)]),
    ("mortgage", &[("JPM", 0.6), ("BAC", 0.6)]),
    ("crude oil", &[("XOM", 0.95), ("CVX", 0.95)]),
    ("oil", &[("XOM", 0.9), ("CVX", 0.9)]),
    ("natural gas", &[("XOM", 0.7), ("CVX", 0.7)]),
    ("opec", &[("XOM", 0.8), ("CVX", 0.8)]),
    ("energy", &[("XOM", 0.6), ("CVX", 0.6)]),
    (
        "pharmaceutical",
        &[("PFE", 0.8), ("MRK", 0.8), ("JNJ", 0.7), ("ABT", 0.6)],
    ),
    (
        "fda approval",
        &[("PFE", 0.8), ("MRK", 0.8), ("JNJ", 0.7), ("ABT", 0.6)],
    ),
    ("vaccine", &[("PFE", 0.9), ("JNJ", 0.7), ("MRK", 0.6)]),
    (
        "healthcare",
        &[("UNH", 0.8), ("JNJ", 0.6), ("ABT", 0.6), ("PFE", 0.5)],
    ),
    ("health insurance", &[("UNH", 0.9)]),
    (
        "5g",
        &[("TMUS", 0.7), ("VZ", 0.7), ("T", 0.7), ("QCOM", 0.6)],
    ),
    ("telecom", &[("VZ", 0.7), ("T", 0.7), ("TMUS", 0.7)]),
    ("wireless", &[("TMUS", 0.7), ("VZ", 0.7), ("T", 0.7)]),
    ("broadband", &[("CMCSA", 0.7), ("VZ", 0.6), ("T", 0.6)]),
    ("beverage", &[("KO", 0.8), ("PEP", 0.8)]),
    ("fast food", &[("MCD", 0.9)]),
    ("sportswear", &[("NKE", 0.9)]),
    ("sneaker", &[("NKE", 0.8)]),
    ("home improvement", &[("HD", 0.9)]),
    ("cybersecurity", &[("CSCO", 0.6), ("MSFT", 0.4)]),
    (
        "trade war",
        &[("AAPL", 0.5), ("NVDA", 0.5), ("AMD", 0.4), ("INTC", 0.4)],
    ),
    (
        "supply chain",
        &[("AAPL", 0.5), ("NVDA", 0.4), ("WMT", 0.3)],
    ),
    ("investment banking", &[("JPM", 0.7)]),
    ("wall street", &[("JPM", 0.5)]),
];

pub struct ThemeMapper;

impl ThemeMapper {
    /// Scan text for theme keywords and expand each hit into its basket.
    ///
    /// Overlapping baskets deduplicate by ticker, keeping the highest
    /// relevance seen.
    pub fn map(text: &str) -> Vec<SecurityCandidate> {
        let text_lower = text.to_lowercase();
        let mut relevance: HashMap<&str, f64> = HashMap::new();

        for (keyword, basket) in THEME_BASKETS {
            if !text_lower.contains(keyword) {
                continue;
            }
            for (ticker, weight) in *basket {
                let entry = relevance.entry(ticker).or_insert(0.0);
                if *weight > *entry {
                    *entry = *weight;
                }
            }
        }

        relevance
            .into_iter()
            .map(|(ticker, weight)| {
                SecurityCandidate::new(ticker, ResolutionMethod::Theme, weight)
            })
            .collect()
    }
}
