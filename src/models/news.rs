//! News input model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single news story, as supplied by the external news source.
///
/// Immutable once constructed; the pipeline only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl NewsItem {
    pub fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            summary: None,
            source: None,
            published_at: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// Full analyzable text: headline plus summary when present.
    pub fn text(&self) -> String {
        match &self.summary {
            Some(summary) if !summary.trim().is_empty() => {
                format!("{}. {}", self.headline.trim_end_matches('.'), summary)
            }
            _ => self.headline.clone(),
        }
    }

    /// Story age in hours relative to `now`.
    ///
    /// Stories without a usable timestamp are treated as roughly an hour
    /// old rather than dropped.
    pub fn age_hours(&self, now: DateTime<Utc>) -> f64 {
        match self.published_at {
            Some(published) => {
                let seconds = (now - published).num_seconds();
                (seconds.max(0) as f64) / 3600.0
            }
            None => 1.0,
        }
    }

    /// A short snippet for report display.
    pub fn snippet(&self) -> String {
        let text = self.text();
        text.chars().take(100).collect()
    }
}
