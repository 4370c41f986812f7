//! Error taxonomy for the analysis pipeline.
//!
//! Every variant is scoped to one candidate or one security; nothing here is
//! allowed to abort a whole batch. The orchestrator converts these into
//! skip entries and keeps going.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("could not resolve '{name}' to a listed security")]
    Resolution { name: String },

    #[error("insufficient history for {symbol}: {available} bars, need {required}")]
    InsufficientData {
        symbol: String,
        available: usize,
        required: usize,
    },

    #[error("external service error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("external service returned an unusable response: {message}")]
    MalformedResponse { message: String },

    #[error("empty or unparseable input text")]
    InvalidInput,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        EngineError::MalformedResponse {
            message: message.into(),
        }
    }

    /// True when the failure came from the external-service layer and is
    /// expected to be transient (retried, if at all, on the next cycle).
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            EngineError::Http(_) | EngineError::MalformedResponse { .. }
        )
    }
}
