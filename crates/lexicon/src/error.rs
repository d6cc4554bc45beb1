//! Error types raised by lexicon lookups.

use thiserror::Error;

/// Errors surfaced while asking a lexicon about a word.
///
/// None of these reach the game: [`crate::WordValidator::validate`] turns every
/// failure into a rejection.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("lexicon answered with status {status}")]
    Status { status: u16 },

    #[error("malformed lexicon response: {0}")]
    Malformed(String),

    #[error("lookup timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("not a lookup word: {0:?}")]
    InvalidWord(String),
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Malformed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
