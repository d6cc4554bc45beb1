//! The word validator seam between the game loop and a lexicon.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{LookupError, Result};

/// Answers whether a lower-case word is playable.
///
/// Implementations fail closed: any error is a rejection.
#[async_trait]
pub trait WordValidator: Send + Sync {
    async fn validate(&self, word: &str) -> bool;

    /// Short label for logs.
    fn name(&self) -> &'static str {
        "validator"
    }
}

#[async_trait]
impl<T: WordValidator + ?Sized> WordValidator for Arc<T> {
    async fn validate(&self, word: &str) -> bool {
        (**self).validate(word).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[async_trait]
impl<T: WordValidator + ?Sized> WordValidator for Box<T> {
    async fn validate(&self, word: &str) -> bool {
        (**self).validate(word).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Words sent to a lexicon must be non-empty lower-case ASCII letters.
pub fn check_lookup_word(word: &str) -> Result<()> {
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(LookupError::InvalidWord(word.to_string()));
    }
    Ok(())
}

/// Validator with a fixed answer, for tests and offline play.
#[derive(Debug, Clone, Copy)]
pub struct FixedValidator(pub bool);

#[async_trait]
impl WordValidator for FixedValidator {
    async fn validate(&self, word: &str) -> bool {
        check_lookup_word(word).is_ok() && self.0
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}
