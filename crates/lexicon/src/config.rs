//! Lexicon configuration from the environment.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use tracing::info;

use crate::validator::WordValidator;
use crate::word_list::WordList;
use crate::wordnik::{WordnikClient, DEFAULT_WORDNIK_URL};

pub const SYSTEM_DICTIONARY: &str = "/usr/share/dict/words";
pub const DEFAULT_VALIDATE_TIMEOUT_MS: u64 = 5000;

/// Where words get checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    WordList(PathBuf),
    Wordnik,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconConfig {
    pub wordnik_api_key: Option<String>,
    pub wordnik_url: String,
    pub word_list: Option<PathBuf>,
    pub timeout_ms: u64,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            wordnik_api_key: None,
            wordnik_url: DEFAULT_WORDNIK_URL.to_string(),
            word_list: None,
            timeout_ms: DEFAULT_VALIDATE_TIMEOUT_MS,
        }
    }
}

impl LexiconConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            get(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let defaults = Self::default();
        Self {
            wordnik_api_key: var("WORDNIK_API_KEY"),
            wordnik_url: var("TILE_WORDS_WORDNIK_URL").unwrap_or(defaults.wordnik_url),
            word_list: var("TILE_WORDS_WORD_LIST").map(PathBuf::from),
            timeout_ms: var("TILE_WORDS_VALIDATE_TIMEOUT_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_ms),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.max(1))
    }

    /// Pick a lexicon: configured word list, then Wordnik, then the system
    /// dictionary if one is installed.
    pub fn source(&self) -> Option<LexiconSource> {
        self.source_with_fallback(Path::new(SYSTEM_DICTIONARY))
    }

    fn source_with_fallback(&self, dictionary: &Path) -> Option<LexiconSource> {
        if let Some(path) = &self.word_list {
            return Some(LexiconSource::WordList(path.clone()));
        }
        if self.wordnik_api_key.is_some() {
            return Some(LexiconSource::Wordnik);
        }
        if dictionary.is_file() {
            return Some(LexiconSource::WordList(dictionary.to_path_buf()));
        }
        None
    }

    pub fn build_validator(&self) -> Result<Arc<dyn WordValidator>> {
        match self.source() {
            Some(LexiconSource::WordList(path)) => {
                let list = WordList::load(&path)?;
                if list.is_empty() {
                    bail!("word list {} has no words", path.display());
                }
                info!(path = %path.display(), words = list.len(), "using word list");
                Ok(Arc::new(list))
            }
            Some(LexiconSource::Wordnik) => {
                let key = self.wordnik_api_key.clone().unwrap_or_default();
                let client = WordnikClient::new(self.wordnik_url.clone(), key, self.timeout())?;
                info!(url = %client.base_url(), "using wordnik");
                Ok(Arc::new(client))
            }
            None => bail!(
                "no lexicon available: set WORDNIK_API_KEY or TILE_WORDS_WORD_LIST, or install {}",
                SYSTEM_DICTIONARY
            ),
        }
    }
}
