//! Offline lexicon backed by a newline-separated word file.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::validator::{check_lookup_word, WordValidator};

#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Parse one word per line. Blank lines and `#` comments are skipped;
    /// entries are stored lower-cased.
    pub fn from_text(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        Ok(Self::from_text(&text))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}

#[async_trait]
impl WordValidator for WordList {
    async fn validate(&self, word: &str) -> bool {
        check_lookup_word(word).is_ok() && self.words.contains(word)
    }

    fn name(&self) -> &'static str {
        "word-list"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lines_and_comments() {
        let list = WordList::from_text("# tiles\ncat\n\n  Dog \nTILE\n");
        assert_eq!(list.len(), 3);
        assert!(list.contains("cat"));
        assert!(list.contains("dog"));
        assert!(list.contains("Tile"));
        assert!(!list.contains("# tiles"));
    }

    #[test]
    fn validate_requires_lookup_form() {
        let list: WordList = ["cat", "dog"].into_iter().collect();
        assert!(tokio_test::block_on(list.validate("cat")));
        assert!(!tokio_test::block_on(list.validate("Cat")));
        assert!(!tokio_test::block_on(list.validate("cow")));
        assert!(!tokio_test::block_on(list.validate("")));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = WordList::load("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
