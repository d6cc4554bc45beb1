//! Wordnik definitions lookup.
//!
//! A word counts as found when the definitions endpoint answers with a JSON array
//! whose first entry names exactly the queried word. Wordnik answers unknown
//! words with a 404.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::error::{LookupError, Result};
use crate::validator::{check_lookup_word, WordValidator};

pub const DEFAULT_WORDNIK_URL: &str = "https://api.wordnik.com/v4";

/// One entry of the definitions array. Everything but `word` is ignored.
#[derive(Debug, Deserialize)]
struct Definition {
    word: Option<String>,
}

/// Decide a lookup from a definitions response body.
pub fn parse_definitions(word: &str, body: &str) -> Result<bool> {
    let entries: Vec<Definition> = serde_json::from_str(body)?;
    Ok(entries.first().and_then(|d| d.word.as_deref()) == Some(word))
}

#[derive(Debug, Clone)]
pub struct WordnikClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl WordnikClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn definitions_url(&self, word: &str) -> String {
        format!(
            "{}/word.json/{}/definitions?limit=200&includeRelated=false&useCanonical=false&includeTags=false&api_key={}",
            self.base_url, word, self.api_key
        )
    }

    /// Ask Wordnik about `word`. `Ok(false)` means the word is unknown.
    #[instrument(skip(self))]
    pub async fn lookup(&self, word: &str) -> Result<bool> {
        check_lookup_word(word)?;

        let response = self
            .client
            .get(self.definitions_url(word))
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.transport(e))?;
        parse_definitions(word, &body)
    }

    /// The request URL carries the api key, so it is stripped from the error.
    fn transport(&self, err: reqwest::Error) -> LookupError {
        if err.is_timeout() {
            LookupError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            LookupError::Transport(err.without_url())
        }
    }
}

#[async_trait]
impl WordValidator for WordnikClient {
    async fn validate(&self, word: &str) -> bool {
        match self.lookup(word).await {
            Ok(found) => {
                debug!(word, found, "wordnik lookup");
                found
            }
            Err(LookupError::InvalidWord(_)) => {
                debug!(word, "not sent to wordnik");
                false
            }
            Err(err) => {
                warn!(word, error = %err, "wordnik lookup failed");
                false
            }
        }
    }

    fn name(&self) -> &'static str {
        "wordnik"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entry_must_match() {
        let body = r#"[{"word":"cat","text":"A small carnivorous mammal."},{"word":"cats"}]"#;
        assert!(parse_definitions("cat", body).unwrap());
        assert!(!parse_definitions("cats", body).unwrap());
    }

    #[test]
    fn canonical_form_does_not_count() {
        let body = r#"[{"word":"run","text":"To move swiftly."}]"#;
        assert!(!parse_definitions("ran", body).unwrap());
    }

    #[test]
    fn empty_array_is_not_found() {
        assert!(!parse_definitions("zzxq", "[]").unwrap());
    }

    #[test]
    fn entry_without_word_is_not_found() {
        assert!(!parse_definitions("cat", r#"[{"text":"orphan"}]"#).unwrap());
    }

    #[test]
    fn error_object_is_malformed() {
        let body = r#"{"statusCode":404,"error":"Not Found","message":"Not Found"}"#;
        assert!(matches!(
            parse_definitions("cat", body),
            Err(LookupError::Malformed(_))
        ));
    }

    #[test]
    fn url_carries_query_and_key() {
        let client = WordnikClient::new("https://example.test/v4/", "secret", Duration::from_secs(1))
            .unwrap();
        assert_eq!(client.base_url(), "https://example.test/v4");
        assert_eq!(
            client.definitions_url("tile"),
            "https://example.test/v4/word.json/tile/definitions?limit=200&includeRelated=false&useCanonical=false&includeTags=false&api_key=secret"
        );
    }

    #[test]
    fn invalid_words_never_hit_the_network() {
        let client =
            WordnikClient::new("http://127.0.0.1:9", "secret", Duration::from_millis(50)).unwrap();
        assert!(!tokio_test::block_on(client.validate("")));
        assert!(matches!(
            tokio_test::block_on(client.lookup("Cat")),
            Err(LookupError::InvalidWord(_))
        ));
    }
}
