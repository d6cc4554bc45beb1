//! Lexicon module - word validation for the tile game
//!
//! The game core never waits on a lexicon. It hands out
//! [`ValidationRequest`](tile_words_types::ValidationRequest)s, the
//! [`ValidationRuntime`] answers them on a tokio runtime, and the game loop
//! drains the answers every frame.
//!
//! # Validators
//!
//! - [`WordnikClient`]: Wordnik definitions endpoint over HTTPS
//! - [`WordList`]: newline-separated word file held in memory
//! - [`FixedValidator`]: constant answer, for tests and demos
//!
//! Every validator fails closed: network errors, bad statuses, malformed
//! bodies and timeouts all count as "not a word".
//!
//! # Configuration
//!
//! [`LexiconConfig::from_env`] reads:
//!
//! - `WORDNIK_API_KEY`: enables Wordnik lookups
//! - `TILE_WORDS_WORDNIK_URL`: API base (default `https://api.wordnik.com/v4`)
//! - `TILE_WORDS_WORD_LIST`: word file, preferred over Wordnik when set
//! - `TILE_WORDS_VALIDATE_TIMEOUT_MS`: per-lookup timeout (default 5000)

pub mod config;
pub mod error;
pub mod runtime;
pub mod validator;
pub mod word_list;
pub mod wordnik;

pub use config::{LexiconConfig, LexiconSource};
pub use error::LookupError;
pub use runtime::{ValidationOutcome, ValidationRuntime};
pub use validator::{check_lookup_word, FixedValidator, WordValidator};
pub use word_list::WordList;
pub use wordnik::{parse_definitions, WordnikClient};
