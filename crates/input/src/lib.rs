//! Terminal input module.
//!
//! Maps `crossterm` key events into [`Command`]s and resolves them against the
//! latest [`GameSnapshot`](tile_words_core::GameSnapshot) into
//! [`crate::types::GameIntent`]s. Letters pick tiles, Enter submits or moves
//! on, `?` checks the word, `1`-`3` mark hand tiles for trade-in.

pub mod map;
pub mod resolve;

pub use tile_words_types as types;

pub use map::{handle_key_event, should_quit, Command};
pub use resolve::{confirm_intent, resolve_command};
