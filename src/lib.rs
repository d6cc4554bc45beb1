//! Tile Words (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tile_words::{core,input,lexicon,term,types}` and holds the pieces the
//! binary needs around them: configuration, logging and the session loop glue.

pub mod config;
pub mod logging;
pub mod session;

pub use tile_words_core as core;
pub use tile_words_input as input;
pub use tile_words_lexicon as lexicon;
pub use tile_words_term as term;
pub use tile_words_types as types;
