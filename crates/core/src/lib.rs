//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every game rule: the tile table, the deck, the selection,
//! scoring and the phase machine. It has **no dependencies** on the terminal,
//! the network or the word lexicon, which makes it:
//!
//! - **Deterministic**: the same seed deals the same game
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: the front end only sends intents and reads snapshots
//!
//! # Module Structure
//!
//! - [`distribution`]: letter frequencies and point values
//! - [`factory`]: tile minting with unique, monotonic ids
//! - [`rng`]: seeded generator and Fisher-Yates shuffle
//! - [`deck`]: draw pile, 3x3 grid, hand and discard pile
//! - [`selection`]: the candidate word as ordered tile ids
//! - [`scoring`]: word values and the running total
//! - [`game_state`]: the phase machine driven by intents
//! - [`snapshot`]: owned read-only view for renderers
//!
//! # Game Rules
//!
//! - Tiles follow the English Scrabble table without blanks (98 tiles)
//! - A deal puts 9 tiles on the grid and 3 in the hand
//! - A word scores the sum of its tile values once the lexicon accepts it
//! - Used tiles are replaced from the deck; an empty deck yields blanks
//! - Up to 3 hand tiles may be traded in after each accepted word
//! - The game ends when a redeal finds the deck already empty
//!
//! # Example
//!
//! ```
//! use tile_words_core::GameState;
//! use tile_words_types::{GameIntent, GamePhase, TICK_MS};
//!
//! let mut game = GameState::new(12345);
//! game.apply_intent(GameIntent::StartNewGame);
//! game.tick(TICK_MS);
//! assert_eq!(game.phase(), GamePhase::WordBuilding);
//!
//! let id = game.grid()[0].id;
//! game.apply_intent(GameIntent::SelectTile(id));
//! let request = game.apply_intent(GameIntent::SubmitWord).unwrap();
//!
//! // The lexicon answers later; stale answers are dropped.
//! game.resolve_validation(request.ticket, true);
//! assert!(game.score() > 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time. Ticks settle the transient deal phases and expire the
//! verdict displays (2000ms each).

pub mod deck;
pub mod distribution;
pub mod factory;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod selection;
pub mod snapshot;

pub use tile_words_types as types;

// Re-export commonly used types for convenience
pub use deck::DeckManager;
pub use distribution::{LetterSpec, TileDistribution};
pub use factory::{IdCounter, TileFactory, TileRegistry};
pub use game_state::GameState;
pub use rng::{shuffle, SimpleRng};
pub use scoring::{points_for, tile_points, ScoreKeeper};
pub use selection::SelectionTracker;
pub use snapshot::GameSnapshot;
