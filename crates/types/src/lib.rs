//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the game core, the terminal renderer, the key mapper and the lexicon bridge.
//!
//! # Table Layout
//!
//! - **Grid**: 9 shared tiles (a 3x3 board)
//! - **Hand**: 3 private tiles, slot order matters for trade-ins
//! - **Deal**: 12 tiles leave the deck on a fresh deal (9 grid + 3 hand)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the game loop |
//! | `RESULT_DISPLAY_MS` | 2000 | How long a submit verdict stays on screen |
//! | `CHECK_DISPLAY_MS` | 2000 | How long a check-word verdict stays on screen |
//!
//! # Examples
//!
//! ```
//! use tile_words_types::{GameIntent, GamePhase, Tile, GRID_SIZE, HAND_SIZE};
//!
//! let phase = GamePhase::from_str("word-building").unwrap();
//! assert_eq!(phase, GamePhase::WordBuilding);
//! assert!(phase.is_building());
//!
//! let tile = Tile::new(101, 'Q', 10);
//! assert_eq!(tile.letter, Some('Q'));
//! assert!(!tile.is_blank());
//!
//! assert_eq!(GameIntent::from_str("submitWord"), Some(GameIntent::SubmitWord));
//! assert_eq!(GRID_SIZE + HAND_SIZE, 12);
//! ```

/// Shared board size (3x3)
pub const GRID_SIZE: usize = 9;

/// Private hand size
pub const HAND_SIZE: usize = 3;

/// Tiles consumed by a fresh deal
pub const DEAL_SIZE: usize = GRID_SIZE + HAND_SIZE;

/// Longest possible selection (every tile on the table)
pub const MAX_SELECTION: usize = GRID_SIZE + HAND_SIZE;

/// First id handed out by a fresh tile factory
pub const FIRST_TILE_ID: TileId = 101;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Time a submit verdict is shown before the round moves on
pub const RESULT_DISPLAY_MS: u32 = 2000;

/// Time a check-word verdict is shown before it clears itself
pub const CHECK_DISPLAY_MS: u32 = 2000;

/// Unique tile identifier
pub type TileId = u32;

/// A single letter tile
///
/// Tiles are minted once per game and never change afterwards. The synthetic
/// blank has no letter and is worth nothing; it only exists to keep a slot
/// occupied after the deck ran dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    pub letter: Option<char>,
    pub value: u32,
}

impl Tile {
    pub fn new(id: TileId, letter: char, value: u32) -> Self {
        Self {
            id,
            letter: Some(letter.to_ascii_uppercase()),
            value,
        }
    }

    pub fn blank(id: TileId) -> Self {
        Self {
            id,
            letter: None,
            value: 0,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.letter.is_none()
    }

    /// Letter used when displaying the tile (`' '` for blanks)
    pub fn face(&self) -> char {
        self.letter.unwrap_or(' ')
    }
}

/// Game phases
///
/// Exactly one phase is active at a time:
///
/// ```text
/// pregame ─▶ init-deal ─▶ word-building ◀──────────────┐
///                             │ submit                 │
///                 ┌───────────┴───────────┐            │
///           submit-accept            submit-reject     │
///                 │                       │            │
///            discarding             confirm-reject ────┤
///                 │ continue                           │
///             resetting ───────────────────────────────┘
/// ```
///
/// `final-round` replaces `word-building` once the deck is too small to refill a
/// full table, and `game-over` ends the game when the deck is exhausted or the
/// player quits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Pregame,
    InitDeal,
    WordBuilding,
    SubmitAccept,
    SubmitReject,
    Discarding,
    ConfirmReject,
    Resetting,
    FinalRound,
    GameOver,
}

impl GamePhase {
    pub const ALL: [GamePhase; 10] = [
        GamePhase::Pregame,
        GamePhase::InitDeal,
        GamePhase::WordBuilding,
        GamePhase::SubmitAccept,
        GamePhase::SubmitReject,
        GamePhase::Discarding,
        GamePhase::ConfirmReject,
        GamePhase::Resetting,
        GamePhase::FinalRound,
        GamePhase::GameOver,
    ];

    /// Parse phase from its kebab-case name
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_words_types::GamePhase;
    ///
    /// assert_eq!(GamePhase::from_str("confirm-reject"), Some(GamePhase::ConfirmReject));
    /// assert_eq!(GamePhase::from_str("GAME-OVER"), Some(GamePhase::GameOver));
    /// assert_eq!(GamePhase::from_str("paused"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|phase| phase.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Pregame => "pregame",
            GamePhase::InitDeal => "init-deal",
            GamePhase::WordBuilding => "word-building",
            GamePhase::SubmitAccept => "submit-accept",
            GamePhase::SubmitReject => "submit-reject",
            GamePhase::Discarding => "discarding",
            GamePhase::ConfirmReject => "confirm-reject",
            GamePhase::Resetting => "resetting",
            GamePhase::FinalRound => "final-round",
            GamePhase::GameOver => "game-over",
        }
    }

    /// Phases in which the selection is open for edits
    pub fn is_building(&self) -> bool {
        matches!(self, GamePhase::WordBuilding | GamePhase::FinalRound)
    }

    /// A game has been dealt and not yet ended
    pub fn in_game(&self) -> bool {
        !matches!(self, GamePhase::Pregame | GamePhase::GameOver)
    }
}

/// Intents reported by the front end
///
/// Intents that make no sense in the current phase are ignored by the game
/// state machine rather than treated as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameIntent {
    /// Mint, shuffle and deal a fresh game
    StartNewGame,
    /// Clear the table and finish the game
    EndGame,
    /// Append a grid or hand tile to the candidate word
    SelectTile(TileId),
    /// Remove a tile from the candidate word
    DeselectTile(TileId),
    /// Drop the whole candidate word
    ClearSelection,
    /// Ask the lexicon about the current word without scoring it
    CheckWord,
    /// Submit the current word for scoring
    SubmitWord,
    /// Mark or unmark a hand slot for trade-in
    ToggleTrade(usize),
    /// Acknowledge a verdict or finish discarding
    ConfirmContinue,
}

impl GameIntent {
    /// Parse an argument-free intent from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_words_types::GameIntent;
    ///
    /// assert_eq!(GameIntent::from_str("checkWord"), Some(GameIntent::CheckWord));
    /// assert_eq!(GameIntent::from_str("selectTile"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "startnewgame" => Some(GameIntent::StartNewGame),
            "endgame" => Some(GameIntent::EndGame),
            "clearselection" => Some(GameIntent::ClearSelection),
            "checkword" => Some(GameIntent::CheckWord),
            "submitword" => Some(GameIntent::SubmitWord),
            "confirmcontinue" => Some(GameIntent::ConfirmContinue),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameIntent::StartNewGame => "startNewGame",
            GameIntent::EndGame => "endGame",
            GameIntent::SelectTile(_) => "selectTile",
            GameIntent::DeselectTile(_) => "deselectTile",
            GameIntent::ClearSelection => "clearSelection",
            GameIntent::CheckWord => "checkWord",
            GameIntent::SubmitWord => "submitWord",
            GameIntent::ToggleTrade(_) => "toggleTrade",
            GameIntent::ConfirmContinue => "confirmContinue",
        }
    }
}

/// What a validation request is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    /// Informational probe, never scores
    Check,
    /// Scoring submission
    Submit,
}

/// Correlation tag attached to every validation request
///
/// The game only applies a result whose generation still matches its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidationTicket {
    pub generation: u64,
    pub kind: ValidationKind,
}

/// A word to hand to the lexicon, plus its ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    pub ticket: ValidationTicket,
    pub word: String,
}
