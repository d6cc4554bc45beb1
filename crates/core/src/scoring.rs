//! Scoring module - word values and the running total
//!
//! A word is worth the sum of its tile values; there are no multipliers.

use crate::deck::DeckManager;
use crate::types::{Tile, TileId};

/// Sum the values of the tiles named by `ids` (unknown ids count as 0).
pub fn points_for(ids: &[TileId], deck: &DeckManager) -> u32 {
    ids.iter()
        .filter_map(|&id| deck.lookup(id))
        .map(|t| t.value)
        .sum()
}

/// Sum the values of a run of tiles.
pub fn tile_points<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> u32 {
    tiles.into_iter().map(|t| t.value).sum()
}

/// Running score. Only grows until [`ScoreKeeper::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreKeeper {
    total: u32,
    words: u32,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the points of an accepted word.
    pub fn commit(&mut self, points: u32) {
        self.total = self.total.saturating_add(points);
        self.words += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Accepted words since the last reset
    pub fn words(&self) -> u32 {
        self.words
    }
}
