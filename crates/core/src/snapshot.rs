use arrayvec::ArrayVec;

use crate::types::{GamePhase, Tile, TileId, GRID_SIZE, HAND_SIZE, MAX_SELECTION};

/// Read-only view of the game handed to the renderer after every intent
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub grid: ArrayVec<Tile, GRID_SIZE>,
    pub hand: ArrayVec<Tile, HAND_SIZE>,
    pub selection: ArrayVec<TileId, MAX_SELECTION>,
    /// Tiles of the accepted word waiting to be replaced
    pub used: ArrayVec<TileId, MAX_SELECTION>,
    /// Hand slots marked for trade-in, ascending
    pub pending_trades: ArrayVec<usize, HAND_SIZE>,
    pub phase: GamePhase,
    pub score: u32,
    /// Value of the current selection
    pub word_points: u32,
    /// Verdict of the last check-word probe, while it is on display
    pub check_result: Option<bool>,
    /// A submitted word is waiting for the lexicon
    pub validating: bool,
    pub deck_remaining: u32,
    pub words_played: u32,
    pub game_id: u32,
    pub generation: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Tile lookup over grid and hand
    pub fn tile(&self, id: TileId) -> Option<Tile> {
        self.grid
            .iter()
            .chain(self.hand.iter())
            .find(|t| t.id == id)
            .copied()
    }

    pub fn is_selected(&self, id: TileId) -> bool {
        self.selection.contains(&id)
    }

    pub fn is_used(&self, id: TileId) -> bool {
        self.used.contains(&id)
    }

    pub fn is_trade_marked(&self, slot: usize) -> bool {
        self.pending_trades.contains(&slot)
    }

    /// Selected tiles in pick order
    pub fn selected_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.selection.iter().filter_map(|&id| self.tile(id))
    }

    /// Candidate word as sent to the lexicon
    pub fn word(&self) -> String {
        self.selected_tiles()
            .filter_map(|t| t.letter)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }

    pub fn playable(&self) -> bool {
        self.phase.is_building()
    }
}
