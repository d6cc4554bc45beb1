//! Selection tracking - the candidate word as an ordered list of tile ids

use arrayvec::ArrayVec;

use crate::deck::DeckManager;
use crate::types::{TileId, MAX_SELECTION};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    ids: ArrayVec<TileId, MAX_SELECTION>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` if it is on the table and not already picked.
    pub fn select(&mut self, id: TileId, deck: &DeckManager) -> bool {
        if self.contains(id) || !deck.in_play(id) || self.ids.is_full() {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn deselect(&mut self, id: TileId) -> bool {
        match self.ids.iter().position(|&s| s == id) {
            Some(i) => {
                self.ids.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[TileId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Candidate word: letters in pick order, lower-cased. Blanks add nothing.
    pub fn word(&self, deck: &DeckManager) -> String {
        self.ids
            .iter()
            .filter_map(|&id| deck.lookup(id))
            .filter_map(|t| t.letter)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}
