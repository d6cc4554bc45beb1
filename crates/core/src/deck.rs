//! Deck manager - owns every tile of the current game
//!
//! Each minted tile lives in exactly one pile: the draw pile (deck), the shared
//! grid, the private hand, or the discard pile. Blanks minted to fill a slot
//! after the deck ran dry are tracked separately and never count towards the
//! population.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::distribution::TileDistribution;
use crate::factory::{TileFactory, TileRegistry};
use crate::rng::SimpleRng;
use crate::types::{Tile, TileId, DEAL_SIZE, GRID_SIZE, HAND_SIZE};

#[derive(Debug, Clone)]
pub struct DeckManager {
    distribution: TileDistribution,
    factory: TileFactory,
    registry: TileRegistry,
    rng: SimpleRng,
    /// Draw pile, front = next draw
    deck: VecDeque<Tile>,
    grid: ArrayVec<Tile, GRID_SIZE>,
    hand: ArrayVec<Tile, HAND_SIZE>,
    discarded: Vec<Tile>,
}

impl DeckManager {
    /// Create an empty manager using the standard distribution
    pub fn new(seed: u64) -> Self {
        Self::with_distribution(TileDistribution::standard(), seed)
    }

    pub fn with_distribution(distribution: TileDistribution, seed: u64) -> Self {
        Self {
            distribution,
            factory: TileFactory::new(),
            registry: TileRegistry::default(),
            rng: SimpleRng::new(seed),
            deck: VecDeque::new(),
            grid: ArrayVec::new(),
            hand: ArrayVec::new(),
            discarded: Vec::new(),
        }
    }

    /// Mint a fresh population and shuffle it into the draw pile.
    ///
    /// Tiles of the previous game are dropped along with its registry.
    pub fn new_deck(&mut self) {
        self.grid.clear();
        self.hand.clear();
        self.discarded.clear();

        self.registry = self.factory.mint_population(&self.distribution);
        self.deck = self.registry.tiles().iter().copied().collect();
        self.shuffle_deck();
    }

    /// Shuffle whatever is left in the draw pile.
    pub fn shuffle_deck(&mut self) {
        self.rng.shuffle(self.deck.make_contiguous());
    }

    /// Deal 9 tiles to the grid and 3 to the hand.
    ///
    /// Returns `false` and leaves everything untouched when fewer than 12 tiles
    /// remain.
    pub fn deal(&mut self) -> bool {
        if self.deck.len() < DEAL_SIZE {
            return false;
        }

        self.discarded.extend(self.grid.drain(..));
        self.discarded.extend(self.hand.drain(..));
        self.grid.extend(self.deck.drain(..GRID_SIZE));
        self.hand.extend(self.deck.drain(..HAND_SIZE));
        true
    }

    /// Take the front tile of the deck. `None` means the deck is exhausted.
    pub fn draw_one(&mut self) -> Option<Tile> {
        self.deck.pop_front()
    }

    /// Take up to `n` tiles from the front of the deck.
    ///
    /// Like [`DeckManager::draw_one`], the returned tiles belong to the caller
    /// and leave the accounted piles.
    pub fn draw_number(&mut self, n: usize) -> Vec<Tile> {
        let n = n.min(self.deck.len());
        self.deck.drain(..n).collect()
    }

    /// Swap hand slot `index` for a fresh draw.
    ///
    /// Other slots keep their positions. With an empty deck (or an index
    /// outside the hand) the slot keeps its tile and `false` is returned.
    pub fn trade_in_hand_card(&mut self, index: usize) -> bool {
        if index >= self.hand.len() {
            return false;
        }
        let Some(fresh) = self.deck.pop_front() else {
            return false;
        };
        let old = std::mem::replace(&mut self.hand[index], fresh);
        self.discarded.push(old);
        true
    }

    /// Replace every grid and hand tile whose id is in `used`.
    ///
    /// Replacements come from the deck front; once the deck is empty a blank is
    /// minted so the slot stays occupied. Afterwards an undersized grid is topped
    /// up to 9 from the deck (never with blanks).
    ///
    /// Returns `false` when the deck was already empty on entry, meaning the
    /// round cannot continue.
    pub fn redeal_cards(&mut self, used: &[TileId]) -> bool {
        let had_tiles = !self.deck.is_empty();

        for i in 0..self.grid.len() {
            if used.contains(&self.grid[i].id) {
                let fresh = self.draw_or_blank();
                let old = std::mem::replace(&mut self.grid[i], fresh);
                self.retire(old);
            }
        }
        for i in 0..self.hand.len() {
            if used.contains(&self.hand[i].id) {
                let fresh = self.draw_or_blank();
                let old = std::mem::replace(&mut self.hand[i], fresh);
                self.retire(old);
            }
        }

        while !self.grid.is_full() {
            let Some(tile) = self.deck.pop_front() else {
                break;
            };
            self.grid.push(tile);
        }

        had_tiles
    }

    /// Empty grid, hand and deck into the discard pile.
    ///
    /// The registry survives, so tile ids still resolve after the game ends.
    pub fn clear_cards(&mut self) {
        let grid = std::mem::take(&mut self.grid);
        let hand = std::mem::take(&mut self.hand);
        for tile in grid.into_iter().chain(hand) {
            self.retire(tile);
        }
        self.discarded.extend(self.deck.drain(..));
    }

    fn draw_or_blank(&mut self) -> Tile {
        match self.deck.pop_front() {
            Some(tile) => tile,
            None => self.factory.mint_blank(&mut self.registry),
        }
    }

    /// Blanks are not part of the population, so they simply go away.
    fn retire(&mut self, tile: Tile) {
        if !tile.is_blank() {
            self.discarded.push(tile);
        }
    }

    pub fn deck(&self) -> &VecDeque<Tile> {
        &self.deck
    }

    pub fn grid(&self) -> &[Tile] {
        &self.grid
    }

    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }

    pub fn discarded(&self) -> &[Tile] {
        &self.discarded
    }

    /// Tiles left to draw
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    /// Look up any tile of the current game, wherever it currently sits.
    pub fn lookup(&self, id: TileId) -> Option<Tile> {
        self.registry.get(id)
    }

    /// Whether `id` is on the grid or in the hand
    pub fn in_play(&self, id: TileId) -> bool {
        self.grid.iter().chain(self.hand.iter()).any(|t| t.id == id)
    }

    pub fn population(&self) -> usize {
        self.registry.population()
    }

    pub fn registry(&self) -> &TileRegistry {
        &self.registry
    }

    pub fn distribution(&self) -> &TileDistribution {
        &self.distribution
    }

    /// Letter tiles across deck, grid, hand and discard pile
    ///
    /// Equal to [`DeckManager::population`] unless tiles were taken out with
    /// [`DeckManager::draw_one`] or [`DeckManager::draw_number`].
    pub fn accounted(&self) -> usize {
        self.deck
            .iter()
            .chain(self.grid.iter())
            .chain(self.hand.iter())
            .chain(self.discarded.iter())
            .filter(|t| !t.is_blank())
            .count()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for DeckManager {
    fn default() -> Self {
        Self::new(1)
    }
}
