//! Tile minting
//!
//! The factory owns the only id counter in the game. Ids keep increasing across
//! games, so a tile id never refers to two different tiles within a process.

use crate::distribution::TileDistribution;
use crate::types::{Tile, TileId, FIRST_TILE_ID};

/// Monotonic id source
#[derive(Debug, Clone)]
pub struct IdCounter {
    next: TileId,
}

impl IdCounter {
    pub fn new(first: TileId) -> Self {
        Self { next: first }
    }

    /// Hand out the next id
    pub fn next(&mut self) -> TileId {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Lookup table of every tile minted for the current game
///
/// Tiles are appended in id order, which keeps lookups a binary search.
#[derive(Debug, Clone, Default)]
pub struct TileRegistry {
    tiles: Vec<Tile>,
    population: usize,
}

impl TileRegistry {
    pub fn get(&self, id: TileId) -> Option<Tile> {
        self.tiles
            .binary_search_by_key(&id, |t| t.id)
            .ok()
            .map(|i| self.tiles[i])
    }

    /// Number of letter tiles minted from the distribution (blanks excluded)
    pub fn population(&self) -> usize {
        self.population
    }

    /// Every registered tile, blanks included, in id order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn blank_count(&self) -> usize {
        self.tiles.len() - self.population
    }

    fn push(&mut self, tile: Tile) {
        debug_assert!(self.tiles.last().map_or(true, |t| t.id < tile.id));
        self.tiles.push(tile);
    }
}

/// Mints tiles from a distribution
#[derive(Debug, Clone)]
pub struct TileFactory {
    ids: IdCounter,
}

impl TileFactory {
    pub fn new() -> Self {
        Self::starting_at(FIRST_TILE_ID)
    }

    pub fn starting_at(first: TileId) -> Self {
        Self {
            ids: IdCounter::new(first),
        }
    }

    /// Mint the full population, letters in table order.
    pub fn mint_population(&mut self, distribution: &TileDistribution) -> TileRegistry {
        let mut registry = TileRegistry {
            tiles: Vec::with_capacity(distribution.population()),
            population: 0,
        };
        for spec in distribution.letters() {
            for _ in 0..spec.tiles {
                registry.push(Tile::new(self.ids.next(), spec.letter, spec.points));
                registry.population += 1;
            }
        }
        registry
    }

    /// Mint a zero-value blank and register it for lookups.
    pub fn mint_blank(&mut self, registry: &mut TileRegistry) -> Tile {
        let tile = Tile::blank(self.ids.next());
        registry.push(tile);
        tile
    }
}

impl Default for TileFactory {
    fn default() -> Self {
        Self::new()
    }
}
