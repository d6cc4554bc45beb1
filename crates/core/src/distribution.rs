//! Tile distribution table
//!
//! Standard English Scrabble letter counts and point values. Blanks are not part
//! of the table; the deck mints its own zero-value blanks when it runs dry.

/// One row of the distribution table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSpec {
    pub letter: char,
    pub points: u32,
    pub tiles: u32,
}

const fn spec(letter: char, points: u32, tiles: u32) -> LetterSpec {
    LetterSpec {
        letter,
        points,
        tiles,
    }
}

/// Scrabble letters: 98 tiles
pub const SCRABBLE_LETTERS: [LetterSpec; 26] = [
    spec('A', 1, 9),
    spec('B', 3, 2),
    spec('C', 3, 2),
    spec('D', 2, 4),
    spec('E', 1, 12),
    spec('F', 4, 2),
    spec('G', 2, 3),
    spec('H', 4, 2),
    spec('I', 1, 9),
    spec('J', 8, 1),
    spec('K', 5, 1),
    spec('L', 1, 4),
    spec('M', 3, 2),
    spec('N', 1, 6),
    spec('O', 1, 8),
    spec('P', 3, 2),
    spec('Q', 10, 1),
    spec('R', 1, 6),
    spec('S', 1, 4),
    spec('T', 1, 6),
    spec('U', 1, 4),
    spec('V', 4, 2),
    spec('W', 4, 2),
    spec('X', 8, 1),
    spec('Y', 4, 2),
    spec('Z', 10, 1),
];

/// Letter → {points, tile count} table, fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileDistribution {
    letters: &'static [LetterSpec],
}

impl TileDistribution {
    pub const fn new(letters: &'static [LetterSpec]) -> Self {
        Self { letters }
    }

    pub const fn standard() -> Self {
        Self::new(&SCRABBLE_LETTERS)
    }

    pub fn letters(&self) -> &'static [LetterSpec] {
        self.letters
    }

    /// Total number of tiles minted from this table
    pub fn population(&self) -> usize {
        self.letters.iter().map(|l| l.tiles as usize).sum()
    }

    pub fn points_for(&self, letter: char) -> Option<u32> {
        self.find(letter).map(|l| l.points)
    }

    pub fn tiles_for(&self, letter: char) -> Option<u32> {
        self.find(letter).map(|l| l.tiles)
    }

    fn find(&self, letter: char) -> Option<&LetterSpec> {
        let letter = letter.to_ascii_uppercase();
        self.letters.iter().find(|l| l.letter == letter)
    }
}

impl Default for TileDistribution {
    fn default() -> Self {
        Self::standard()
    }
}
