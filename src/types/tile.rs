use core::fmt;
use std::str::FromStr;

use phf::phf_map;
use thiserror::Error;

pub const NUM_TILES: usize = 64;
pub const BOARD_WIDTH: usize = 8;

/// File letter to column index
static FILE_ALIASES: phf::Map<char, usize> = phf_map! {
    'a' => 0,
    'b' => 1,
    'c' => 2,
    'd' => 3,
    'e' => 4,
    'f' => 5,
    'g' => 6,
    'h' => 7,
};

const FILE_LABELS: [char; BOARD_WIDTH] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Translates a file letter into its zero-based column index. Case-insensitive.
pub fn index_alias_for(letter: char) -> Option<usize> {
    FILE_ALIASES.get(&letter.to_ascii_lowercase()).copied()
}

/// Inverse of [`index_alias_for`]
pub fn label_for_index(col: usize) -> Option<char> {
    FILE_LABELS.get(col).copied()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    #[error("invalid tile {0:?}: expected a file letter followed by a rank digit")]
    Length(String),
    #[error("invalid tile file {0:?}: expected a letter from a to h")]
    File(char),
    #[error("invalid tile rank {0:?}: expected a digit from 1 to 8")]
    Rank(char),
}

/// A labelled tile such as `e4`. Both coordinates are zero-based, so `a1` is file 0, rank 0.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Tile {
    rank: u8,
    file: u8,
}

impl Tile {
    pub fn from_indexes(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_WIDTH && col < BOARD_WIDTH).then_some(Self { rank: row as u8, file: col as u8 })
    }

    /// Rank is the horizontal row of the tile (y-coord)
    pub fn rank(self) -> usize {
        self.rank as usize
    }

    /// File is the vertical column of the tile (x-coord)
    pub fn file(self) -> usize {
        self.file as usize
    }

    /// `(row, col)` of the tile as seen with rank 1 at the bottom, so `a1` is `(0, 0)`
    /// and `h8` is `(7, 7)`
    pub fn indexes(self) -> (usize, usize) {
        (self.rank(), self.file())
    }

    /// Every tile, `a1, b1, ..., h1, a2, ..., h8`
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..NUM_TILES).map(|i| Self { rank: (i / BOARD_WIDTH) as u8, file: (i % BOARD_WIDTH) as u8 })
    }
}

impl FromStr for Tile {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(TileError::Length(s.to_owned()));
        };
        let file = index_alias_for(letter).ok_or(TileError::File(letter))?;
        let rank = match digit.to_digit(10) {
            Some(d @ 1..=8) => d as usize - 1,
            _ => return Err(TileError::Rank(digit)),
        };
        Ok(Self { rank: rank as u8, file: file as u8 })
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILE_LABELS[self.file()], self.rank + 1)
    }
}

/// Translates a tile label into `(row, col)`, see [`Tile::indexes`]
pub fn indexes_at(label: &str) -> Result<(usize, usize), TileError> {
    label.parse::<Tile>().map(Tile::indexes)
}
