use crate::impl_index;
use core::fmt;
use std::ops::{self, Index, IndexMut};

use strum_macros::{Display, EnumIter, EnumString};

use super::tile::Tile;

impl_index!(Color);
#[derive(EnumIter, EnumString, Display, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Color {
    White,
    Black,
}

#[macro_export]
macro_rules! impl_index {
    ($enum_name:ident) => {
        impl<T, const N: usize> Index<$enum_name> for [T; N] {
            type Output = T;

            fn index(&self, index: $enum_name) -> &Self::Output {
                &self[index as usize]
            }
        }

        impl<T, const N: usize> IndexMut<$enum_name> for [T; N] {
            fn index_mut(&mut self, index: $enum_name) -> &mut Self::Output {
                &mut self[index as usize]
            }
        }
    };
}

impl ops::Not for Color {
    type Output = Color;
    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

pub const NUM_PIECES: usize = 6;

impl_index!(PieceKind);
#[derive(EnumIter, EnumString, Display, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Uppercase letter used for the kind in board dumps
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn idx(self) -> usize {
        self as usize
    }
}

/// Anything that can sit on a board. The board only ever asks for the color.
pub trait BoardPiece {
    fn color(&self) -> Color;
}

#[derive(Eq, Copy, Clone, PartialEq, Debug, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// Tile the piece was created on
    pub tile: Tile,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, tile: Tile) -> Self {
        Self { kind, color, tile }
    }
}

impl BoardPiece for Piece {
    fn color(&self) -> Color {
        self.color
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        };
        write!(f, "{symbol}")
    }
}

#[cfg(test)]
mod piece_tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_color_names() {
        assert_eq!(Color::from_str("white"), Ok(Color::White));
        assert_eq!(Color::from_str("Black"), Ok(Color::Black));
        assert!(Color::from_str("green").is_err());
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(!Color::White, Color::Black);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(PieceKind::from_str("pawn"), Ok(PieceKind::Pawn));
        assert_eq!(PieceKind::from_str("KNIGHT"), Ok(PieceKind::Knight));
        assert!(PieceKind::from_str("archbishop").is_err());
        for kind in PieceKind::iter() {
            assert_eq!(PieceKind::from_str(&kind.to_string()), Ok(kind));
        }
    }

    #[test]
    fn test_index_by_enum() {
        let mut counts = [0; NUM_PIECES];
        counts[PieceKind::Queen] += 1;
        assert_eq!(counts[PieceKind::Queen.idx()], 1);
        let sides = ["w", "b"];
        assert_eq!(sides[Color::Black], "b");
    }

    #[test]
    fn test_piece_display() {
        let tile: Tile = "e1".parse().unwrap();
        assert_eq!(Piece::new(PieceKind::King, Color::White, tile).to_string(), "K");
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black, tile).to_string(), "n");
    }
}
