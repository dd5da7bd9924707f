use core::fmt;

use log::{debug, info, trace};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    board::{
        factory::{PieceFactory, StandardFactory},
        layout::initial_piece_locations,
    },
    types::{
        pieces::{BoardPiece, Color, Piece, PieceKind},
        tile::{label_for_index, Tile, TileError, BOARD_WIDTH},
    },
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error(transparent)]
    InvalidTile(#[from] TileError),
    #[error("unknown piece kind {0:?}")]
    UnknownPieceKind(String),
    #[error("unknown color {0:?}")]
    UnknownColor(String),
}

/// Content of a single tile
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell<P> {
    Empty,
    /// Placeholder holding the tile's own label
    Label(Tile),
    Occupied(P),
}

impl<P> Default for Cell<P> {
    fn default() -> Self {
        Cell::Empty
    }
}

impl<P> Cell<P> {
    pub fn piece(&self) -> Option<&P> {
        match self {
            Cell::Occupied(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }
}

impl<P: fmt::Display> fmt::Display for Cell<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "__"),
            Cell::Label(tile) => write!(f, "{tile}"),
            Cell::Occupied(p) => write!(f, "{:<2}", p.to_string()),
        }
    }
}

type Grid<P> = [[Cell<P>; BOARD_WIDTH]; BOARD_WIDTH];

/// 8x8 board. Rows are stored top first, so the first stored row is rank 8 and the last is
/// rank 1. Tile coordinates (see [`Tile::indexes`]) count ranks from the bottom, which means
/// visual row `r` lives in stored row `7 - r`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board<P = Piece> {
    data: Grid<P>,
}

impl<P> Default for Board<P> {
    fn default() -> Self {
        Self::new()
    }
}

const fn storage_row(row: usize) -> usize {
    BOARD_WIDTH - 1 - row
}

impl<P> Board<P> {
    /// Board with every tile labelled, see [`Board::clear_and_set`]
    pub fn new() -> Self {
        Self { data: Self::scaffold() }
    }

    /// Board with nothing on it, not even labels
    pub fn empty() -> Self {
        Self { data: std::array::from_fn(|_| std::array::from_fn(|_| Cell::Empty)) }
    }

    fn scaffold() -> Grid<P> {
        std::array::from_fn(|row| {
            std::array::from_fn(|col| match Tile::from_indexes(storage_row(row), col) {
                Some(tile) => Cell::Label(tile),
                None => Cell::Empty,
            })
        })
    }

    /// `(row, col)` for a label, relative to the board as displayed with rank 1 at the bottom
    pub fn indexes_at(&self, label: &str) -> Result<(usize, usize), BoardError> {
        Ok(label.parse::<Tile>()?.indexes())
    }

    /// Puts `piece` on `label`, overwriting whatever was there. Nothing changes if the label is
    /// invalid.
    pub fn place(&mut self, piece: P, label: &str) -> Result<(), BoardError> {
        let tile: Tile = label.parse()?;
        self.place_at(piece, tile);
        Ok(())
    }

    pub fn place_at(&mut self, piece: P, tile: Tile) {
        trace!("placing piece on {tile}");
        *self.cell_at_mut(tile) = Cell::Occupied(piece);
    }

    /// Sets the tile back to empty and returns what was there
    pub fn take(&mut self, label: &str) -> Result<Cell<P>, BoardError> {
        let tile: Tile = label.parse()?;
        Ok(std::mem::take(self.cell_at_mut(tile)))
    }

    /// Replaces the whole grid with one where every tile holds its own label
    pub fn clear_and_set(&mut self) {
        debug!("resetting board to label scaffold");
        self.data = Self::scaffold();
    }

    pub fn cell(&self, label: &str) -> Result<&Cell<P>, BoardError> {
        Ok(self.cell_at(label.parse()?))
    }

    pub fn cell_at(&self, tile: Tile) -> &Cell<P> {
        let (row, col) = tile.indexes();
        &self.data[storage_row(row)][col]
    }

    fn cell_at_mut(&mut self, tile: Tile) -> &mut Cell<P> {
        let (row, col) = tile.indexes();
        &mut self.data[storage_row(row)][col]
    }

    pub fn piece_at(&self, label: &str) -> Result<Option<&P>, BoardError> {
        Ok(self.cell(label)?.piece())
    }

    /// Rows in storage order, top row (rank 8) first
    pub fn rows(&self) -> impl Iterator<Item = &[Cell<P>; BOARD_WIDTH]> {
        self.data.iter()
    }

    /// Every occupied tile, `a1` first
    pub fn occupied(&self) -> impl Iterator<Item = (Tile, &P)> {
        Tile::iter().filter_map(|tile| self.cell_at(tile).piece().map(|p| (tile, p)))
    }
}

impl<P: BoardPiece> Board<P> {
    /// Resets the board and puts every piece of the starting layout on its tile
    pub fn new_game<F: PieceFactory<Piece = P>>(&mut self, factory: &F) -> Result<(), BoardError> {
        self.clear_and_set();
        let mut placed = 0;
        for (kind, colors) in initial_piece_locations() {
            for (color, labels) in colors.iter() {
                for label in labels.iter() {
                    let tile: Tile = label.parse()?;
                    let piece = factory.build(*kind, *color, tile);
                    debug_assert_eq!(piece.color(), *color);
                    self.place_at(piece, tile);
                    placed += 1;
                }
            }
        }
        info!("new game set up with {placed} pieces");
        Ok(())
    }

    pub fn color_at(&self, label: &str) -> Result<Option<Color>, BoardError> {
        Ok(self.piece_at(label)?.map(BoardPiece::color))
    }
}

impl Board<Piece> {
    pub fn new_game_standard(&mut self) -> Result<(), BoardError> {
        self.new_game(&StandardFactory::default())
    }

    /// Number of pieces on the board per kind and color
    pub fn census(&self) -> FxHashMap<(PieceKind, Color), usize> {
        let mut counts = FxHashMap::default();
        for (_, piece) in self.occupied() {
            *counts.entry((piece.kind, piece.color)).or_insert(0) += 1;
        }
        counts
    }
}

impl<P: fmt::Display> Board<P> {
    /// Prints the board to stdout, top row first
    pub fn display(&self) {
        print!("{self}");
    }
}

impl<P: fmt::Display> fmt::Display for Board<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut str = String::new();

        for (idx, row) in self.rows().enumerate() {
            str.push_str(&(storage_row(idx) + 1).to_string());
            str.push_str(" | ");

            for cell in row {
                str.push_str(&cell.to_string());
                str.push_str(" | ");
            }

            str.push('\n');
        }

        str.push_str("   ");
        for col in 0..BOARD_WIDTH {
            if let Some(letter) = label_for_index(col) {
                str.push_str(&format!("  {letter}  "));
            }
        }
        str.push('\n');

        write!(f, "{}", str)
    }
}

#[cfg(test)]
mod board_tests {
    use itertools::iproduct;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::types::{pieces::PieceKind::*, tile::NUM_TILES};

    fn piece(kind: PieceKind, color: Color, label: &str) -> Piece {
        Piece::new(kind, color, label.parse().unwrap())
    }

    #[test]
    fn test_scaffold_holds_own_labels() {
        let board: Board = Board::new();
        for (file, rank) in iproduct!('a'..='h', 1..=8) {
            let label = format!("{file}{rank}");
            let (row, col) = board.indexes_at(&label).unwrap();
            assert_eq!(board.data[7 - row][col], Cell::Label(label.parse().unwrap()));
        }
    }

    #[test]
    fn test_scaffold_storage_order() {
        let board: Board = Board::new();
        let rows: Vec<Vec<String>> =
            board.rows().map(|row| row.iter().map(|c| c.to_string()).collect()).collect();
        assert_eq!(rows[0], ["a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8"]);
        assert_eq!(rows[7], ["a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1"]);
        assert_eq!(rows.iter().flatten().count(), NUM_TILES);
    }

    #[test]
    fn test_place_piece() {
        let mut board: Board = Board::new();
        board.place(piece(Rook, Color::White, "a1"), "a1").unwrap();
        assert_eq!(board.data[7][0], Cell::Occupied(piece(Rook, Color::White, "a1")));
        board.place(piece(King, Color::Black, "e8"), "e8").unwrap();
        assert_eq!(board.data[0][4], Cell::Occupied(piece(King, Color::Black, "e8")));
        assert_eq!(board.color_at("e8"), Ok(Some(Color::Black)));
    }

    #[test]
    fn test_place_overwrites() {
        let mut board: Board = Board::empty();
        board.place(piece(Knight, Color::White, "e4"), "e4").unwrap();
        board.place(piece(Queen, Color::Black, "e4"), "e4").unwrap();
        assert_eq!(board.piece_at("e4"), Ok(Some(&piece(Queen, Color::Black, "e4"))));
        assert_eq!(board.occupied().count(), 1);
    }

    #[test]
    fn test_place_touches_one_cell() {
        let mut board: Board = Board::new();
        let before = board.clone();
        board.place(piece(Bishop, Color::White, "c5"), "C5").unwrap();
        for tile in Tile::iter() {
            if tile.to_string() == "c5" {
                assert!(board.cell_at(tile).is_occupied());
            } else {
                assert_eq!(board.cell_at(tile), before.cell_at(tile));
            }
        }
    }

    #[test]
    fn test_invalid_place_does_not_mutate() {
        let mut board: Board = Board::new();
        let before = board.clone();
        for label in ["z9", "a0", "aa", "", "e44"] {
            assert!(board.place(piece(Pawn, Color::White, "a2"), label).is_err());
            assert!(board.indexes_at(label).is_err());
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_take() {
        let mut board: Board = Board::empty();
        board.place(piece(Pawn, Color::Black, "d7"), "d7").unwrap();
        assert_eq!(board.take("d7"), Ok(Cell::Occupied(piece(Pawn, Color::Black, "d7"))));
        assert_eq!(board.cell("d7"), Ok(&Cell::Empty));
    }

    #[test]
    fn test_clear_and_set_resets() {
        let mut board: Board = Board::new();
        board.new_game_standard().unwrap();
        board.clear_and_set();
        assert_eq!(board, Board::new());
        assert_eq!(board.occupied().count(), 0);
    }

    #[test]
    fn test_new_game() {
        let mut board: Board = Board::empty();
        board.new_game_standard().unwrap();

        let mut expected = 0;
        for (kind, colors) in initial_piece_locations() {
            for (color, labels) in colors.iter() {
                for label in labels.iter() {
                    assert_eq!(board.piece_at(label), Ok(Some(&piece(*kind, *color, label))));
                    expected += 1;
                }
            }
        }
        assert_eq!(board.occupied().count(), expected);
        assert_eq!(board.cell("e4"), Ok(&Cell::Label("e4".parse().unwrap())));
    }

    #[test]
    fn test_new_game_census() {
        let mut board: Board = Board::new();
        board.new_game_standard().unwrap();
        let census = board.census();
        for color in Color::iter() {
            assert_eq!(census[&(Pawn, color)], 8);
            assert_eq!(census[&(Rook, color)], 2);
            assert_eq!(census[&(Knight, color)], 2);
            assert_eq!(census[&(Bishop, color)], 2);
            assert_eq!(census[&(Queen, color)], 1);
            assert_eq!(census[&(King, color)], 1);
        }
        assert_eq!(census.values().sum::<usize>(), 32);
    }

    #[test]
    fn test_new_game_is_deterministic() {
        let mut a: Board = Board::new();
        let mut b: Board = Board::empty();
        a.new_game_standard().unwrap();
        b.new_game_standard().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let mut board: Board = Board::new();
        board.new_game_standard().unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("8 | r  | n  | b  | q  | k  |"));
        assert!(lines[4].starts_with("4 | a4 | b4 |"));
        assert!(lines[7].starts_with("1 | R  | N  | B  | Q  | K  |"));
    }
}
