use log::debug;

use crate::{
    board::board::BoardError,
    types::{
        pieces::{BoardPiece, Color, Piece, PieceKind, NUM_PIECES},
        tile::Tile,
    },
};

/// Builds the pieces a board is populated with
pub trait PieceFactory {
    type Piece: BoardPiece;

    fn build(&self, kind: PieceKind, color: Color, tile: Tile) -> Self::Piece;
}

type Constructor = fn(Color, Tile) -> Piece;

/// One constructor per kind, looked up by the kind tag
pub struct StandardFactory {
    constructors: [Constructor; NUM_PIECES],
}

impl Default for StandardFactory {
    fn default() -> Self {
        Self {
            constructors: [
                |color, tile| Piece::new(PieceKind::Pawn, color, tile),
                |color, tile| Piece::new(PieceKind::Knight, color, tile),
                |color, tile| Piece::new(PieceKind::Bishop, color, tile),
                |color, tile| Piece::new(PieceKind::Rook, color, tile),
                |color, tile| Piece::new(PieceKind::Queen, color, tile),
                |color, tile| Piece::new(PieceKind::King, color, tile),
            ],
        }
    }
}

impl StandardFactory {
    /// Swaps the constructor used for `kind`
    pub fn register(&mut self, kind: PieceKind, constructor: Constructor) {
        self.constructors[kind] = constructor;
    }
}

impl PieceFactory for StandardFactory {
    type Piece = Piece;

    fn build(&self, kind: PieceKind, color: Color, tile: Tile) -> Piece {
        (self.constructors[kind])(color, tile)
    }
}

/// Resolves a piece from its textual kind, color and tile, e.g. `("queen", "white", "d1")`
pub fn build_named<F: PieceFactory>(
    factory: &F,
    kind: &str,
    color: &str,
    label: &str,
) -> Result<F::Piece, BoardError> {
    let kind: PieceKind = kind.parse().map_err(|_| BoardError::UnknownPieceKind(kind.to_owned()))?;
    let color: Color = color.parse().map_err(|_| BoardError::UnknownColor(color.to_owned()))?;
    let tile: Tile = label.parse()?;
    debug!("building {color} {kind} for {tile}");
    Ok(factory.build(kind, color, tile))
}
