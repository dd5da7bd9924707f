use crate::types::pieces::{Color, PieceKind};

/// Starting tiles of one piece kind, per color
pub type KindLocations = (PieceKind, &'static [(Color, &'static [&'static str])]);

const INITIAL_PIECE_LOCATIONS: [KindLocations; 6] = [
    (
        PieceKind::Pawn,
        &[
            (Color::White, &["a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2"]),
            (Color::Black, &["a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7"]),
        ],
    ),
    (PieceKind::Rook, &[(Color::White, &["a1", "h1"]), (Color::Black, &["a8", "h8"])]),
    (PieceKind::Knight, &[(Color::White, &["b1", "g1"]), (Color::Black, &["b8", "g8"])]),
    (PieceKind::Bishop, &[(Color::White, &["c1", "f1"]), (Color::Black, &["c8", "f8"])]),
    (PieceKind::Queen, &[(Color::White, &["d1"]), (Color::Black, &["d8"])]),
    (PieceKind::King, &[(Color::White, &["e1"]), (Color::Black, &["e8"])]),
];

/// Standard chess starting position, kind -> color -> tiles. Iteration order is fixed.
pub fn initial_piece_locations() -> &'static [KindLocations] {
    &INITIAL_PIECE_LOCATIONS
}
