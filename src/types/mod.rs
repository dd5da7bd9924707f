pub mod pieces;
pub mod tile;
