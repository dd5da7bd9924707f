#![allow(clippy::module_inception)]
pub mod board;
pub mod types;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use crate::board::{
    board::Board,
    factory::{build_named, StandardFactory},
};

/// Sets up an 8x8 board and prints it
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Only show the tile labels, without any pieces
    #[arg(long)]
    scaffold: bool,

    /// Place a piece after setup, as TILE=COLOR-KIND (e.g. e4=white-queen)
    #[arg(long = "place", value_name = "PLACEMENT")]
    placements: Vec<String>,

    /// Print the (row, col) a tile label translates to
    #[arg(long = "locate", value_name = "TILE")]
    locate: Vec<String>,
}

fn parse_placement(arg: &str) -> Result<(&str, &str, &str)> {
    let Some((tile, piece)) = arg.split_once('=') else {
        bail!("placement {arg:?} should look like TILE=COLOR-KIND");
    };
    let Some((color, kind)) = piece.split_once('-') else {
        bail!("piece {piece:?} should look like COLOR-KIND");
    };
    Ok((tile, color, kind))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut board: Board = Board::new();
    if !cli.scaffold {
        board.new_game_standard()?;
    }

    let factory = StandardFactory::default();
    for arg in &cli.placements {
        let (tile, color, kind) = parse_placement(arg)?;
        let piece = build_named(&factory, kind, color, tile).with_context(|| format!("bad placement {arg:?}"))?;
        board.place(piece, tile)?;
        info!("placed {piece} on {tile}");
    }

    for tile in &cli.locate {
        let (row, col) = board.indexes_at(tile)?;
        println!("{tile}: ({row}, {col})");
    }

    board.display();
    Ok(())
}
