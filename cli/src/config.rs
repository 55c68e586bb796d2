// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line configuration

use crate::render::{Glyphs, RenderOptions};
use clap::{Parser, ValueEnum};
use hotseat_core::{Board, GameError, Session, Side};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(
    name = "hotseat",
    about = "Two-player chess on one terminal",
    version
)]
pub struct Args {
    /// Enable debug tracing on stderr (RUST_LOG overrides the level)
    #[clap(long)]
    pub debug: bool,

    /// Directory for log files
    #[clap(long)]
    pub log_dir: Option<PathBuf>,

    /// Draw pieces as letters instead of chess symbols
    #[clap(long)]
    pub ascii: bool,

    /// Disable colours; squares are marked with brackets instead
    #[clap(long)]
    pub no_color: bool,

    /// Do not clear the screen between moves
    #[clap(long)]
    pub no_clear: bool,

    /// Start from a FEN piece placement instead of the standard setup
    #[clap(long)]
    pub position: Option<String>,

    /// Side that moves first
    #[clap(long, value_enum, default_value = "white")]
    pub side: SideArg,
}

/// Side selector accepted on the command line
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    White,
    Black,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::White => Side::White,
            SideArg::Black => Side::Black,
        }
    }
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub render: RenderOptions,
    pub clear_screen: bool,
    pub board: Board,
    pub first_side: Side,
}

impl TryFrom<&Args> for Config {
    type Error = GameError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let board = match &args.position {
            Some(placement) => Board::from_placement(placement)?,
            None => Board::standard(),
        };

        Ok(Self {
            render: RenderOptions {
                glyphs: if args.ascii { Glyphs::Ascii } else { Glyphs::Unicode },
                color: !args.no_color,
            },
            clear_screen: !args.no_clear,
            board,
            first_side: args.side.into(),
        })
    }
}

impl Config {
    /// Start a new game session from this configuration
    pub fn session(&self) -> Session {
        Session::with_position(self.board.clone(), self.first_side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["hotseat"]);
        let config = Config::try_from(&args).unwrap();
        assert_eq!(config.render, RenderOptions::default());
        assert!(config.clear_screen);
        assert_eq!(config.board, Board::standard());
        assert_eq!(config.session().side_to_move(), Side::White);
    }

    #[test]
    fn test_custom_position_and_side() {
        let args = Args::parse_from([
            "hotseat",
            "--ascii",
            "--no-color",
            "--position",
            "4k3/8/8/8/8/8/8/4K3",
            "--side",
            "black",
        ]);
        let config = Config::try_from(&args).unwrap();
        assert_eq!(config.render.glyphs, Glyphs::Ascii);
        assert!(!config.render.color);
        assert_eq!(config.board.count(Side::White), 1);
        assert_eq!(config.session().side_to_move(), Side::Black);
    }

    #[test]
    fn test_bad_position_rejected() {
        let args = Args::parse_from(["hotseat", "--position", "not/a/board"]);
        assert!(matches!(
            Config::try_from(&args),
            Err(GameError::InvalidPlacement(_))
        ));
    }
}
