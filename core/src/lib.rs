// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hotseat Core - Board Model and Move Legality
//!
//! This crate provides the core game functionality including:
//! - 8x8 board representation and manipulation
//! - Per-piece move legality with sliding-path obstruction checks
//! - Full-board legal-destination scans for selection highlighting
//! - Turn alternation and the cursor/selection interaction state machine

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod path;
pub mod rules;
pub mod scanner;
pub mod session;
pub mod turn;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of files and ranks on the board
pub const BOARD_SIZE: u8 = 8;

/// One of the two move-alternating players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// White player (moves first, pawns advance toward rank index 0)
    White,
    /// Black player
    Black,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank-index delta of a single pawn step for this side.
    ///
    /// Rank index 0 is the top row ("8"), so White pawns walk toward
    /// smaller indices and Black pawns toward larger ones.
    pub fn pawn_direction(&self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Rank index from which this side's pawns may advance two squares
    pub fn pawn_home_rank(&self) -> u8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Kind of a chess piece, independent of its side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase letter used by placement strings
    pub fn letter(&self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Bishops, rooks and queens need every intervening square empty
    pub fn is_sliding(&self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

/// A piece on the board: a kind owned by a side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// Parse a letter code: uppercase is White, lowercase is Black
    pub fn from_char(c: char) -> Option<Self> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };

        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Self { kind, side })
    }

    /// Letter code of this piece
    pub fn to_char(&self) -> char {
        match self.side {
            Side::White => self.kind.letter().to_ascii_uppercase(),
            Side::Black => self.kind.letter(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.side, self.kind)
    }
}

/// Board square with zero-based coordinates.
///
/// `rank` is a row index counted from the top of the board, so rank index 0
/// is rank "8" and rank index 7 is rank "1".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    /// File (column) 0..8, file "a" is 0
    pub file: u8,
    /// Rank index (row) 0..8, top row is 0
    pub rank: u8,
}

impl Square {
    /// Create a square. Callers guarantee both components are in 0..8.
    pub const fn new(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// Create a square, rejecting out-of-range coordinates
    pub fn try_new(file: u8, rank: u8) -> Result<Self, GameError> {
        if file < BOARD_SIZE && rank < BOARD_SIZE {
            Ok(Self { file, rank })
        } else {
            Err(GameError::OutOfRange { file, rank })
        }
    }

    /// Square displaced by `(df, dr)`, or `None` when it leaves the board
    pub fn offset(&self, df: i8, dr: i8) -> Option<Self> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if (0..BOARD_SIZE as i8).contains(&file) && (0..BOARD_SIZE as i8).contains(&rank) {
            Some(Self::new(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// All 64 squares, top row first
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square::new(file, rank)))
    }

    /// Row-major index into a 64-cell grid
    pub fn index(&self) -> usize {
        self.rank as usize * BOARD_SIZE as usize + self.file as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file) as char,
            (b'0' + BOARD_SIZE - self.rank) as char
        )
    }
}

impl FromStr for Square {
    type Err = GameError;

    /// Parse algebraic notation such as `e2`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(GameError::InvalidSquare(s.to_string()));
        }

        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(GameError::InvalidSquare(s.to_string()));
        }

        Ok(Square::new(file - b'a', BOARD_SIZE - (rank - b'0')))
    }
}

/// Errors raised at parsing boundaries and by diagnostic move checks
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Text could not be read as an algebraic square
    #[error("Invalid square: {0}")]
    InvalidSquare(String),

    /// Coordinates outside the 8x8 board
    #[error("Coordinate out of range: file {file}, rank {rank}")]
    OutOfRange { file: u8, rank: u8 },

    /// Malformed piece-placement string
    #[error("Invalid placement: {0}")]
    InvalidPlacement(String),

    /// Origin is empty or holds an opponent piece
    #[error("No piece of the side to move on the origin square")]
    NotYourPiece,

    /// Destination holds a piece of the side to move
    #[error("Destination holds a friendly piece")]
    SelfCapture,

    /// The piece cannot move with this displacement
    #[error("Piece cannot move that way")]
    IllegalShape,

    /// A square between origin and destination is occupied
    #[error("Path is blocked")]
    PathBlocked,
}

pub use board::Board;
pub use rules::{is_legal, MoveValidator};
pub use scanner::{all_legal_moves, legal_destinations, DestinationMap};
pub use session::{Cursor, GameEvent, Input, Outcome, Selection, Session};
pub use turn::TurnController;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_notation() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!(e2, Square::new(4, 6));
        assert_eq!(e2.to_string(), "e2");

        let a8: Square = "A8".parse().unwrap();
        assert_eq!(a8, Square::new(0, 0));
        assert_eq!(Square::new(7, 7).to_string(), "h1");
    }

    #[test]
    fn test_invalid_square_notation() {
        assert!(matches!("i1".parse::<Square>(), Err(GameError::InvalidSquare(_))));
        assert!(matches!("a9".parse::<Square>(), Err(GameError::InvalidSquare(_))));
        assert!(matches!("a".parse::<Square>(), Err(GameError::InvalidSquare(_))));
        assert!(matches!("e2e4".parse::<Square>(), Err(GameError::InvalidSquare(_))));
    }

    #[test]
    fn test_square_bounds() {
        assert!(Square::try_new(7, 7).is_ok());
        assert_eq!(
            Square::try_new(8, 0),
            Err(GameError::OutOfRange { file: 8, rank: 0 })
        );
        assert_eq!(Square::new(0, 0).offset(-1, 0), None);
        assert_eq!(Square::new(0, 0).offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn test_piece_letters() {
        let white_knight = Piece::from_char('N').unwrap();
        assert_eq!(white_knight, Piece::new(PieceKind::Knight, Side::White));
        assert_eq!(white_knight.to_char(), 'N');

        let black_queen = Piece::from_char('q').unwrap();
        assert_eq!(black_queen.side, Side::Black);
        assert_eq!(black_queen.to_char(), 'q');

        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('1'), None);
    }

    #[test]
    fn test_side_pawn_geometry() {
        assert_eq!(Side::White.opposite(), Side::Black);
        assert_eq!(Side::White.pawn_direction(), -1);
        assert_eq!(Side::Black.pawn_direction(), 1);
        assert_eq!(Side::White.pawn_home_rank(), 6);
        assert_eq!(Side::Black.pawn_home_rank(), 1);
    }
}
