// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use crate::{GameError, Piece, PieceKind, Side, Square, BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// Piece placement of the standard starting position, top row first
pub const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// The 8x8 grid of pieces.
///
/// The board holds position only. It performs no legality checking, callers
/// decide whether a mutation is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `[rank][file]`
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// Create a board with no pieces
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Create a board with the standard chess starting arrangement
    pub fn standard() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            board.place(Square::new(file, 0), Piece::new(*kind, Side::Black));
            board.place(Square::new(file, 1), Piece::new(PieceKind::Pawn, Side::Black));
            board.place(Square::new(file, 6), Piece::new(PieceKind::Pawn, Side::White));
            board.place(Square::new(file, 7), Piece::new(*kind, Side::White));
        }
        board
    }

    /// Parse the piece-placement field of a FEN record.
    ///
    /// Ranks are listed top row first and separated by `/`; digits stand
    /// for runs of empty squares. Only the shape of the string is checked,
    /// the position itself is not validated.
    pub fn from_placement(placement: &str) -> Result<Self, GameError> {
        let invalid = |why: &str| GameError::InvalidPlacement(format!("{}: {}", why, placement));

        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(invalid("expected 8 ranks"));
        }

        let mut board = Self::empty();
        for (rank, row) in rows.iter().enumerate() {
            let mut file: u8 = 0;
            for c in row.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 || run > BOARD_SIZE as u32 {
                        return Err(invalid("bad empty-square count"));
                    }
                    file += run as u8;
                } else {
                    let piece = Piece::from_char(c).ok_or_else(|| invalid("unknown piece letter"))?;
                    if file >= BOARD_SIZE {
                        return Err(invalid("rank too long"));
                    }
                    board.place(Square::new(file, rank as u8), piece);
                    file += 1;
                }

                if file > BOARD_SIZE {
                    return Err(invalid("rank too long"));
                }
            }

            if file != BOARD_SIZE {
                return Err(invalid("rank too short"));
            }
        }

        Ok(board)
    }

    /// Render the board as a FEN piece-placement field
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for (rank, row) in self.cells.iter().enumerate() {
            if rank > 0 {
                out.push('/');
            }

            let mut run = 0;
            for cell in row {
                match cell {
                    Some(piece) => {
                        if run > 0 {
                            out.push_str(&run.to_string());
                            run = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                out.push_str(&run.to_string());
            }
        }
        out
    }

    /// Get the piece at the specified square
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.rank as usize][square.file as usize]
    }

    /// Check whether the square holds any piece
    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    /// Put a piece on a square, replacing whatever was there
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.cells[square.rank as usize][square.file as usize] = Some(piece);
    }

    /// Clear a square, returning its former content
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.rank as usize][square.file as usize].take()
    }

    /// Move the content of `origin` to `destination` and clear `origin`.
    ///
    /// Unconditional: the destination's former content is overwritten and
    /// returned. Moving a square onto itself leaves the board unchanged.
    pub fn move_piece(&mut self, origin: Square, destination: Square) -> Option<Piece> {
        if origin == destination {
            return None;
        }

        let moving = self.remove(origin);
        let overwritten = self.get(destination);
        self.cells[destination.rank as usize][destination.file as usize] = moving;
        overwritten
    }

    /// Iterate over occupied squares, top row first
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    /// Count the pieces belonging to one side
    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|(_, piece)| piece.side == side).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_setup() {
        let board = Board::standard();
        assert_eq!(board.count(Side::White), 16);
        assert_eq!(board.count(Side::Black), 16);

        let e1: Square = "e1".parse().unwrap();
        assert_eq!(board.get(e1), Some(Piece::new(PieceKind::King, Side::White)));
        let d8: Square = "d8".parse().unwrap();
        assert_eq!(board.get(d8), Some(Piece::new(PieceKind::Queen, Side::Black)));
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(board.get(e4), None);
    }

    #[test]
    fn test_placement_round_trip_of_start() {
        let board = Board::from_placement(STANDARD_PLACEMENT).unwrap();
        assert_eq!(board, Board::standard());
        assert_eq!(Board::standard().to_placement(), STANDARD_PLACEMENT);
        assert_eq!(Board::empty().to_placement(), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn test_invalid_placements() {
        for bad in [
            "",
            "8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/9",
            "8/8/8/8/8/8/8/7",
            "8/8/8/8/8/8/8/ppppppppp",
            "8/8/8/8/8/8/8/4x3",
            "8/8/8/8/8/8/8/0pppppppp",
        ] {
            assert!(
                matches!(Board::from_placement(bad), Err(GameError::InvalidPlacement(_))),
                "placement {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_move_piece_is_unconditional() {
        let mut board = Board::standard();
        let a1 = Square::new(0, 7);
        let a8 = Square::new(0, 0);

        // A rook "jumping" through its own pawn is not the board's concern
        let captured = board.move_piece(a1, a8);
        assert_eq!(captured, Some(Piece::new(PieceKind::Rook, Side::Black)));
        assert_eq!(board.get(a1), None);
        assert_eq!(board.get(a8), Some(Piece::new(PieceKind::Rook, Side::White)));
        assert_eq!(board.count(Side::Black), 15);
    }

    #[test]
    fn test_move_piece_any_pair() {
        let start = Board::standard();
        for origin in Square::all() {
            for destination in Square::all().filter(|sq| *sq != origin) {
                let mut board = start.clone();
                let moving = board.get(origin);
                board.move_piece(origin, destination);
                assert_eq!(board.get(origin), None);
                assert_eq!(board.get(destination), moving);
            }
        }
    }

    #[test]
    fn test_move_onto_itself() {
        let mut board = Board::standard();
        let e2: Square = "e2".parse().unwrap();
        assert_eq!(board.move_piece(e2, e2), None);
        assert_eq!(board, Board::standard());
    }
}
