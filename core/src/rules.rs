// SPDX-License-Identifier: MIT OR Apache-2.0

//! Move legality rules
//!
//! Legality here covers the shape of a move, piece ownership and sliding
//! obstruction on a single board snapshot. Check, castling, en passant and
//! promotion are not part of these rules.

use crate::{board::Board, path::is_path_clear, GameError, PieceKind, Side, Square};

/// Validates candidate moves against a board
pub struct MoveValidator<'a> {
    /// The board being checked
    board: &'a Board,
}

impl<'a> MoveValidator<'a> {
    /// Create a new move validator
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Check a move, reporting the first rule it breaks
    pub fn check(&self, origin: Square, destination: Square, side: Side) -> Result<(), GameError> {
        let piece = match self.board.get(origin) {
            Some(piece) if piece.side == side => piece,
            _ => return Err(GameError::NotYourPiece),
        };

        if matches!(self.board.get(destination), Some(target) if target.side == side) {
            return Err(GameError::SelfCapture);
        }

        let df = destination.file as i8 - origin.file as i8;
        let dr = destination.rank as i8 - origin.rank as i8;
        let (dx, dy) = (df.abs(), dr.abs());

        match piece.kind {
            PieceKind::Pawn => self.check_pawn(origin, destination, side, df, dr),
            PieceKind::Knight => {
                if (dx == 2 && dy == 1) || (dx == 1 && dy == 2) {
                    Ok(())
                } else {
                    Err(GameError::IllegalShape)
                }
            }
            PieceKind::Bishop => {
                if is_diagonal(dx, dy) {
                    self.check_clear(origin, destination)
                } else {
                    Err(GameError::IllegalShape)
                }
            }
            PieceKind::Rook => {
                if is_straight(dx, dy) {
                    self.check_clear(origin, destination)
                } else {
                    Err(GameError::IllegalShape)
                }
            }
            PieceKind::Queen => {
                if is_straight(dx, dy) || is_diagonal(dx, dy) {
                    self.check_clear(origin, destination)
                } else {
                    Err(GameError::IllegalShape)
                }
            }
            PieceKind::King => {
                if dx <= 1 && dy <= 1 && (dx, dy) != (0, 0) {
                    Ok(())
                } else {
                    Err(GameError::IllegalShape)
                }
            }
        }
    }

    /// Check if a move is legal
    pub fn is_legal(&self, origin: Square, destination: Square, side: Side) -> bool {
        self.check(origin, destination, side).is_ok()
    }

    fn check_pawn(
        &self,
        origin: Square,
        destination: Square,
        side: Side,
        df: i8,
        dr: i8,
    ) -> Result<(), GameError> {
        let forward = side.pawn_direction();
        let target_occupied = self.board.is_occupied(destination);

        // Single push
        if df == 0 && dr == forward {
            return if target_occupied {
                Err(GameError::PathBlocked)
            } else {
                Ok(())
            };
        }

        // Double push from the home rank
        if df == 0 && dr == 2 * forward && origin.rank == side.pawn_home_rank() {
            let between = Square::new(origin.file, (origin.rank as i8 + forward) as u8);
            return if target_occupied || self.board.is_occupied(between) {
                Err(GameError::PathBlocked)
            } else {
                Ok(())
            };
        }

        // Diagonal capture
        if df.abs() == 1 && dr == forward && target_occupied {
            return Ok(());
        }

        Err(GameError::IllegalShape)
    }

    fn check_clear(&self, origin: Square, destination: Square) -> Result<(), GameError> {
        if is_path_clear(self.board, origin, destination) {
            Ok(())
        } else {
            Err(GameError::PathBlocked)
        }
    }
}

/// Strictly along a rank or a file
fn is_straight(dx: i8, dy: i8) -> bool {
    (dx == 0) != (dy == 0)
}

/// Strictly diagonal
fn is_diagonal(dx: i8, dy: i8) -> bool {
    dx == dy && dx > 0
}

/// Decide whether `side` may move the piece on `origin` to `destination`
pub fn is_legal(board: &Board, origin: Square, destination: Square, side: Side) -> bool {
    MoveValidator::new(board).is_legal(origin, destination, side)
}
