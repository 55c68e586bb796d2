// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sliding-path obstruction checks

use crate::{board::Board, Square};

/// Unit step from `origin` toward `destination` when both squares share a
/// rank, file or diagonal. Returns `None` for the null move and for pairs
/// that are not on a common line.
pub fn line_step(origin: Square, destination: Square) -> Option<(i8, i8)> {
    let df = destination.file as i8 - origin.file as i8;
    let dr = destination.rank as i8 - origin.rank as i8;

    if df == 0 && dr == 0 {
        return None;
    }

    if df == 0 || dr == 0 || df.abs() == dr.abs() {
        Some((df.signum(), dr.signum()))
    } else {
        None
    }
}

/// Check that every square strictly between `origin` and `destination` is
/// empty.
///
/// Only meaningful when the two squares share a line; callers reach this
/// after a shape check has established that. The occupancy of
/// `destination` itself is not considered.
pub fn is_path_clear(board: &Board, origin: Square, destination: Square) -> bool {
    let Some((step_file, step_rank)) = line_step(origin, destination) else {
        return true;
    };

    let mut current = origin;
    loop {
        current = match current.offset(step_file, step_rank) {
            Some(next) => next,
            None => return true,
        };

        if current == destination {
            return true;
        }

        if board.is_occupied(current) {
            tracing::trace!(%origin, %destination, blocker = %current, "Path blocked");
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Piece, PieceKind, Side};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_line_step() {
        assert_eq!(line_step(sq("a1"), sq("a8")), Some((0, -1)));
        assert_eq!(line_step(sq("h1"), sq("a1")), Some((-1, 0)));
        assert_eq!(line_step(sq("a1"), sq("h8")), Some((1, -1)));
        assert_eq!(line_step(sq("c5"), sq("a7")), Some((-1, -1)));
        assert_eq!(line_step(sq("b1"), sq("c3")), None);
        assert_eq!(line_step(sq("d4"), sq("d4")), None);
    }

    #[test]
    fn test_empty_board_paths_are_clear() {
        let board = Board::empty();
        assert!(is_path_clear(&board, sq("a1"), sq("a8")));
        assert!(is_path_clear(&board, sq("a1"), sq("h8")));
        assert!(is_path_clear(&board, sq("h3"), sq("b3")));
    }

    #[test]
    fn test_blocker_between() {
        let mut board = Board::empty();
        board.place(sq("d4"), Piece::new(PieceKind::Pawn, Side::Black));

        assert!(!is_path_clear(&board, sq("d1"), sq("d8")));
        assert!(!is_path_clear(&board, sq("a1"), sq("g7")));
        assert!(is_path_clear(&board, sq("d1"), sq("d3")));
    }

    #[test]
    fn test_destination_occupancy_ignored() {
        let mut board = Board::empty();
        board.place(sq("d4"), Piece::new(PieceKind::Pawn, Side::Black));

        assert!(is_path_clear(&board, sq("d1"), sq("d4")));
        assert!(is_path_clear(&board, sq("d4"), sq("d5")));
    }

    #[test]
    fn test_adjacent_squares_always_clear() {
        let board = Board::standard();
        assert!(is_path_clear(&board, sq("a1"), sq("a2")));
        assert!(is_path_clear(&board, sq("d1"), sq("e2")));
    }
}
