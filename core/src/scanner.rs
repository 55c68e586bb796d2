// SPDX-License-Identifier: MIT OR Apache-2.0

//! Full-board legal-destination scans

use crate::{board::Board, rules::MoveValidator, Side, Square};
use serde::{Deserialize, Serialize};

/// Per-square flags marking where a selected piece may move
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationMap {
    /// Flags indexed as `[rank][file]`
    cells: [[bool; 8]; 8],
}

impl DestinationMap {
    /// Check whether a square is flagged as a legal destination
    pub fn get(&self, square: Square) -> bool {
        self.cells[square.rank as usize][square.file as usize]
    }

    fn set(&mut self, square: Square) {
        self.cells[square.rank as usize][square.file as usize] = true;
    }

    /// Number of flagged squares
    pub fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|flag| **flag).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Flagged squares, top row first
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |square| self.get(*square))
    }
}

/// Evaluate every square of the board as a destination for the piece on
/// `origin`.
///
/// The map is rebuilt from scratch on every call. An origin that does not
/// hold a piece of `side` yields an empty map.
pub fn legal_destinations(board: &Board, origin: Square, side: Side) -> DestinationMap {
    let validator = MoveValidator::new(board);
    let mut map = DestinationMap::default();

    for square in Square::all() {
        if validator.is_legal(origin, square, side) {
            map.set(square);
        }
    }

    tracing::trace!(%origin, ?side, count = map.count(), "Scanned legal destinations");
    map
}

/// Every legal `(origin, destination)` pair for `side`
pub fn all_legal_moves(board: &Board, side: Side) -> Vec<(Square, Square)> {
    board
        .pieces()
        .filter(|(_, piece)| piece.side == side)
        .flat_map(|(origin, _)| {
            legal_destinations(board, origin, side)
                .squares()
                .map(move |destination| (origin, destination))
                .collect::<Vec<_>>()
        })
        .collect()
}
