// SPDX-License-Identifier: MIT OR Apache-2.0

//! Side-to-move tracking

use crate::Side;
use serde::{Deserialize, Serialize};

/// Tracks whose turn it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    side_to_move: Side,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    /// White moves first
    pub fn new() -> Self {
        Self::starting_with(Side::White)
    }

    pub fn starting_with(side: Side) -> Self {
        Self { side_to_move: side }
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Hand the move to the other side. Called once per committed move.
    pub fn toggle(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }
}
