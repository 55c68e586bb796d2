// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cursor and selection state machine for a same-terminal game
//!
//! A [`Session`] owns the board, the turn controller, the cursor and the
//! current selection. The surrounding loop feeds it one [`Input`] at a time
//! and renders from its read-only views afterwards.

use crate::{
    board::Board,
    rules::MoveValidator,
    scanner::{legal_destinations, DestinationMap},
    turn::TurnController,
    Piece, Side, Square, BOARD_SIZE,
};
use serde::{Deserialize, Serialize};

/// Discrete signals delivered by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
    /// Jump the cursor straight to a square
    Goto(Square),
    /// Select the piece under the cursor or try to move the selected one
    Commit,
    Quit,
}

/// Highlighted square, clamped to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    square: Square,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            square: Square::new(0, 0),
        }
    }
}

impl Cursor {
    pub fn at(square: Square) -> Self {
        Self { square }
    }

    pub fn square(&self) -> Square {
        self.square
    }

    /// Step by `(df, dr)`, staying put on an axis that would leave the board
    pub fn step(&mut self, df: i8, dr: i8) {
        let clamp = |value: u8, delta: i8| -> u8 {
            (value as i8 + delta).clamp(0, BOARD_SIZE as i8 - 1) as u8
        };
        self.square = Square::new(clamp(self.square.file, df), clamp(self.square.rank, dr));
    }

    pub fn jump(&mut self, square: Square) {
        self.square = square;
    }
}

/// Whether a piece is currently picked up
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// No piece selected
    #[default]
    Idle,
    /// A piece on `origin` is picked up
    Selected {
        origin: Square,
        /// Legal destinations computed when the piece was picked up
        destinations: DestinationMap,
    },
}

/// Result of handling one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Cursor now rests on this square
    CursorMoved(Square),
    /// A piece was picked up with this many legal destinations
    Selected { origin: Square, choices: usize },
    /// The selected piece was put back
    Deselected(Square),
    /// A move was committed and the turn passed
    Moved {
        origin: Square,
        destination: Square,
        piece: Piece,
        captured: Option<Piece>,
    },
    /// The target was not a legal destination; selection dropped
    Rejected { origin: Square, destination: Square },
    /// Commit over a square that cannot be selected
    Ignored,
    Quit,
}

/// Game events recorded while playing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A piece was picked up
    PieceSelected {
        /// The side that picked it up
        by: Side,
        /// Square the piece stands on
        origin: Square,
    },
    /// The selection was dropped without moving
    SelectionCleared {
        by: Side,
        origin: Square,
    },
    /// A move was made
    MoveMade {
        /// The player who made the move
        by: Side,
        origin: Square,
        destination: Square,
        piece: Piece,
        /// Piece overwritten on the destination, if any
        captured: Option<Piece>,
    },
    /// An illegal destination was chosen
    MoveRejected {
        by: Side,
        origin: Square,
        destination: Square,
    },
}

/// Board, turn, cursor and selection for one game
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    turn: TurnController,
    cursor: Cursor,
    selection: Selection,
    events: Vec<GameEvent>,
}

impl Session {
    /// Create a session on the standard starting position, White to move
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from an arbitrary board and side to move
    pub fn with_position(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            turn: TurnController::starting_with(side_to_move),
            ..Self::default()
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Square {
        self.cursor.square()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn side_to_move(&self) -> Side {
        self.turn.side_to_move()
    }

    /// Legal-destination map of the current selection, if any
    pub fn destinations(&self) -> Option<&DestinationMap> {
        match &self.selection {
            Selection::Idle => None,
            Selection::Selected { destinations, .. } => Some(destinations),
        }
    }

    /// Events recorded since the session was created
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Process one input signal
    pub fn handle(&mut self, input: Input) -> Outcome {
        match input {
            Input::Up => self.move_cursor(0, -1),
            Input::Down => self.move_cursor(0, 1),
            Input::Left => self.move_cursor(-1, 0),
            Input::Right => self.move_cursor(1, 0),
            Input::Goto(square) => {
                self.cursor.jump(square);
                Outcome::CursorMoved(square)
            }
            Input::Commit => self.commit(),
            Input::Quit => Outcome::Quit,
        }
    }

    fn move_cursor(&mut self, df: i8, dr: i8) -> Outcome {
        self.cursor.step(df, dr);
        Outcome::CursorMoved(self.cursor.square())
    }

    fn commit(&mut self) -> Outcome {
        let target = self.cursor.square();
        let side = self.turn.side_to_move();

        match std::mem::take(&mut self.selection) {
            Selection::Idle => self.select(target, side),
            Selection::Selected {
                origin,
                destinations,
            } => {
                if target == origin {
                    tracing::debug!(%origin, "Selection cleared");
                    self.events.push(GameEvent::SelectionCleared { by: side, origin });
                    Outcome::Deselected(origin)
                } else if destinations.get(target) {
                    self.apply_move(origin, target, side)
                } else {
                    if let Err(reason) = MoveValidator::new(&self.board).check(origin, target, side) {
                        tracing::debug!(%origin, destination = %target, %reason, "Move rejected");
                    }
                    self.events.push(GameEvent::MoveRejected {
                        by: side,
                        origin,
                        destination: target,
                    });
                    Outcome::Rejected {
                        origin,
                        destination: target,
                    }
                }
            }
        }
    }

    fn select(&mut self, origin: Square, side: Side) -> Outcome {
        match self.board.get(origin) {
            Some(piece) if piece.side == side => {
                let destinations = legal_destinations(&self.board, origin, side);
                let choices = destinations.count();
                tracing::debug!(%origin, %piece, choices, "Piece selected");

                self.events.push(GameEvent::PieceSelected { by: side, origin });
                self.selection = Selection::Selected {
                    origin,
                    destinations,
                };
                Outcome::Selected { origin, choices }
            }
            _ => Outcome::Ignored,
        }
    }

    fn apply_move(&mut self, origin: Square, destination: Square, side: Side) -> Outcome {
        let Some(piece) = self.board.get(origin) else {
            return Outcome::Ignored;
        };

        let captured = self.board.move_piece(origin, destination);
        self.turn.toggle();
        tracing::debug!(%origin, %destination, %piece, ?captured, "Move made");

        self.events.push(GameEvent::MoveMade {
            by: side,
            origin,
            destination,
            piece,
            captured,
        });
        Outcome::Moved {
            origin,
            destination,
            piece,
            captured,
        }
    }
}
