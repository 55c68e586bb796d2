// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal board rendering for the CLI.

use hotseat_core::{Outcome, Piece, PieceKind, Selection, Session, Side, Square, BOARD_SIZE};

const RESET: &str = "\x1b[0m";
const REVERSE: &str = "\x1b[7m";
const SELECTED_BG: &str = "\x1b[43m";
const DESTINATION_BG: &str = "\x1b[42m";
const DARK_SQUARE_BG: &str = "\x1b[100m";

/// Piece glyph style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyphs {
    /// Chess symbols from the Unicode block
    #[default]
    Unicode,
    /// Letters, uppercase White and lowercase Black
    Ascii,
}

/// Display options for the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub glyphs: Glyphs,
    /// Use ANSI colours and reverse video; otherwise mark squares with brackets
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::Unicode,
            color: true,
        }
    }
}

/// How a single square is emphasised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Highlight {
    None,
    Cursor,
    Selected,
    Destination,
}

/// Render the board and a status line
pub fn render_session(session: &Session, options: &RenderOptions, status: &str) -> String {
    let mut output = String::new();

    let selected = match session.selection() {
        Selection::Idle => None,
        Selection::Selected { origin, .. } => Some(*origin),
    };
    let destinations = session.destinations();

    output.push_str(&file_labels());
    for rank in 0..BOARD_SIZE {
        let label = (b'0' + BOARD_SIZE - rank) as char;
        output.push_str(&format!("{} ", label));

        for file in 0..BOARD_SIZE {
            let square = Square::new(file, rank);
            let highlight = if square == session.cursor() {
                Highlight::Cursor
            } else if Some(square) == selected {
                Highlight::Selected
            } else if destinations.map_or(false, |map| map.get(square)) {
                Highlight::Destination
            } else {
                Highlight::None
            };

            let glyph = session
                .board()
                .get(square)
                .map(|piece| piece_glyph(piece, options.glyphs))
                .unwrap_or(empty_glyph(options.glyphs));
            output.push_str(&render_cell(square, glyph, highlight, options.color));
        }

        output.push_str(&format!(" {}\n", label));
    }
    output.push_str(&file_labels());

    output.push_str(&format!("{} to move", session.side_to_move()));
    if !status.is_empty() {
        output.push_str(" | ");
        output.push_str(status);
    }
    output.push('\n');

    output
}

fn file_labels() -> String {
    let mut labels = String::from("  ");
    for file in 0..BOARD_SIZE {
        labels.push_str(&format!(" {} ", (b'a' + file) as char));
    }
    labels.push('\n');
    labels
}

fn render_cell(square: Square, glyph: char, highlight: Highlight, color: bool) -> String {
    if !color {
        let (left, right) = match highlight {
            Highlight::Cursor => ('[', ']'),
            Highlight::Selected => ('<', '>'),
            Highlight::Destination => ('(', ')'),
            Highlight::None => (' ', ' '),
        };
        return format!("{}{}{}", left, glyph, right);
    }

    let style = match highlight {
        Highlight::Cursor => REVERSE,
        Highlight::Selected => SELECTED_BG,
        Highlight::Destination => DESTINATION_BG,
        Highlight::None if (square.file + square.rank) % 2 == 1 => DARK_SQUARE_BG,
        Highlight::None => "",
    };
    format!("{} {} {}", style, glyph, RESET)
}

fn empty_glyph(glyphs: Glyphs) -> char {
    match glyphs {
        Glyphs::Unicode => '·',
        Glyphs::Ascii => '.',
    }
}

/// Glyph for a piece in the chosen style
pub fn piece_glyph(piece: Piece, glyphs: Glyphs) -> char {
    if glyphs == Glyphs::Ascii {
        return piece.to_char();
    }

    match (piece.side, piece.kind) {
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::King) => '♔',
        (Side::Black, PieceKind::Pawn) => '♟',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::King) => '♚',
    }
}

/// Status text for an outcome; cursor movement keeps the previous text
pub fn describe_outcome(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::CursorMoved(_) | Outcome::Quit => None,
        Outcome::Selected { origin, choices: 0 } => {
            Some(format!("Selected {} (no legal moves)", origin))
        }
        Outcome::Selected { origin, choices } => {
            Some(format!("Selected {} ({} legal moves)", origin, choices))
        }
        Outcome::Deselected(origin) => Some(format!("Put back {}", origin)),
        Outcome::Moved {
            origin,
            destination,
            captured: Some(captured),
            ..
        } => Some(format!("{}-{} takes {:?}", origin, destination, captured.kind)),
        Outcome::Moved {
            origin,
            destination,
            ..
        } => Some(format!("{}-{}", origin, destination)),
        Outcome::Rejected {
            origin,
            destination,
        } => Some(format!("Illegal move {}-{}", origin, destination)),
        Outcome::Ignored => Some("Nothing to pick up there".to_string()),
    }
}
