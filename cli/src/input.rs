// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-oriented keyboard input.
//!
//! Each line typed at the prompt becomes a sequence of [`Input`] signals.
//! An empty line is a commit, so pressing Enter on its own picks up or puts
//! down a piece.

use hotseat_core::{Input, Square};
use thiserror::Error;

/// Input line could not be understood
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown command '{0}' (w/a/s/d to move, a square like e2 to jump, Enter to commit, q to quit)")]
    UnknownToken(String),
}

/// Arrow keys arrive as escape sequences when the terminal is in line mode
const ARROW_SEQUENCES: [(&str, &str); 8] = [
    ("\x1b[A", " up "),
    ("\x1b[B", " down "),
    ("\x1b[C", " right "),
    ("\x1b[D", " left "),
    ("\x1bOA", " up "),
    ("\x1bOB", " down "),
    ("\x1bOC", " right "),
    ("\x1bOD", " left "),
];

/// Parse one line of user input
pub fn parse_line(line: &str) -> Result<Vec<Input>, InputError> {
    let mut normalized = line.to_string();
    for (sequence, word) in ARROW_SEQUENCES {
        normalized = normalized.replace(sequence, word);
    }

    let tokens: Vec<String> = normalized
        .split_whitespace()
        .map(|token| token.to_ascii_lowercase())
        .collect();
    if tokens.is_empty() {
        return Ok(vec![Input::Commit]);
    }

    let mut inputs = Vec::new();
    for token in tokens {
        parse_token(&token, &mut inputs)?;
    }
    Ok(inputs)
}

fn parse_token(token: &str, inputs: &mut Vec<Input>) -> Result<(), InputError> {
    match token {
        "up" => inputs.push(Input::Up),
        "down" => inputs.push(Input::Down),
        "left" => inputs.push(Input::Left),
        "right" => inputs.push(Input::Right),
        "c" | "enter" | "commit" | "." => inputs.push(Input::Commit),
        "q" | "quit" | "exit" => inputs.push(Input::Quit),
        _ => {
            if let Ok(square) = token.parse::<Square>() {
                inputs.push(Input::Goto(square));
                return Ok(());
            }

            // Runs of movement keys, e.g. "wwd"
            let steps: Option<Vec<Input>> = token.chars().map(movement_key).collect();
            match steps {
                Some(steps) => inputs.extend(steps),
                None => return Err(InputError::UnknownToken(token.to_string())),
            }
        }
    }
    Ok(())
}

fn movement_key(key: char) -> Option<Input> {
    match key {
        'w' | 'k' => Some(Input::Up),
        's' | 'j' => Some(Input::Down),
        'a' | 'h' => Some(Input::Left),
        'd' | 'l' => Some(Input::Right),
        _ => None,
    }
}
