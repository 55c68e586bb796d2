// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hotseat CLI - terminal front-end
//!
//! Input parsing, board rendering and configuration for the same-terminal
//! game loop in `main.rs`.

pub mod config;
pub mod input;
pub mod render;

pub use config::{Args, Config};
pub use input::{parse_line, InputError};
pub use render::{describe_outcome, render_session, Glyphs, RenderOptions};
