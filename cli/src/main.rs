// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hotseat CLI - two players, one terminal
//!
//! Reads one line of input at a time, feeds each signal to the session and
//! redraws the board. Exits with status 0 on `q` or end of input.

// Initialize logging at the start of the program
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

// Initialize logging functionality first thing in the program
fn init_logging(log_dir: Option<&Path>) -> Result<LoggerHandle> {
    // Get log directory
    let log_dir = match log_dir {
        Some(dir) => dir.to_path_buf(),
        None => match std::env::consts::OS {
            "macos" => {
                let mut path = PathBuf::from(std::env::var("HOME")?);
                path.push("Library");
                path.push("Logs");
                path.push("hotseat");
                path
            }
            _ => {
                let mut path = PathBuf::from(".");
                path.push("logs");
                path
            }
        },
    };

    // Ensure log directory exists
    std::fs::create_dir_all(&log_dir)?;

    // The board owns the terminal, so log records only go to files
    let handle = Logger::try_with_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(&log_dir)
                .basename("hotseat")
                .suffix("log"),
        )
        .rotate(
            Criterion::Size(10 * 1024 * 1024), // 10MB per file
            Naming::Timestamps,
            Cleanup::KeepLogFiles(5),
        )
        .start()?;

    Ok(handle)
}

use clap::Parser;
use hotseat_cli::{describe_outcome, parse_line, render_session, Args, Config};
use hotseat_core::{Outcome, Session};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

const HELP_TEXT: &str = "w/a/s/d or arrows to move, a square like e2 to jump, Enter to pick up or drop, q to quit";

/// Main entry point
fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // File logging stops when the handle is dropped
    let _log_handle = match init_logging(args.log_dir.as_deref()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    // Setup debug logging if requested
    if args.debug {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .context("Failed to install tracing subscriber")?;
    }

    let config = Config::try_from(&args).context("Invalid configuration")?;
    let mut session = config.session();
    tracing::info!(
        side = %session.side_to_move(),
        position = %session.board().to_placement(),
        "Starting game"
    );

    run_game_loop(&mut session, &config)
}

/// Run the main game loop
fn run_game_loop(session: &mut Session, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut status = HELP_TEXT.to_string();

    draw(&mut stdout, session, config, &status)?;

    for line in stdin.lock().lines() {
        let line = line.context("Error reading input")?;

        let inputs = match parse_line(&line) {
            Ok(inputs) => inputs,
            Err(e) => {
                status = e.to_string();
                draw(&mut stdout, session, config, &status)?;
                continue;
            }
        };

        for input in inputs {
            let outcome = session.handle(input);
            if outcome == Outcome::Quit {
                tracing::info!(events = session.events().len(), "Quit requested");
                return Ok(());
            }

            if let Some(text) = describe_outcome(&outcome) {
                status = text;
            }
        }

        draw(&mut stdout, session, config, &status)?;
    }

    tracing::info!(events = session.events().len(), "Input closed");
    Ok(())
}

/// Redraw the whole board
fn draw(out: &mut impl Write, session: &Session, config: &Config, status: &str) -> Result<()> {
    if config.clear_screen {
        write!(out, "\x1b[2J\x1b[H")?;
    }
    write!(out, "{}", render_session(session, &config.render, status))?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
