//! Quick Hotseat Demo - replays a short scripted game
//! Prints the board after every committed move and one JSON line per step

use anyhow::Result;
use hotseat_cli::{describe_outcome, render_session, Glyphs, RenderOptions};
use hotseat_core::{Input, Outcome, Session, Square};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// One scripted commit and what it led to
#[derive(Debug, Serialize)]
struct DemoStep<'a> {
    step: usize,
    square: Square,
    outcome: &'a Outcome,
}

/// Opening: 1. e4 e5 2. Nf3 Nc6 3. Bb5, then a blocked rook and a deselect
const SCRIPT: &[&str] = &[
    "e2", "e4", "e7", "e5", "g1", "f3", "b8", "c6", "f1", "b5", "a8", "a6", "a8", "a8",
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let options = RenderOptions {
        glyphs: Glyphs::Ascii,
        color: false,
    };
    let mut session = Session::new();

    for (step, text) in SCRIPT.iter().enumerate() {
        let square: Square = text.parse()?;
        session.handle(Input::Goto(square));
        let outcome = session.handle(Input::Commit);

        println!(
            "{}",
            serde_json::to_string(&DemoStep {
                step,
                square,
                outcome: &outcome,
            })?
        );

        if matches!(outcome, Outcome::Moved { .. }) {
            let status = describe_outcome(&outcome).unwrap_or_default();
            println!("{}", render_session(&session, &options, &status));
        }
    }

    tracing::info!(events = session.events().len(), "Demo finished");
    println!("{}", serde_json::to_string_pretty(session.events())?);
    Ok(())
}
