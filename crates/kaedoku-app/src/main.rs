//! Kaedoku terminal front end.
//!
//! Presentation glue only: renders the board, timer, and status line, and
//! forwards player commands to the game session. All game logic lives in
//! the `kaedoku-core` / `kaedoku-generator` / `kaedoku-game` crates.
//!
//! # Usage
//!
//! ```sh
//! kaedoku [--clues 0.7] [--seed 42]
//! ```
//!
//! Commands at the prompt: `new [clues]`, `set <row> <col> <digit>`,
//! `clear <row> <col>`, `show`, `finish`, `quit`.

use std::io::{self, BufRead as _};

use clap::Parser;
use kaedoku_generator::{ClueRetention, PuzzleSeed};

use crate::app::App;

mod app;
mod render;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Per-cell probability that a cell is revealed as a clue (0-1).
    ///
    /// Non-numeric input falls back to 0.7; out-of-range values are
    /// clamped.
    #[arg(long, value_name = "PROB", default_value = "0.7")]
    clues: String,

    /// Seed for a reproducible first board.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let retention = ClueRetention::parse_lossy(&args.clues);
    let seed = args.seed.map(PuzzleSeed::new);

    let mut app = App::new(retention, seed);
    let stdout = io::stdout();

    {
        let mut out = stdout.lock();
        app.render(&mut out)?;
        prompt(&mut out)?;
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let mut out = stdout.lock();
        if app.handle_line(&line) {
            break;
        }
        app.render(&mut out)?;
        prompt(&mut out)?;
    }
    Ok(())
}

fn prompt(out: &mut impl io::Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
