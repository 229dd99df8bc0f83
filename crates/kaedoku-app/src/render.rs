//! Board rendering for the terminal.

use std::io;

use kaedoku_core::Position;
use kaedoku_game::{CellMark, GameSession, format_mm_ss};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";

/// Draws the session: header with timer and clue setting, the colored
/// grid, the status line, and any transient notice.
///
/// The timer is recomputed from the session on every draw; there is no
/// background tick.
pub(crate) fn draw(
    out: &mut impl io::Write,
    session: &GameSession,
    notice: Option<&str>,
) -> io::Result<()> {
    let phase = if session.phase().is_running() {
        "running"
    } else {
        "stopped"
    };
    writeln!(out)?;
    writeln!(
        out,
        "  time {}   clues {}   givens {}   [{phase}]",
        format_mm_ss(session.elapsed()),
        session.clue_retention(),
        session.given_count(),
    )?;
    writeln!(out)?;

    writeln!(out, "      0 1 2   3 4 5   6 7 8")?;
    for row in 0..9u8 {
        if row % 3 == 0 {
            writeln!(out, "    +-------+-------+-------+")?;
        }
        write!(out, "  {row} ")?;
        for col in 0..9u8 {
            if col % 3 == 0 {
                write!(out, "| ")?;
            }
            let pos = Position::new(col, row);
            let glyph = session
                .cell(pos)
                .as_digit()
                .map_or('.', |d| char::from(b'0' + d.value()));
            write!(out, "{}{glyph}{RESET} ", color(session.mark(pos)))?;
        }
        writeln!(out, "|")?;
    }
    writeln!(out, "    +-------+-------+-------+")?;

    writeln!(out)?;
    writeln!(out, "  {}", session.status())?;
    if let Some(notice) = notice {
        writeln!(out, "  {RED}{notice}{RESET}")?;
    }
    out.flush()
}

const fn color(mark: CellMark) -> &'static str {
    match mark {
        CellMark::Given => BOLD,
        CellMark::Unverified | CellMark::Incorrect => RED,
        CellMark::Correct => GREEN,
    }
}
