//! Command handling for the terminal front end.

use std::io;

use kaedoku_core::Position;
use kaedoku_game::GameSession;
use kaedoku_generator::{ClueRetention, PuzzleGenerator, PuzzleSeed};

use crate::render;

/// The interactive application: one live session plus transient feedback.
#[derive(Debug)]
pub(crate) struct App {
    generator: PuzzleGenerator<'static>,
    session: GameSession,
    notice: Option<String>,
}

impl App {
    /// Starts the app with a first puzzle.
    pub(crate) fn new(retention: ClueRetention, seed: Option<PuzzleSeed>) -> Self {
        let generator = PuzzleGenerator::new();
        let puzzle = match seed {
            Some(seed) => generator.generate_with_seed(retention, seed),
            None => generator.generate(retention),
        };
        log::debug!(
            "new game: seed={}, clues={retention}, givens={}",
            puzzle.seed,
            puzzle.problem.to_string().chars().filter(|c| *c != '.').count(),
        );
        Self {
            generator,
            session: GameSession::new(puzzle, retention),
            notice: None,
        }
    }

    /// Renders the board, timer, status, and any notice.
    pub(crate) fn render(&self, out: &mut impl io::Write) -> io::Result<()> {
        render::draw(out, &self.session, self.notice.as_deref())
    }

    /// Handles one input line. Returns `true` when the app should exit.
    pub(crate) fn handle_line(&mut self, line: &str) -> bool {
        self.notice = None;
        let mut words = line.split_whitespace();
        match words.next() {
            None | Some("show") => {}
            Some("new") => self.new_game(words.next()),
            Some("set") => self.set(words.next(), words.next(), words.next()),
            Some("clear") => self.clear(words.next(), words.next()),
            Some("finish") => self.finish(),
            Some("quit" | "exit") => return true,
            Some(other) => {
                self.notice = Some(format!(
                    "unknown command {other:?}; try: new, set, clear, show, finish, quit"
                ));
            }
        }
        false
    }

    fn new_game(&mut self, clues: Option<&str>) {
        // Raw difficulty input is corrected, never rejected.
        let retention = clues.map_or(self.session.clue_retention(), ClueRetention::parse_lossy);
        let puzzle = self.generator.generate(retention);
        log::debug!("new game: seed={}, clues={retention}", puzzle.seed);
        self.session = GameSession::new(puzzle, retention);
    }

    fn set(&mut self, row: Option<&str>, col: Option<&str>, value: Option<&str>) {
        let Some(value) = value else {
            self.notice = Some("usage: set <row> <col> <digit>".to_owned());
            return;
        };
        if let Some(pos) = parse_position(row, col) {
            self.edit(pos, value);
        } else {
            self.notice = Some("row and column must be 0-8".to_owned());
        }
    }

    fn clear(&mut self, row: Option<&str>, col: Option<&str>) {
        if let Some(pos) = parse_position(row, col) {
            self.edit(pos, "");
        } else {
            self.notice = Some("usage: clear <row> <col> (0-8 each)".to_owned());
        }
    }

    fn edit(&mut self, pos: Position, value: &str) {
        if let Err(err) = self.session.set_cell(pos, value) {
            self.notice = Some(err.to_string());
        }
    }

    fn finish(&mut self) {
        let score = self.session.finish();
        log::info!(
            "finished: solved={}, elapsed={:?}, correct_cells={}",
            score.solved,
            score.elapsed,
            score.correctness.iter().filter(|&&c| c).count(),
        );
    }
}

fn parse_position(row: Option<&str>, col: Option<&str>) -> Option<Position> {
    let row = row?.parse().ok()?;
    let col = col?.parse().ok()?;
    Position::try_from_row_col(row, col)
}
