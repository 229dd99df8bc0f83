//! One puzzle lifecycle from generation to scoring.

use std::time::Duration;

use kaedoku_core::{Digit, DigitGrid, Position};
use kaedoku_generator::{ClueRetention, GeneratedPuzzle, PuzzleSeed};

use crate::{CellMark, CellState, GameClock, GameError, format_mm_ss};

/// Lifecycle phase of a session.
///
/// A session is created `Running`; [`GameSession::finish`] moves it to
/// `Stopped`. `Stopped` is only left by starting a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionPhase {
    /// The puzzle is being played and the clock is live.
    Running,
    /// The submission has been scored and the clock is frozen.
    Stopped,
}

/// The outcome of scoring a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    /// Whether all 81 cells matched the solution.
    pub solved: bool,
    /// Elapsed play time, frozen at the first finish.
    pub elapsed: Duration,
    /// Per-cell match against the solution, row-major.
    pub correctness: [bool; 81],
}

impl ScoreResult {
    /// Returns whether the cell at `pos` matched the solution.
    #[must_use]
    pub fn is_correct(&self, pos: Position) -> bool {
        self.correctness[pos.index()]
    }
}

/// A single game session.
///
/// Holds the cell states derived from a [`GeneratedPuzzle`], the solution
/// grid used for scoring, per-cell [`CellMark`]s for display, the clue
/// retention the puzzle was generated with, a status message, and the
/// session clock. Starting a new game means building a new `GameSession`
/// and dropping the old one; sessions are never merged.
///
/// # Examples
///
/// ```
/// use kaedoku_core::Position;
/// use kaedoku_game::{CellState, GameSession};
/// use kaedoku_generator::{ClueRetention, PuzzleGenerator};
///
/// let retention = ClueRetention::new(0.0);
/// let puzzle = PuzzleGenerator::new().generate(retention);
/// let solution = puzzle.solution.clone();
/// let mut session = GameSession::new(puzzle, retention);
///
/// // Everything is blank at retention 0.0; fill one cell correctly.
/// let pos = Position::new(0, 0);
/// let digit = solution[pos].unwrap();
/// session.set_cell(pos, &digit.to_string()).unwrap();
/// assert_eq!(session.cell(pos), CellState::Filled(digit));
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    cells: [CellState; 81],
    marks: [CellMark; 81],
    solution: DigitGrid,
    retention: ClueRetention,
    seed: PuzzleSeed,
    clock: GameClock,
    phase: SessionPhase,
    status: String,
}

impl GameSession {
    const MSG_PLAYING: &'static str = "Fill the blank cells with digits 1-9.";
    const MSG_NOT_SOLVED: &'static str = "Not solved yet. Check the highlighted cells.";

    /// Starts a session from a generated puzzle.
    ///
    /// Non-empty problem cells become immutable givens marked
    /// [`CellMark::Given`]; blanks start [`CellMark::Unverified`]. The
    /// clock starts at zero and the phase is [`SessionPhase::Running`].
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle, retention: ClueRetention) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed,
        } = puzzle;
        let mut cells = [CellState::Empty; 81];
        let mut marks = [CellMark::Unverified; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                cells[pos.index()] = CellState::Given(digit);
                marks[pos.index()] = CellMark::Given;
            }
        }
        Self {
            cells,
            marks,
            solution,
            retention,
            seed,
            clock: GameClock::start(),
            phase: SessionPhase::Running,
            status: Self::MSG_PLAYING.to_owned(),
        }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns the display mark of the cell at `pos`.
    #[must_use]
    pub fn mark(&self, pos: Position) -> CellMark {
        self.marks[pos.index()]
    }

    /// Returns the solution grid this session is scored against.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the clue retention the puzzle was generated with.
    #[must_use]
    pub fn clue_retention(&self) -> ClueRetention {
        self.retention
    }

    /// Returns the seed the puzzle was generated from.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns the current status message.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the elapsed play time.
    ///
    /// Recomputed from the start timestamp on every call while running;
    /// frozen once the session is finished.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// Returns the number of given clues on the board.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_given()).count()
    }

    /// Applies a raw player edit to the cell at `pos`.
    ///
    /// A single character `1`-`9` fills the cell; an empty (or
    /// whitespace-only) value clears it. Both reset the cell's mark to
    /// [`CellMark::Unverified`]. Edits are also accepted after a finish;
    /// a later [`GameSession::finish`] re-scores them.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] for given cells and
    /// [`GameError::InvalidCellInput`] for anything that is neither empty
    /// nor a single digit 1-9 (for example `"0"`, `"10"`, `"a"`). The cell
    /// keeps its previous value in both cases.
    pub fn set_cell(&mut self, pos: Position, raw: &str) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }

        let trimmed = raw.trim();
        let state = if trimmed.is_empty() {
            CellState::Empty
        } else {
            let mut chars = trimmed.chars();
            let digit = match (chars.next().and_then(Digit::try_from_char), chars.next()) {
                (Some(digit), None) => digit,
                _ => {
                    return Err(GameError::InvalidCellInput {
                        input: raw.to_owned(),
                    });
                }
            };
            CellState::Filled(digit)
        };

        self.cells[pos.index()] = state;
        self.marks[pos.index()] = CellMark::Unverified;
        Ok(())
    }

    /// Scores the board against the solution and stops the clock.
    ///
    /// Every one of the 81 cells is compared; a blank cell never matches
    /// the (complete) solution. Matching cells are marked
    /// [`CellMark::Correct`] (givens keep [`CellMark::Given`]), mismatches
    /// [`CellMark::Incorrect`]. The puzzle counts as solved only when all
    /// 81 cells match.
    ///
    /// Finishing an already-stopped session re-scores the current board
    /// but keeps the elapsed time frozen at the first finish.
    pub fn finish(&mut self) -> ScoreResult {
        let elapsed = self.clock.stop();
        self.phase = SessionPhase::Stopped;

        let mut correctness = [false; 81];
        for pos in Position::ALL {
            let matches = self.cell(pos).as_digit() == self.solution[pos];
            correctness[pos.index()] = matches;
            self.marks[pos.index()] = match (matches, self.cell(pos).is_given()) {
                (true, true) => CellMark::Given,
                (true, false) => CellMark::Correct,
                (false, _) => CellMark::Incorrect,
            };
        }

        let solved = correctness.iter().all(|&c| c);
        self.status = if solved {
            format!("Solved! Time: {}", format_mm_ss(elapsed))
        } else {
            Self::MSG_NOT_SOLVED.to_owned()
        };

        ScoreResult {
            solved,
            elapsed,
            correctness,
        }
    }
}

#[cfg(test)]
mod tests {
    use kaedoku_generator::{PuzzleGenerator, solved_template};

    use super::*;

    /// A puzzle over the built-in template with the listed cells blanked.
    fn puzzle_with_blanks(blanks: &[Position]) -> GeneratedPuzzle {
        let solution = solved_template().clone();
        let mut problem = solution.clone();
        for &pos in blanks {
            problem[pos] = None;
        }
        GeneratedPuzzle {
            problem,
            solution,
            seed: PuzzleSeed::new(0),
        }
    }

    fn session_with_blanks(blanks: &[Position]) -> GameSession {
        GameSession::new(puzzle_with_blanks(blanks), ClueRetention::DEFAULT)
    }

    #[test]
    fn test_new_session_partitions_givens_and_blanks() {
        let blank = Position::new(3, 5);
        let session = session_with_blanks(&[blank]);

        assert!(session.phase().is_running());
        assert_eq!(session.given_count(), 80);
        assert_eq!(session.status(), GameSession::MSG_PLAYING);
        for pos in Position::ALL {
            if pos == blank {
                assert_eq!(session.cell(pos), CellState::Empty);
                assert_eq!(session.mark(pos), CellMark::Unverified);
            } else {
                assert_eq!(session.cell(pos).as_digit(), session.solution()[pos]);
                assert_eq!(session.mark(pos), CellMark::Given);
            }
        }
    }

    #[test]
    fn test_trivial_win_at_full_retention() {
        let retention = ClueRetention::new(1.0);
        let puzzle = PuzzleGenerator::new().generate(retention);
        let mut session = GameSession::new(puzzle, retention);

        let score = session.finish();
        assert!(score.solved);
        assert!(score.elapsed < Duration::from_secs(1));
        assert!(session.phase().is_stopped());
        for pos in Position::ALL {
            assert!(score.is_correct(pos));
            assert_eq!(session.mark(pos), CellMark::Given);
        }
    }

    #[test]
    fn test_guaranteed_loss_at_zero_retention() {
        let retention = ClueRetention::new(0.0);
        let puzzle = PuzzleGenerator::new().generate(retention);
        let mut session = GameSession::new(puzzle, retention);

        let score = session.finish();
        assert!(!score.solved);
        assert_eq!(session.status(), GameSession::MSG_NOT_SOLVED);
        // All 81 cells are blank, so all mismatch the complete solution.
        for pos in Position::ALL {
            assert!(!score.is_correct(pos));
            assert_eq!(session.mark(pos), CellMark::Incorrect);
        }
    }

    #[test]
    fn test_correct_single_fill_solves() {
        let blank = Position::new(7, 2);
        let mut session = session_with_blanks(&[blank]);
        let digit = session.solution()[blank].unwrap();

        session.set_cell(blank, &digit.to_string()).unwrap();
        let score = session.finish();
        assert!(score.solved);
        assert_eq!(session.mark(blank), CellMark::Correct);
        assert!(session.status().starts_with("Solved!"));
    }

    #[test]
    fn test_wrong_fill_is_flagged_alone() {
        let blank = Position::new(0, 0);
        let mut session = session_with_blanks(&[blank]);
        let correct = session.solution()[blank].unwrap();
        let wrong = Digit::ALL
            .into_iter()
            .find(|d| *d != correct)
            .unwrap();

        session.set_cell(blank, &wrong.to_string()).unwrap();
        let score = session.finish();
        assert!(!score.solved);
        assert!(!score.is_correct(blank));
        assert_eq!(session.mark(blank), CellMark::Incorrect);
        for pos in Position::ALL.into_iter().filter(|p| *p != blank) {
            assert!(score.is_correct(pos));
        }
    }

    #[test]
    fn test_invalid_input_leaves_cell_unchanged() {
        let blank = Position::new(4, 4);
        let mut session = session_with_blanks(&[blank]);
        session.set_cell(blank, "5").unwrap();

        for raw in ["0", "10", "a", "xy", "5 5"] {
            let err = session.set_cell(blank, raw).unwrap_err();
            assert_eq!(
                err,
                GameError::InvalidCellInput {
                    input: raw.to_owned()
                }
            );
            assert_eq!(session.cell(blank), CellState::Filled(Digit::D5));
        }
    }

    #[test]
    fn test_empty_input_clears_cell() {
        let blank = Position::new(1, 1);
        let mut session = session_with_blanks(&[blank]);
        session.set_cell(blank, "7").unwrap();
        assert_eq!(session.cell(blank), CellState::Filled(Digit::D7));

        session.set_cell(blank, "").unwrap();
        assert_eq!(session.cell(blank), CellState::Empty);
        assert_eq!(session.mark(blank), CellMark::Unverified);

        // Whitespace-only input also clears, like trimmed empty input.
        session.set_cell(blank, "3").unwrap();
        session.set_cell(blank, "  ").unwrap();
        assert_eq!(session.cell(blank), CellState::Empty);
    }

    #[test]
    fn test_given_cells_are_immutable() {
        let mut session = session_with_blanks(&[]);
        let pos = Position::new(2, 6);
        let before = session.cell(pos);

        assert_eq!(
            session.set_cell(pos, "1"),
            Err(GameError::CannotModifyGivenCell)
        );
        assert_eq!(
            session.set_cell(pos, ""),
            Err(GameError::CannotModifyGivenCell)
        );
        assert_eq!(session.cell(pos), before);
    }

    #[test]
    fn test_finish_is_idempotent() {
        let blank = Position::new(6, 3);
        let mut session = session_with_blanks(&[blank]);

        let first = session.finish();
        let second = session.finish();
        assert_eq!(first.correctness, second.correctness);
        assert_eq!(first.elapsed, second.elapsed);
        assert_eq!(first.solved, second.solved);
    }

    #[test]
    fn test_edits_after_finish_are_rescored() {
        let blank = Position::new(8, 8);
        let mut session = session_with_blanks(&[blank]);

        let first = session.finish();
        assert!(!first.solved);
        assert!(session.phase().is_stopped());

        // Stopped sessions still accept edits; the clock stays frozen.
        let digit = session.solution()[blank].unwrap();
        session.set_cell(blank, &digit.to_string()).unwrap();
        assert_eq!(session.mark(blank), CellMark::Unverified);

        let second = session.finish();
        assert!(second.solved);
        assert_eq!(second.elapsed, first.elapsed);
    }
}
