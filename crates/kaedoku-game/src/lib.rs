//! Game session state for Kaedoku.
//!
//! A [`GameSession`] owns everything one puzzle lifecycle needs: the cell
//! states derived from a generated puzzle, the solution it will be scored
//! against, per-cell display marks, a wall-clock timer, and a status
//! message. The session is render-agnostic; the front end pulls state and
//! pushes edits.
//!
//! # Examples
//!
//! ```
//! use kaedoku_game::GameSession;
//! use kaedoku_generator::{ClueRetention, PuzzleGenerator};
//!
//! let retention = ClueRetention::new(1.0);
//! let puzzle = PuzzleGenerator::new().generate(retention);
//! let mut session = GameSession::new(puzzle, retention);
//!
//! // All cells are givens at retention 1.0, so an immediate finish wins.
//! let score = session.finish();
//! assert!(score.solved);
//! ```

pub mod cell;
pub mod clock;
pub mod error;
pub mod session;

pub use self::{
    cell::{CellMark, CellState},
    clock::{GameClock, format_mm_ss},
    error::GameError,
    session::{GameSession, ScoreResult, SessionPhase},
};
