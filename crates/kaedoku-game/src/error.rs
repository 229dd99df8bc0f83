//! Game session errors.
//!
//! Every error here is recoverable by design: the session reverts or
//! ignores the offending edit and the front end may surface the message as
//! a status line. Nothing in the game core aborts.

/// Errors from player edits.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The raw edit value was not a single digit 1-9 and not empty.
    ///
    /// The cell keeps its previous value.
    #[display("invalid input {input:?}: enter a single digit 1-9, or clear the cell")]
    InvalidCellInput {
        /// The rejected raw input.
        input: String,
    },
    /// The targeted cell is a given clue; givens are immutable.
    #[display("given cells cannot be edited")]
    CannotModifyGivenCell,
}
