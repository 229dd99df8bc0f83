//! Per-cell state and display annotations.

use kaedoku_core::Digit;

/// The state of a single cell in a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// A clue revealed at generation time. Not player-editable.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
    /// A blank cell.
    Empty,
}

impl CellState {
    /// Returns the digit held by the cell, if any.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}

/// Display annotation for a cell, driving the front end's colors.
///
/// Givens render in the fixed style, pending player input is highlighted,
/// and scoring rewrites every mark to correct or incorrect. The session
/// tracks the classification; the front end picks the colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellMark {
    /// A given clue; always rendered in the fixed style.
    Given,
    /// Player-entered or blank, not yet scored.
    Unverified,
    /// Matched the solution at the last finish.
    Correct,
    /// Differed from the solution at the last finish.
    Incorrect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_digit() {
        assert_eq!(CellState::Given(Digit::D4).as_digit(), Some(Digit::D4));
        assert_eq!(CellState::Filled(Digit::D9).as_digit(), Some(Digit::D9));
        assert_eq!(CellState::Empty.as_digit(), None);
    }

    #[test]
    fn test_is_variant_helpers() {
        assert!(CellState::Given(Digit::D1).is_given());
        assert!(CellState::Empty.is_empty());
        assert!(CellMark::Unverified.is_unverified());
        assert!(!CellMark::Given.is_incorrect());
    }
}
