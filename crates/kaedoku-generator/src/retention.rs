//! Clue retention probability.

use std::fmt::{self, Display};

/// Per-cell probability that a cell is kept as a given clue.
///
/// Higher values keep more clues and so produce an easier puzzle; 1.0 keeps
/// every cell, 0.0 blanks every cell. This is sometimes labelled
/// "difficulty" in Sudoku tools, but it is a keep probability, so it is
/// named for what it does.
///
/// There is no error path: out-of-range values are clamped into
/// `[0.0, 1.0]` and unparseable input falls back to [`ClueRetention::DEFAULT`].
///
/// # Examples
///
/// ```
/// use kaedoku_generator::ClueRetention;
///
/// assert_eq!(ClueRetention::new(1.5).value(), 1.0);
/// assert_eq!(ClueRetention::new(-3.0).value(), 0.0);
/// assert_eq!(ClueRetention::parse_lossy("abc"), ClueRetention::DEFAULT);
/// assert_eq!(ClueRetention::parse_lossy("0.25").value(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClueRetention {
    value: f64,
}

impl ClueRetention {
    /// The fallback used when the raw input is not a number: 0.7.
    pub const DEFAULT: Self = Self { value: 0.7 };

    /// Creates a retention probability, clamping into `[0.0, 1.0]`.
    ///
    /// `NaN` is treated like unparseable input and becomes the default.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::DEFAULT;
        }
        Self {
            value: value.clamp(0.0, 1.0),
        }
    }

    /// Parses a raw user-supplied string.
    ///
    /// Numeric input is clamped; anything else yields the default. This
    /// never fails: malformed difficulty input is corrected, not rejected.
    #[must_use]
    pub fn parse_lossy(raw: &str) -> Self {
        raw.trim().parse().map_or(Self::DEFAULT, Self::new)
    }

    /// Returns the probability as a float in `[0.0, 1.0]`.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }
}

impl Default for ClueRetention {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for ClueRetention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}
