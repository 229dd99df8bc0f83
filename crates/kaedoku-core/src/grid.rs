//! A 9x9 grid of optional digits.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Digit, DigitSet, Position};

/// A 9x9 board of optional digits, indexed by [`Position`].
///
/// Cells are stored in row-major order. The textual notation used by
/// [`Display`] and [`FromStr`] is 81 characters, one per cell in row-major
/// order, with `.` for an empty cell.
///
/// # Examples
///
/// ```
/// use kaedoku_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = format!("5{}", ".".repeat(80)).parse().unwrap();
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(1, 0)], None);
/// assert!(!grid.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates a grid with all cells empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the cell at `pos`.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns whether every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns whether this grid is a valid, completed Sudoku solution:
    /// every row, column, and 3x3 box contains each digit 1-9 exactly once.
    ///
    /// Incomplete grids are never valid solutions.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        let mut rows = [DigitSet::EMPTY; 9];
        let mut columns = [DigitSet::EMPTY; 9];
        let mut boxes = [DigitSet::EMPTY; 9];
        for pos in Position::ALL {
            let Some(digit) = self.get(pos) else {
                return false;
            };
            // insert() returning false means a duplicate in that house
            if !rows[pos.y() as usize].insert(digit)
                || !columns[pos.x() as usize].insert(digit)
                || !boxes[pos.box_index() as usize].insert(digit)
            {
                return false;
            }
        }
        true
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// Errors produced when parsing the 81-character grid notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input was not exactly 81 characters long.
    #[display("expected 81 characters, got {len}")]
    BadLength {
        /// Actual character count of the input.
        len: usize,
    },
    /// A character other than `1`-`9` or `.` appeared.
    #[display("invalid character {c:?} at cell index {index}")]
    BadCharacter {
        /// The offending character.
        c: char,
        /// Row-major cell index (0-80) where it appeared.
        index: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(GridParseError::BadLength { len });
        }
        let mut grid = Self::new();
        for (index, c) in s.chars().enumerate() {
            grid.cells[index] = match c {
                '.' => None,
                _ => Some(
                    Digit::try_from_char(c).ok_or(GridParseError::BadCharacter { c, index })?,
                ),
            };
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SOLVED: &str =
        "123456789456789123789123456231897564564231897897564231312645978645978312978312645";

    #[test]
    fn test_get_set_index_agree() {
        let mut grid = DigitGrid::new();
        let pos = Position::new(3, 7);
        grid.set(pos, Some(Digit::D8));
        assert_eq!(grid.get(pos), Some(Digit::D8));
        assert_eq!(grid[pos], Some(Digit::D8));
        grid[pos] = None;
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn test_parse_and_display() {
        let grid: DigitGrid = SOLVED.parse().unwrap();
        assert_eq!(grid.to_string(), SOLVED);
        assert_eq!(grid[Position::new(0, 0)], Some(Digit::D1));
        assert_eq!(grid[Position::new(8, 8)], Some(Digit::D5));

        let empty: DigitGrid = ".".repeat(81).parse().unwrap();
        assert_eq!(empty, DigitGrid::new());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(GridParseError::BadLength { len: 3 })
        );
        let bad = format!("0{}", ".".repeat(80));
        assert_eq!(
            bad.parse::<DigitGrid>(),
            Err(GridParseError::BadCharacter { c: '0', index: 0 })
        );
    }

    #[test]
    fn test_valid_solution() {
        let grid: DigitGrid = SOLVED.parse().unwrap();
        assert!(grid.is_complete());
        assert!(grid.is_valid_solution());
    }

    #[test]
    fn test_incomplete_grid_is_not_a_solution() {
        let mut grid: DigitGrid = SOLVED.parse().unwrap();
        grid[Position::new(4, 4)] = None;
        assert!(!grid.is_complete());
        assert!(!grid.is_valid_solution());
    }

    #[test]
    fn test_duplicate_in_house_is_not_a_solution() {
        let mut grid: DigitGrid = SOLVED.parse().unwrap();
        // Copy a digit onto a different cell of the same row.
        let digit = grid[Position::new(0, 0)];
        grid[Position::new(1, 0)] = digit;
        assert!(grid.is_complete());
        assert!(!grid.is_valid_solution());
    }

    proptest! {
        #[test]
        fn prop_parse_rejects_wrong_length(s in "[1-9.]{0,80}") {
            let len = s.chars().count();
            prop_assert_eq!(
                s.parse::<DigitGrid>(),
                Err(GridParseError::BadLength { len })
            );
        }

        #[test]
        fn prop_overwriting_a_solved_cell_breaks_validity(
            index in 0usize..81,
            offset in 1u8..9,
        ) {
            let mut grid: DigitGrid = SOLVED.parse().unwrap();
            let pos = Position::ALL[index];
            let old = grid[pos].unwrap();
            let new = Digit::from_value((old.value() - 1 + offset) % 9 + 1);
            grid[pos] = Some(new);
            prop_assert!(!grid.is_valid_solution());
        }
    }
}
