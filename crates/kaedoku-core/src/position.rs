//! Board position (x, y) coordinates.

use std::fmt::{self, Display};

/// A cell position on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Out-of-range coordinates are rejected at construction.
///
/// # Examples
///
/// ```
/// use kaedoku_core::Position;
///
/// let pos = Position::new(4, 4);
/// assert_eq!(pos.index(), 40); // row-major: 4 * 9 + 4
/// assert_eq!(pos.box_index(), 4); // center box
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order (left to right, top to bottom).
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i: u8 = 0;
        while i < 81 {
            all[i as usize] = Self { x: i % 9, y: i / 9 };
            i += 1;
        }
        all
    };

    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 9 or greater.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position coordinates must be 0-8");
        Self { x, y }
    }

    /// Creates a position from row and column, or `None` if out of range.
    #[must_use]
    pub const fn try_from_row_col(row: u8, col: u8) -> Option<Self> {
        if row < 9 && col < 9 {
            Some(Self { x: col, y: row })
        } else {
            None
        }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index (0-80) of this position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index (0-8) of the 3x3 box containing this position,
    /// counted left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
