//! Core board vocabulary for the Kaedoku game.
//!
//! This crate provides the small set of types shared by puzzle generation,
//! game state tracking, and the front end:
//!
//! - [`Digit`]: type-safe Sudoku digits 1-9
//! - [`Position`]: (x, y) board coordinates on the 9x9 grid
//! - [`DigitSet`]: a 9-bit set of digits, used for validity checks
//! - [`DigitGrid`]: 81 optional digits with a textual 81-character notation
//!
//! # Examples
//!
//! ```
//! use kaedoku_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid[Position::new(4, 4)] = Some(Digit::D5);
//! assert_eq!(grid[Position::new(4, 4)], Some(Digit::D5));
//! assert!(!grid.is_complete());
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, GridParseError},
    position::Position,
};
