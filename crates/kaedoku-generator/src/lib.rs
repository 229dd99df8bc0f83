//! Puzzle generation by digit relabeling.
//!
//! Kaedoku does not generate solved boards from scratch. Instead, one fixed
//! solved board (the [`template`]) is relabeled with a random
//! [`DigitPermutation`], which preserves Sudoku validity, and then each cell
//! is independently kept as a given or blanked according to a
//! [`ClueRetention`] probability.
//!
//! # Examples
//!
//! ```
//! use kaedoku_generator::{ClueRetention, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(ClueRetention::new(0.7));
//! assert!(puzzle.solution.is_valid_solution());
//! ```

pub mod generator;
pub mod permutation;
pub mod retention;
pub mod template;

pub use self::{
    generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed, TemplateError},
    permutation::DigitPermutation,
    retention::ClueRetention,
    template::solved_template,
};
