//! Relabel-and-blank puzzle generation.

use kaedoku_core::{DigitGrid, Position};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::{ClueRetention, DigitPermutation, solved_template};

/// Seed for reproducible puzzle generation.
///
/// Two generations with the same seed and retention produce identical
/// puzzles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::FromStr,
)]
pub struct PuzzleSeed(u64);

impl PuzzleSeed {
    /// Creates a seed from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// A generated puzzle: the board shown to the player and its solution.
///
/// Every non-empty `problem` cell is a given clue and equals the
/// corresponding `solution` cell; empty `problem` cells are for the player
/// to fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The board with some cells blanked, as presented to the player.
    pub problem: DigitGrid,
    /// The complete relabeled solution the submission is scored against.
    pub solution: DigitGrid,
    /// The seed this puzzle was generated from.
    pub seed: PuzzleSeed,
}

/// The supplied template board is not a valid completed solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("template board is not a valid completed Sudoku solution")]
pub struct TemplateError;

/// Generates puzzles by relabeling a solved template and blanking cells.
///
/// The generator never solves anything: the solution is the template under
/// a random digit permutation, and the problem is the solution with each
/// cell independently blanked with probability `1 - retention`.
///
/// # Examples
///
/// ```
/// use kaedoku_generator::{ClueRetention, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let seed = PuzzleSeed::new(42);
/// let puzzle = generator.generate_with_seed(ClueRetention::new(0.7), seed);
/// let again = generator.generate_with_seed(ClueRetention::new(0.7), seed);
/// assert_eq!(puzzle, again);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    template: &'a DigitGrid,
}

impl PuzzleGenerator<'static> {
    /// Creates a generator over the built-in solved template.
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: solved_template(),
        }
    }
}

impl Default for PuzzleGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator over a caller-supplied solved board.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if `template` is not a valid completed
    /// solution; relabeling anything else would not yield a solvable
    /// puzzle.
    pub fn with_template(template: &'a DigitGrid) -> Result<Self, TemplateError> {
        if !template.is_valid_solution() {
            return Err(TemplateError);
        }
        Ok(Self { template })
    }

    /// Generates a puzzle from a freshly drawn random seed.
    #[must_use]
    pub fn generate(&self, retention: ClueRetention) -> GeneratedPuzzle {
        self.generate_with_seed(retention, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The permutation is drawn first, then one uniform draw per cell in
    /// row-major order decides whether the cell stays a given (draw not
    /// exceeding the retention value) or is blanked.
    #[must_use]
    pub fn generate_with_seed(
        &self,
        retention: ClueRetention,
        seed: PuzzleSeed,
    ) -> GeneratedPuzzle {
        let mut rng = Pcg64Mcg::seed_from_u64(seed.value());
        let permutation = DigitPermutation::random(&mut rng);

        let mut solution = DigitGrid::new();
        for pos in Position::ALL {
            solution[pos] = self.template.get(pos).map(|d| permutation.apply(d));
        }

        let mut problem = solution.clone();
        for pos in Position::ALL {
            if rng.random::<f64>() > retention.value() {
                problem[pos] = None;
            }
        }

        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}
