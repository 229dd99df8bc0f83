//! Random bijective relabeling of digits 1-9.

use kaedoku_core::{Digit, DigitSet};
use rand::{Rng, seq::SliceRandom as _};

/// A bijection from digits 1-9 to digits 1-9.
///
/// Applying a permutation to every cell of a valid Sudoku solution yields
/// another valid solution, which is how Kaedoku derives a fresh-looking
/// board from its fixed template each game.
///
/// The mapping is stored as an image table: digit `d` maps to the `d`-th
/// entry (1-indexed) of the table, mirroring a shuffled `[1..9]` sequence.
///
/// # Examples
///
/// ```
/// use kaedoku_core::Digit;
/// use kaedoku_generator::DigitPermutation;
///
/// let permutation = DigitPermutation::random(&mut rand::rng());
///
/// // Bijective: images of all nine digits are all nine digits.
/// let mut images: Vec<_> = Digit::ALL.map(|d| permutation.apply(d)).to_vec();
/// images.sort();
/// assert_eq!(images, Digit::ALL.to_vec());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitPermutation {
    images: [Digit; 9],
}

impl DigitPermutation {
    /// The identity permutation: every digit maps to itself.
    pub const IDENTITY: Self = Self { images: Digit::ALL };

    /// Creates a permutation from an image table, where `images[i]` is the
    /// image of the digit with value `i + 1`.
    ///
    /// Returns `None` if the table is not a bijection (some digit appears
    /// twice as an image).
    #[must_use]
    pub fn from_images(images: [Digit; 9]) -> Option<Self> {
        let covered: DigitSet = images.into_iter().collect();
        (covered == DigitSet::FULL).then_some(Self { images })
    }

    /// Draws a uniformly random permutation by shuffling `[1..9]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut images = Digit::ALL;
        images.shuffle(rng);
        Self { images }
    }

    /// Applies the permutation to a digit.
    #[must_use]
    pub const fn apply(&self, digit: Digit) -> Digit {
        self.images[digit.index()]
    }
}
