//! A set of digits 1-9, backed by a 9-bit bitset.

use crate::Digit;

/// A set of [`Digit`]s represented as a bitset.
///
/// Bits 0-8 of a `u16` represent digits 1-9 respectively. The main consumer
/// is Sudoku-validity checking, where each row, column, and box must
/// accumulate to the full set.
///
/// # Examples
///
/// ```
/// use kaedoku_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::new();
/// set.insert(Digit::D1);
/// set.insert(Digit::D5);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Digit::D5));
/// assert!(!set.contains(Digit::D9));
///
/// let full: DigitSet = Digit::ALL.into_iter().collect();
/// assert_eq!(full, DigitSet::FULL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };
    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a digit. Returns `true` if the digit was not already present.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let bit = Self::bit(digit);
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Removes a digit. Returns `true` if the digit was present.
    pub fn remove(&mut self, digit: Digit) -> bool {
        let bit = Self::bit(digit);
        let removed = self.bits & bit != 0;
        self.bits &= !bit;
        removed
    }

    /// Returns whether the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterates over the digits in the set in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    const fn bit(digit: Digit) -> u16 {
        1 << digit.index()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        assert!(set.is_empty());

        assert!(set.insert(Digit::D3));
        assert!(!set.insert(Digit::D3));
        assert!(set.contains(Digit::D3));
        assert_eq!(set.len(), 1);

        assert!(set.remove(Digit::D3));
        assert!(!set.remove(Digit::D3));
        assert!(set.is_empty());
    }

    #[test]
    fn test_full_contains_all_digits() {
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_iter_ascending() {
        let set: DigitSet = [Digit::D9, Digit::D1, Digit::D4].into_iter().collect();
        let digits: Vec<_> = set.iter().collect();
        assert_eq!(digits, vec![Digit::D1, Digit::D4, Digit::D9]);
    }

    #[test]
    fn test_accumulating_all_digits_reaches_full() {
        let mut set = DigitSet::new();
        for digit in Digit::ALL {
            set.insert(digit);
        }
        assert_eq!(set, DigitSet::FULL);
    }
}
