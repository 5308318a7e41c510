//! Letter sets packed into a single integer.
//!
//! Every word in the lexicon and every candidate puzzle is reduced to the set
//! of letters it uses. Bit `i` stands for the `i`-th letter of the alphabet,
//! so subset and intersection tests become one or two integer operations.

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use crate::error::SpellingBeeError;

/// Number of letters in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Map a lowercase ASCII letter to its index (`'a'` is 0).
pub fn letter_index(c: char) -> Option<u8> {
    if c.is_ascii_lowercase() {
        Some(c as u8 - b'a')
    } else {
        None
    }
}

/// Map a letter index back to its character.
pub fn letter_char(index: u8) -> char {
    debug_assert!((index as usize) < ALPHABET_SIZE);
    (b'a' + index) as char
}

/// A set of letters, one bit per letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    /// Every letter from `a` to `z`.
    pub const ALPHABET: Self = Self((1 << ALPHABET_SIZE) - 1);

    pub fn single(index: u8) -> Self {
        debug_assert!((index as usize) < ALPHABET_SIZE);
        Self(1 << index)
    }

    /// Fingerprint of a word: the letters it uses, repeats collapsed.
    ///
    /// Returns `None` if the word contains anything other than `a`-`z`.
    pub fn from_word(word: &str) -> Option<Self> {
        let mut set = Self::EMPTY;
        for c in word.chars() {
            set.insert(letter_index(c)?);
        }
        Some(set)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Add a letter, returning `true` if it was not already present.
    pub fn insert(&mut self, index: u8) -> bool {
        let bit = Self::single(index).0;
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    pub fn contains(self, index: u8) -> bool {
        self.intersects(Self::single(index))
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True when every letter of `self` is also in `other`.
    pub fn is_subset_of(self, other: Self) -> bool {
        other.union(self) == other
    }

    /// Number of letters in the set.
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letter indices in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE as u8).filter(move |&i| self.contains(i))
    }

    pub fn chars(self) -> impl Iterator<Item = char> {
        self.iter().map(letter_char)
    }
}

impl BitOr for LetterSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for index in iter {
            set.insert(index);
        }
        set
    }
}

impl FromStr for LetterSet {
    type Err = SpellingBeeError;

    /// Parse a run of letters such as `"abcdelnort"`. Duplicates are allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_word(s).ok_or_else(|| SpellingBeeError::InvalidLetters(s.to_string()))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_new_letters_only() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.insert(25));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn alphabet_has_every_letter() {
        assert_eq!(LetterSet::ALPHABET.len(), 26);
        assert_eq!(
            LetterSet::ALPHABET.to_string(),
            "abcdefghijklmnopqrstuvwxyz"
        );
    }
}
