//! "Choose k of n" enumeration and the 7-letter combinations built from it.

use crate::letters::{letter_char, LetterSet, ALPHABET_SIZE};
use crate::scoring::PUZZLE_SIZE;

/// Number of ways to choose `k` items out of `n`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u64, |acc, i| acc * (n - i) as u64 / (i as u64 + 1))
}

/// Iterator over all strictly increasing `K`-tuples drawn from `0..n`,
/// in lexicographic order.
///
/// Each combination is produced exactly once. A fixed prefix can be pinned
/// with [`Combinations::with_prefix`], which splits the full enumeration into
/// disjoint, ordered shards.
#[derive(Debug, Clone)]
pub struct Combinations<const K: usize> {
    n: usize,
    indices: [usize; K],
    pinned: usize,
    exhausted: bool,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        Self::with_prefix(n, &[])
    }

    /// Only the combinations whose leading positions equal `prefix`.
    ///
    /// `prefix` must be strictly increasing with values below `n`.
    pub fn with_prefix(n: usize, prefix: &[usize]) -> Self {
        debug_assert!(prefix.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(prefix.iter().all(|&i| i < n));

        let pinned = prefix.len();
        let mut indices = [0; K];
        let mut exhausted = pinned > K;
        if !exhausted {
            indices[..pinned].copy_from_slice(prefix);
            let start = prefix.last().map_or(0, |&last| last + 1);
            for (offset, slot) in indices[pinned..].iter_mut().enumerate() {
                *slot = start + offset;
            }
            exhausted = start + (K - pinned) > n;
        }

        Self {
            n,
            indices,
            pinned,
            exhausted,
        }
    }

    /// Step to the next combination, leaving pinned positions alone.
    fn advance(&mut self) {
        let mut pos = K;
        while pos > self.pinned {
            pos -= 1;
            let ceiling = self.n - K + pos;
            if self.indices[pos] < ceiling {
                self.indices[pos] += 1;
                for next in pos + 1..K {
                    self.indices[next] = self.indices[next - 1] + 1;
                }
                return;
            }
        }
        self.exhausted = true;
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.indices;
        self.advance();
        Some(current)
    }
}

/// Seven distinct letters, stored in ascending order with their mask.
///
/// Only constructed from a letter list, so the indices and the mask always
/// describe the same set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterCombination {
    letters: [u8; PUZZLE_SIZE],
    mask: LetterSet,
}

impl LetterCombination {
    /// Build from seven letter indices. Returns `None` unless they are
    /// strictly increasing and inside the alphabet.
    pub fn from_letters(letters: [u8; PUZZLE_SIZE]) -> Option<Self> {
        if !letters.windows(2).all(|w| w[0] < w[1])
            || letters[PUZZLE_SIZE - 1] as usize >= ALPHABET_SIZE
        {
            return None;
        }
        Some(Self::from_sorted(letters))
    }

    pub(crate) fn from_sorted(letters: [u8; PUZZLE_SIZE]) -> Self {
        debug_assert!(letters.windows(2).all(|w| w[0] < w[1]));
        Self {
            letters,
            mask: letters.iter().copied().collect(),
        }
    }

    /// Build from a string of seven distinct letters in any order.
    pub fn parse(s: &str) -> Option<Self> {
        let set = LetterSet::from_word(s)?;
        let letters: Vec<u8> = set.iter().collect();
        Self::from_letters(letters.try_into().ok()?)
    }

    pub fn letters(&self) -> [u8; PUZZLE_SIZE] {
        self.letters
    }

    pub fn mask(&self) -> LetterSet {
        self.mask
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.mask.contains(letter)
    }

    pub fn chars(&self) -> [char; PUZZLE_SIZE] {
        self.letters.map(letter_char)
    }
}
