//! Scoring of a single (combination, center) trial.
//!
//! A word counts when it contains the center letter and uses no letter
//! outside the combination. Four-letter words are worth 1 point, longer words
//! one point per letter, and a pangram earns a further bonus. A trial with no
//! pangram among its words is not a valid puzzle.

use crate::combinations::LetterCombination;
use crate::letters::{letter_char, LetterSet};
use crate::lexicon::Entry;

/// Letters in a puzzle
pub const PUZZLE_SIZE: usize = 7;

/// Shortest scoring word; words of this length earn a single point
pub const MIN_WORD_LEN: usize = 4;

/// Bonus for a word using every letter of the combination
pub const PANGRAM_BONUS: u32 = 7;

/// Score of a trial without any pangram
pub const INVALID_SCORE: i32 = -1;

/// Points for one word, or `None` if it does not qualify.
///
/// Returns the points and whether the word is a pangram.
#[inline]
pub fn word_points(entry: &Entry, mask: LetterSet, center: LetterSet) -> Option<(u32, bool)> {
    let fingerprint = entry.fingerprint();
    if !fingerprint.intersects(center) || !fingerprint.is_subset_of(mask) {
        return None;
    }

    let mut points = match entry.len() {
        MIN_WORD_LEN => 1,
        len => len as u32,
    };
    let pangram = fingerprint == mask;
    if pangram {
        points += PANGRAM_BONUS;
    }
    Some((points, pangram))
}

/// Score of a trial, without collecting the matching words.
pub fn trial_score<'a, I>(entries: I, combination: &LetterCombination, center: u8) -> i32
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mask = combination.mask();
    let center = LetterSet::single(center);
    let mut score = 0u32;
    let mut had_pangram = false;
    for entry in entries {
        if let Some((points, pangram)) = word_points(entry, mask, center) {
            score += points;
            had_pangram |= pangram;
        }
    }
    if had_pangram {
        score as i32
    } else {
        INVALID_SCORE
    }
}

/// One combination tried with one center letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial<'a> {
    combination: LetterCombination,
    center: u8,
    score: i32,
    matched_words: Vec<&'a Entry>,
}

impl<'a> Trial<'a> {
    /// Score `entries` against the combination and center.
    ///
    /// `center` must be one of the combination's letters.
    pub fn evaluate<I>(entries: I, combination: LetterCombination, center: u8) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        debug_assert!(combination.contains(center));

        let mask = combination.mask();
        let center_mask = LetterSet::single(center);
        let mut score = 0u32;
        let mut had_pangram = false;
        let mut matched_words = Vec::new();
        for entry in entries {
            if let Some((points, pangram)) = word_points(entry, mask, center_mask) {
                matched_words.push(entry);
                score += points;
                had_pangram |= pangram;
            }
        }

        Self {
            combination,
            center,
            score: if had_pangram { score as i32 } else { INVALID_SCORE },
            matched_words,
        }
    }

    pub fn combination(&self) -> LetterCombination {
        self.combination
    }

    pub fn center(&self) -> u8 {
        self.center
    }

    pub fn center_letter(&self) -> char {
        letter_char(self.center)
    }

    /// Total points, or [`INVALID_SCORE`] if no pangram qualified.
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn is_valid(&self) -> bool {
        self.score != INVALID_SCORE
    }

    pub fn matched_words(&self) -> &[&'a Entry] {
        &self.matched_words
    }

    pub(crate) fn into_matched_words(self) -> Vec<&'a Entry> {
        self.matched_words
    }
}
