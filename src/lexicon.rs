//! Lexicon construction.
//!
//! Turns a raw word list into the entries a puzzle can score: words of at
//! least four letters, without an `s`, using no more than seven distinct
//! letters. Each entry carries its letter fingerprint.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SpellingBeeError};
use crate::letters::{letter_index, LetterSet};
use crate::scoring::{MIN_WORD_LEN, PUZZLE_SIZE};

/// A word kept for searching, with the set of letters it uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    text: String,
    fingerprint: LetterSet,
}

impl Entry {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fingerprint(&self) -> LetterSet {
        self.fingerprint
    }

    /// Length in letters.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Why a word was left out of the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Shorter than the minimum word length
    TooShort,
    /// Contains an excluded letter (`s` under the house rules)
    ExcludedLetter,
    /// Contains a character outside `a`-`z`
    Malformed,
    /// Uses more distinct letters than a puzzle has
    TooManyLetters,
}

/// Rules deciding which words enter the lexicon.
///
/// Scoring gives a [`MIN_WORD_LEN`]-letter word one point and longer words
/// one point per letter, so `min_len` below that floor would let shorter
/// words outscore four-letter ones. [`Config::validate`] rejects it.
///
/// [`Config::validate`]: crate::Config::validate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconFilter {
    pub min_len: usize,
    pub excluded: LetterSet,
    pub max_distinct: u32,
}

impl Default for LexiconFilter {
    fn default() -> Self {
        Self {
            min_len: MIN_WORD_LEN,
            excluded: LetterSet::single(b's' - b'a'),
            max_distinct: PUZZLE_SIZE as u32,
        }
    }
}

impl LexiconFilter {
    /// Check a word against the rules, building its entry if it passes.
    pub fn check(&self, word: &str) -> std::result::Result<Entry, Rejection> {
        if word.len() < self.min_len {
            return Err(Rejection::TooShort);
        }
        if word
            .chars()
            .filter_map(letter_index)
            .any(|i| self.excluded.contains(i))
        {
            return Err(Rejection::ExcludedLetter);
        }

        let mut fingerprint = LetterSet::EMPTY;
        let mut distinct = 0;
        for c in word.chars() {
            let index = letter_index(c).ok_or(Rejection::Malformed)?;
            if fingerprint.insert(index) {
                distinct += 1;
            }
        }
        if distinct > self.max_distinct {
            return Err(Rejection::TooManyLetters);
        }

        Ok(Entry {
            text: word.to_string(),
            fingerprint,
        })
    }
}

/// Counts of what happened to each input line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexiconStats {
    pub lines: usize,
    pub retained: usize,
    pub too_short: usize,
    pub excluded_letter: usize,
    pub malformed: usize,
    pub too_many_letters: usize,
}

impl LexiconStats {
    fn record(&mut self, outcome: &std::result::Result<Entry, Rejection>) {
        self.lines += 1;
        match outcome {
            Ok(_) => self.retained += 1,
            Err(Rejection::TooShort) => self.too_short += 1,
            Err(Rejection::ExcludedLetter) => self.excluded_letter += 1,
            Err(Rejection::Malformed) => self.malformed += 1,
            Err(Rejection::TooManyLetters) => self.too_many_letters += 1,
        }
    }
}

/// The eligible words, in source order. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<Entry>,
    stats: LexiconStats,
}

impl Lexicon {
    pub fn from_words<I, S>(words: I, filter: &LexiconFilter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::default();
        for word in words {
            lexicon.push(word.as_ref(), filter);
        }
        lexicon
    }

    /// Read one word per line. Any read error aborts the whole lexicon.
    pub fn read<R: BufRead>(reader: R, filter: &LexiconFilter) -> io::Result<Self> {
        let mut lexicon = Self::default();
        for line in reader.lines() {
            lexicon.push(&line?, filter);
        }
        Ok(lexicon)
    }

    pub fn load<P: AsRef<Path>>(path: P, filter: &LexiconFilter) -> Result<Self> {
        let path = path.as_ref();
        let unavailable = |source: io::Error| SpellingBeeError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unavailable)?;
        Self::read(BufReader::new(file), filter).map_err(unavailable)
    }

    fn push(&mut self, word: &str, filter: &LexiconFilter) {
        let outcome = filter.check(word);
        self.stats.record(&outcome);
        if let Ok(entry) = outcome {
            self.entries.push(entry);
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> LexiconStats {
        self.stats
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
