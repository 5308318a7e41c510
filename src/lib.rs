//! # Spelling Bee Search
//!
//! Finds the Spelling Bee puzzle worth the most points for a given word list.
//!
//! Each dictionary word is reduced to a 26-bit fingerprint of the letters it
//! uses. The search then tries every 7-letter combination of the alphabet
//! with every choice of center letter, scores the words each one admits,
//! and keeps the best combination that has at least one pangram.

pub mod combinations;
pub mod config;
pub mod error;
pub mod letters;
pub mod lexicon;
pub mod scoring;
pub mod search;

use std::path::Path;

pub use combinations::{binomial, Combinations, LetterCombination};
pub use config::Config;
pub use error::{Result, SpellingBeeError};
pub use letters::{LetterSet, ALPHABET_SIZE};
pub use lexicon::{Entry, Lexicon, LexiconFilter, LexiconStats, Rejection};
pub use scoring::{Trial, INVALID_SCORE, MIN_WORD_LEN, PANGRAM_BONUS, PUZZLE_SIZE};
pub use search::{search, BestResult, CancelToken, NewBest, Search, SearchObserver};

/// Load a word list with the standard house rules.
pub fn load_lexicon<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
    Lexicon::load(path, &LexiconFilter::default())
}
