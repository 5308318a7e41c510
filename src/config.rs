use crate::error::{Result, SpellingBeeError};
use crate::letters::LetterSet;
use crate::lexicon::LexiconFilter;
use crate::scoring::{MIN_WORD_LEN, PUZZLE_SIZE};

/// Runtime configuration for building the lexicon and running the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Which words enter the lexicon.
    pub filter: LexiconFilter,
    /// Letters the combinations are drawn from.
    pub alphabet: LetterSet,
    /// Spread the search over rayon worker threads.
    pub parallel: bool,
    /// Size of a dedicated thread pool. `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter: LexiconFilter::default(),
            alphabet: LetterSet::ALPHABET,
            parallel: true,
            threads: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if (self.alphabet.len() as usize) < PUZZLE_SIZE {
            return Err(SpellingBeeError::AlphabetTooSmall(self.alphabet.len()));
        }
        if self.filter.min_len < MIN_WORD_LEN {
            return Err(SpellingBeeError::MinLengthTooShort(self.filter.min_len));
        }
        if self.threads == Some(0) {
            return Err(SpellingBeeError::InvalidThreadCount);
        }
        Ok(())
    }
}
