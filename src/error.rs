use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellingBeeError {
    /// The word list could not be opened or read. No partial lexicon is kept.
    #[error("cannot read word list {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A letter set given on the command line or in a config was not `a`-`z`.
    #[error("invalid letters {0:?}: only lowercase a-z are allowed")]
    InvalidLetters(String),

    /// The search alphabet cannot hold a full puzzle.
    #[error("alphabet has {0} letters, a puzzle needs at least 7")]
    AlphabetTooSmall(u32),

    /// Words shorter than four letters have no place in the scoring rules.
    #[error("minimum word length {0} is below 4")]
    MinLengthTooShort(usize),

    #[error("thread count must be at least 1")]
    InvalidThreadCount,

    /// The search finished without a single combination admitting a pangram.
    #[error("no letter combination admits a pangram; no puzzle exists for this word list")]
    NoValidCombination,

    #[error("search cancelled")]
    Cancelled,

    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, SpellingBeeError>;
