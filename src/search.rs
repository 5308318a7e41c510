//! Exhaustive search for the best-scoring puzzle.
//!
//! Every 7-letter combination of the alphabet is tried with each of its
//! letters as center. The search keeps the first (in enumeration order)
//! trial with the highest score; ties never replace the current leader.
//!
//! The parallel search splits the enumeration into shards by the first two
//! letters of each combination. Shards are merged back in enumeration order
//! with the same strict comparison, so it returns exactly what the
//! sequential search returns.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Arc;

use rayon::prelude::*;

use crate::combinations::{binomial, Combinations, LetterCombination};
use crate::config::Config;
use crate::error::{Result, SpellingBeeError};
use crate::letters::{letter_char, LetterSet};
use crate::lexicon::{Entry, Lexicon};
use crate::scoring::{trial_score, Trial, PUZZLE_SIZE};

/// Combinations scanned between progress reports
const PROGRESS_STRIDE: u64 = 1024;

/// Announcement of a new leading puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBest {
    pub letters: [char; PUZZLE_SIZE],
    pub center: char,
    pub score: u32,
}

impl fmt::Display for NewBest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "New max score: {}; for letters: ", self.score)?;
        write_letters(f, &self.letters, ",")?;
        write!(f, "; center: {}", self.center)
    }
}

/// Receives events while the search runs.
///
/// Shared between worker threads in a parallel search, hence `Sync`.
pub trait SearchObserver: Sync {
    /// A trial beat every score announced so far.
    fn on_new_best(&self, _event: &NewBest) {}

    /// `combinations` more combinations have been fully scored.
    fn on_progress(&self, _combinations: u64) {}
}

impl SearchObserver for () {}

/// Cooperative cancellation, checked once per combination.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The winning puzzle and the words that earn its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestResult<'a> {
    score: u32,
    combination: LetterCombination,
    center: u8,
    matched_words: Vec<&'a Entry>,
}

impl<'a> BestResult<'a> {
    fn from_trial(trial: Trial<'a>) -> Self {
        Self {
            score: trial.score().max(0) as u32,
            combination: trial.combination(),
            center: trial.center(),
            matched_words: trial.into_matched_words(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combination(&self) -> LetterCombination {
        self.combination
    }

    pub fn letters(&self) -> [char; PUZZLE_SIZE] {
        self.combination.chars()
    }

    pub fn center(&self) -> u8 {
        self.center
    }

    pub fn center_letter(&self) -> char {
        letter_char(self.center)
    }

    pub fn matched_words(&self) -> &[&'a Entry] {
        &self.matched_words
    }

    pub fn words(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.matched_words.iter().map(|&entry| entry.text())
    }

    pub fn new_best(&self) -> NewBest {
        NewBest {
            letters: self.letters(),
            center: self.center_letter(),
            score: self.score,
        }
    }
}

impl fmt::Display for BestResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Max score: {} for letters: ", self.score)?;
        write_letters(f, &self.letters(), ", ")?;
        writeln!(f, "; center: {}", self.center_letter())?;
        writeln!(f, "Word list:")?;
        for word in self.words() {
            writeln!(f, "    {}", word)?;
        }
        Ok(())
    }
}

fn write_letters(f: &mut fmt::Formatter<'_>, letters: &[char], sep: &str) -> fmt::Result {
    for (i, c) in letters.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", c)?;
    }
    Ok(())
}

/// Running maximum owned by one traversal.
struct Leader<'a> {
    score: i32,
    best: Option<BestResult<'a>>,
}

impl<'a> Leader<'a> {
    /// Starting score. A valid trial has a pangram, so its score is always
    /// above this.
    const FLOOR: i32 = 0;

    fn new() -> Self {
        Self {
            score: Self::FLOOR,
            best: None,
        }
    }

    /// Combine with a leader from later in the enumeration.
    fn merge(self, later: Self) -> Self {
        if later.score > self.score {
            later
        } else {
            self
        }
    }

    fn finish(self) -> Result<BestResult<'a>> {
        self.best.ok_or(SpellingBeeError::NoValidCombination)
    }
}

/// Exhaustive search over one lexicon.
pub struct Search<'a> {
    lexicon: &'a Lexicon,
    alphabet: Vec<u8>,
    cancel: Option<CancelToken>,
}

impl<'a> Search<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            alphabet: LetterSet::ALPHABET.iter().collect(),
            cancel: None,
        }
    }

    /// Draw combinations from `alphabet` only.
    pub fn with_alphabet(mut self, alphabet: LetterSet) -> Result<Self> {
        if (alphabet.len() as usize) < PUZZLE_SIZE {
            return Err(SpellingBeeError::AlphabetTooSmall(alphabet.len()));
        }
        self.alphabet = alphabet.iter().collect();
        Ok(self)
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn combination_count(&self) -> u64 {
        binomial(self.alphabet.len(), PUZZLE_SIZE)
    }

    pub fn trial_count(&self) -> u64 {
        self.combination_count() * PUZZLE_SIZE as u64
    }

    /// Single-threaded traversal in enumeration order.
    pub fn run(&self, observer: &dyn SearchObserver) -> Result<BestResult<'a>> {
        let announced = AtomicI32::new(Leader::FLOOR);
        let combinations = Combinations::new(self.alphabet.len());
        self.scan(combinations, observer, &announced)?.finish()
    }

    /// Data-parallel traversal. Returns the same result as [`Search::run`].
    ///
    /// New-best events can differ from a sequential run, but each one beat
    /// every score announced before it.
    pub fn run_parallel(&self, observer: &dyn SearchObserver) -> Result<BestResult<'a>> {
        let n = self.alphabet.len();
        let shards: Vec<[usize; 2]> = Combinations::<2>::new(n)
            .filter(|&[_, second]| second + PUZZLE_SIZE - 2 < n)
            .collect();

        let announced = AtomicI32::new(Leader::FLOOR);
        let leaders = shards
            .par_iter()
            .map(|prefix| self.scan(Combinations::with_prefix(n, prefix), observer, &announced))
            .collect::<Result<Vec<_>>>()?;

        leaders
            .into_iter()
            .fold(Leader::new(), Leader::merge)
            .finish()
    }

    fn scan(
        &self,
        combinations: Combinations<PUZZLE_SIZE>,
        observer: &dyn SearchObserver,
        announced: &AtomicI32,
    ) -> Result<Leader<'a>> {
        let lexicon: &'a Lexicon = self.lexicon;
        let mut leader = Leader::new();
        let mut candidates: Vec<&'a Entry> = Vec::new();
        let mut pending = 0;

        for positions in combinations {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                return Err(SpellingBeeError::Cancelled);
            }

            let combination = LetterCombination::from_sorted(positions.map(|p| self.alphabet[p]));
            let mask = combination.mask();
            candidates.clear();
            candidates.extend(lexicon.iter().filter(|e| e.fingerprint().is_subset_of(mask)));

            // Without a pangram every center scores -1.
            if candidates.iter().any(|e| e.fingerprint() == mask) {
                for center in combination.letters() {
                    let score = trial_score(candidates.iter().copied(), &combination, center);
                    if score <= leader.score {
                        continue;
                    }
                    let trial = Trial::evaluate(candidates.iter().copied(), combination, center);
                    let best = BestResult::from_trial(trial);
                    if announced.fetch_max(score, Ordering::Relaxed) < score {
                        observer.on_new_best(&best.new_best());
                    }
                    leader.score = score;
                    leader.best = Some(best);
                }
            }

            pending += 1;
            if pending == PROGRESS_STRIDE {
                observer.on_progress(pending);
                pending = 0;
            }
        }
        if pending > 0 {
            observer.on_progress(pending);
        }

        Ok(leader)
    }
}

/// Run the search as `config` describes.
pub fn search<'a>(
    lexicon: &'a Lexicon,
    config: &Config,
    observer: &dyn SearchObserver,
) -> Result<BestResult<'a>> {
    config.validate()?;
    let search = Search::new(lexicon).with_alphabet(config.alphabet)?;

    if !config.parallel {
        return search.run(observer);
    }
    match config.threads {
        None => search.run_parallel(observer),
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| search.run_parallel(observer))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leader(score: i32, letters: &str) -> Leader<'static> {
        let combination = LetterCombination::parse(letters).unwrap();
        Leader {
            score,
            best: Some(BestResult {
                score: score as u32,
                combination,
                center: combination.letters()[0],
                matched_words: Vec::new(),
            }),
        }
    }

    fn best_letters(leader: &Leader<'_>) -> String {
        leader.best.as_ref().unwrap().letters().iter().collect()
    }

    #[test]
    fn merge_keeps_earlier_leader_on_tie() {
        let merged = leader(20, "abcdefg").merge(leader(20, "hijklmn"));
        assert_eq!(merged.score, 20);
        assert_eq!(best_letters(&merged), "abcdefg");
    }

    #[test]
    fn merge_takes_later_leader_when_strictly_better() {
        let merged = leader(20, "abcdefg").merge(leader(21, "hijklmn"));
        assert_eq!(merged.score, 21);
        assert_eq!(best_letters(&merged), "hijklmn");

        let merged = Leader::new().merge(leader(14, "abcdefg"));
        assert_eq!(best_letters(&merged), "abcdefg");
    }

    #[test]
    fn merge_ignores_empty_later_leader() {
        let merged = leader(14, "abcdefg").merge(Leader::new());
        assert_eq!(best_letters(&merged), "abcdefg");
    }

    #[test]
    fn shard_prefixes_cover_full_enumeration() {
        let n = 10;
        let total: usize = Combinations::<2>::new(n)
            .filter(|&[_, second]| second + PUZZLE_SIZE - 2 < n)
            .map(|prefix| Combinations::<PUZZLE_SIZE>::with_prefix(n, &prefix).count())
            .sum();
        assert_eq!(total as u64, binomial(n, PUZZLE_SIZE));
    }
}
