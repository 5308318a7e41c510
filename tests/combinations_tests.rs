use std::collections::HashSet;

use proptest::prelude::*;
use spelling_bee::{binomial, Combinations, LetterCombination, LetterSet, Lexicon, Search, PUZZLE_SIZE};

#[test]
fn test_binomial() {
    assert_eq!(binomial(26, 7), 657_800);
    assert_eq!(binomial(10, 7), 120);
    assert_eq!(binomial(7, 7), 1);
    assert_eq!(binomial(5, 7), 0);
    assert_eq!(binomial(4, 0), 1);
}

#[test]
fn test_full_alphabet_enumeration() {
    let mut seen = HashSet::new();
    let mut previous: Option<[usize; PUZZLE_SIZE]> = None;

    for combination in Combinations::<PUZZLE_SIZE>::new(26) {
        assert!(combination.windows(2).all(|w| w[0] < w[1]));
        assert!(combination[PUZZLE_SIZE - 1] < 26);
        if let Some(prev) = previous {
            assert!(prev < combination, "not in lexicographic order");
        }
        previous = Some(combination);

        let mask: u32 = combination.iter().fold(0, |acc, &i| acc | 1 << i);
        assert!(seen.insert(mask), "duplicate combination {:?}", combination);
    }

    assert_eq!(seen.len(), 657_800);
}

#[test]
fn test_trial_count() {
    let lexicon = Lexicon::default();
    let search = Search::new(&lexicon);
    assert_eq!(search.combination_count(), 657_800);
    assert_eq!(search.trial_count(), 4_604_600);
}

#[test]
fn test_prefix_shards_partition_enumeration() {
    let full: Vec<[usize; 4]> = Combinations::new(9).collect();
    let sharded: Vec<[usize; 4]> = (0..9)
        .flat_map(|first| Combinations::<4>::with_prefix(9, &[first]))
        .collect();
    assert_eq!(full, sharded);
}

#[test]
fn test_letter_combination() {
    let combination = LetterCombination::parse("tnlecar").unwrap();
    assert_eq!(combination.chars(), ['a', 'c', 'e', 'l', 'n', 'r', 't']);
    assert_eq!(combination.mask(), "acelnrt".parse::<LetterSet>().unwrap());
    assert!(combination.contains(b'n' - b'a'));
    assert!(!combination.contains(b'o' - b'a'));

    assert!(LetterCombination::parse("abcdef").is_none());
    assert!(LetterCombination::parse("abcdefgh").is_none());
    assert!(LetterCombination::from_letters([0, 1, 2, 3, 4, 6, 5]).is_none());
    assert!(LetterCombination::from_letters([0, 1, 2, 3, 4, 5, 26]).is_none());
}

proptest! {
    #[test]
    fn count_matches_binomial(n in 0usize..14) {
        prop_assert_eq!(Combinations::<3>::new(n).count() as u64, binomial(n, 3));
        prop_assert_eq!(Combinations::<PUZZLE_SIZE>::new(n).count() as u64, binomial(n, PUZZLE_SIZE));
    }
}
