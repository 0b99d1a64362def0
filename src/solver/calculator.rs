//! Consistency-count calculation for a guess
//!
//! For a guess `g` and a set of hypothetical keys, the score of key `k` is the
//! number of keys that produce the same feedback as `k`. Grouping the keys by
//! feedback once gives every key's score without rescanning the set per key.

use crate::core::{Feedback, Sequence, classify};
use rustc_hash::FxHashMap;
use std::iter;

/// Group keys by the feedback `guess` earns against them
///
/// Keys whose length differs from the guess are left out: their feedback is
/// undefined, so they are consistent with nothing.
pub fn group_by_feedback<'a, I>(guess: &Sequence, keys: I) -> FxHashMap<Feedback, usize>
where
    I: IntoIterator<Item = &'a Sequence>,
{
    let mut counts = FxHashMap::default();

    for key in keys {
        if let Ok(feedback) = classify(key, guess) {
            *counts.entry(feedback).or_insert(0) += 1;
        }
    }

    counts
}

/// Per-key consistency counts for `guess`, one entry per key
///
/// A group of `n` keys contributes `n` scores of `n`. Order follows the
/// grouping map and carries no meaning.
pub fn key_scores<'a, I>(guess: &Sequence, keys: I) -> impl Iterator<Item = usize>
where
    I: IntoIterator<Item = &'a Sequence>,
{
    group_by_feedback(guess, keys)
        .into_values()
        .flat_map(|n| iter::repeat_n(n, n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::tests::corpus_of;

    fn seq(text: &str) -> Sequence {
        Sequence::new(text).unwrap()
    }

    #[test]
    fn identity_split_gives_singletons() {
        let corpus = corpus_of(&["apple", "grape", "peach", "berry"]);
        let groups = group_by_feedback(&seq("apple"), &corpus);

        assert_eq!(groups.values().sum::<usize>(), 4);
        assert!(groups.values().all(|&n| n == 1));
    }

    #[test]
    fn uninformative_guess_gives_one_group() {
        let corpus = corpus_of(&["apple", "grape", "peach", "berry"]);
        let groups = group_by_feedback(&seq("zzzzz"), &corpus);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.values().copied().next(), Some(4));
    }

    #[test]
    fn mismatched_lengths_are_ignored() {
        let keys = [seq("apple"), seq("pear")];
        let groups = group_by_feedback(&seq("apple"), &keys);
        assert_eq!(groups.values().sum::<usize>(), 1);
    }

    #[test]
    fn key_scores_match_corpus_score() {
        let corpus = corpus_of(&["apple", "grape", "peach", "berry", "cheap", "paper"]);

        for guess in &corpus {
            let mut grouped: Vec<usize> = key_scores(guess, &corpus).collect();
            let mut direct: Vec<usize> = corpus
                .iter()
                .map(|key| corpus.score(key, guess).unwrap())
                .collect();

            grouped.sort_unstable();
            direct.sort_unstable();
            assert_eq!(grouped, direct, "guess {guess}");
        }
    }
}
