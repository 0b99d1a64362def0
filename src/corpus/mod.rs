//! Corpus of valid sequences
//!
//! A `Corpus` is the immutable universe of same-length sequences a key is
//! drawn from. It is built once through `CorpusBuilder` and only read
//! afterwards, so it can be shared freely across scoring threads.

mod builder;

pub use builder::{BuiltCorpus, CorpusBuilder, SkippedEntry};

use crate::core::{CandidateFilter, Feedback, Sequence};
use rayon::prelude::*;
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised by corpus construction and scoring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    #[error("corpus contains no valid sequences")]
    Empty,

    #[error("word length must not be negative, got {0}")]
    InvalidWordLength(i64),
}

/// An immutable set of sequences sharing one word length
///
/// Members are kept in lexicographic order. Iteration, `best_guess`
/// tie-breaking and random key selection all follow that order, so results
/// are reproducible across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    members: BTreeSet<Sequence>,
    word_length: usize,
}

impl Corpus {
    /// Only the builder creates corpora; `members` is non-empty and uniform.
    pub(crate) const fn from_members(members: BTreeSet<Sequence>, word_length: usize) -> Self {
        Self {
            members,
            word_length,
        }
    }

    /// Number of members
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Length shared by every member
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, sequence: &Sequence) -> bool {
        self.members.contains(sequence)
    }

    /// Iterate over members in lexicographic order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Sequence> + Clone + '_ {
        self.members.iter()
    }

    /// A copy of the member set
    #[must_use]
    pub fn members(&self) -> BTreeSet<Sequence> {
        self.members.clone()
    }

    /// Member at `index` in iteration order
    #[must_use]
    pub fn nth(&self, index: usize) -> Option<&Sequence> {
        self.members.iter().nth(index)
    }

    /// Number of members accepted by `filter`
    #[must_use]
    pub fn count_matching(&self, filter: &CandidateFilter) -> usize {
        self.members.iter().filter(|m| filter.test(m)).count()
    }

    /// Number of members that, as the key, agree with every category in `feedback`
    #[must_use]
    pub fn count_consistent(&self, feedback: &Feedback) -> usize {
        self.members.iter().filter(|m| feedback.admits(m)).count()
    }

    /// How many members are indistinguishable from `key` once `guess` is observed
    ///
    /// A guess whose length differs from the key scores 0: the feedback is
    /// undefined, so no member can be consistent with it.
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if the corpus has no members.
    ///
    /// # Examples
    /// ```
    /// use matchle::core::Sequence;
    /// use matchle::corpus::CorpusBuilder;
    ///
    /// let corpus = CorpusBuilder::empty(5)
    ///     .add_all(["apple", "grape", "peach", "berry"].map(|w| Sequence::new(w).unwrap()))
    ///     .build()
    ///     .unwrap()
    ///     .corpus;
    ///
    /// let apple = Sequence::new("apple").unwrap();
    /// assert_eq!(corpus.score(&apple, &apple).unwrap(), 1);
    /// ```
    pub fn score(&self, key: &Sequence, guess: &Sequence) -> Result<usize, CorpusError> {
        if self.is_empty() {
            return Err(CorpusError::Empty);
        }

        Ok(self.count_matching(&CandidateFilter::from_match(key, guess)))
    }

    /// The member minimizing `criterion`
    ///
    /// The criterion may return any ordered key, such as a tuple for layered
    /// tie-breaks. Remaining ties go to the lexicographically smallest member,
    /// which is also the first one met in iteration order. Evaluation runs in
    /// parallel.
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if the corpus has no members.
    pub fn best_guess<F, K>(&self, criterion: F) -> Result<&Sequence, CorpusError>
    where
        F: Fn(&Sequence) -> K + Sync,
        K: Ord + Send,
    {
        self.members
            .par_iter()
            .map(|member| (criterion(member), member))
            .min()
            .map(|(_, member)| member)
            .ok_or(CorpusError::Empty)
    }

    /// A new corpus holding only the members accepted by `filter`
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if no member passes.
    pub fn narrow(&self, filter: &CandidateFilter) -> Result<Self, CorpusError> {
        CorpusBuilder::from_corpus(self)
            .filter(filter)
            .build()
            .map(|built| built.corpus)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Sequence;
    type IntoIter = std::collections::btree_set::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::classify;

    pub(crate) fn corpus_of(words: &[&str]) -> Corpus {
        let length = words.first().map_or(0, |w| w.chars().count());
        CorpusBuilder::empty(length)
            .add_all(words.iter().map(|w| Sequence::new(w).unwrap()))
            .build()
            .unwrap()
            .corpus
    }

    fn seq(text: &str) -> Sequence {
        Sequence::new(text).unwrap()
    }

    fn fruit() -> Corpus {
        corpus_of(&["apple", "grape", "peach", "berry"])
    }

    #[test]
    fn corpus_accessors() {
        let corpus = fruit();
        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.word_length(), 5);
        assert!(!corpus.is_empty());
        assert!(corpus.contains(&seq("peach")));
        assert!(!corpus.contains(&seq("lemon")));
    }

    #[test]
    fn iteration_is_lexicographic() {
        let words: Vec<String> = fruit().iter().map(Sequence::text).collect();
        assert_eq!(words, vec!["apple", "berry", "grape", "peach"]);
        assert_eq!(fruit().nth(1), Some(&seq("berry")));
    }

    #[test]
    fn members_is_a_copy() {
        let corpus = fruit();
        let mut members = corpus.members();
        members.insert(seq("lemon"));
        assert_eq!(corpus.len(), 4);
        assert!(!corpus.contains(&seq("lemon")));
    }

    #[test]
    fn score_identity_is_one() {
        let corpus = fruit();
        for key in &corpus {
            assert_eq!(corpus.score(key, key).unwrap(), 1);
        }
    }

    #[test]
    fn score_counts_indistinguishable_keys() {
        let corpus = fruit();
        // No fruit contains 'z', so every key gives all-absent feedback
        assert_eq!(corpus.score(&seq("apple"), &seq("zzzzz")).unwrap(), 4);
    }

    #[test]
    fn score_length_mismatch_is_zero() {
        let corpus = fruit();
        assert_eq!(corpus.score(&seq("apple"), &seq("pear")).unwrap(), 0);
    }

    #[test]
    fn score_empty_corpus_fails() {
        let empty = Corpus::from_members(BTreeSet::new(), 5);
        assert_eq!(
            empty.score(&seq("apple"), &seq("apple")),
            Err(CorpusError::Empty)
        );
    }

    #[test]
    fn count_consistent_matches_score() {
        let corpus = fruit();
        for key in &corpus {
            for guess in &corpus {
                let feedback = classify(key, guess).unwrap();
                assert_eq!(
                    corpus.count_consistent(&feedback),
                    corpus.score(key, guess).unwrap()
                );
            }
        }
    }

    #[test]
    fn count_matching_uses_filter() {
        let corpus = fruit();
        let has_p = CandidateFilter::new("has-p", |s| s.contains('p'));
        assert_eq!(corpus.count_matching(&has_p), 3);
        assert_eq!(corpus.count_matching(&CandidateFilter::always_false()), 0);
    }

    #[test]
    fn best_guess_minimizes_criterion() {
        let corpus = fruit();
        let best = corpus
            .best_guess(|s| usize::from(s.contains('p')))
            .unwrap();
        assert_eq!(best, &seq("berry"));
    }

    #[test]
    fn best_guess_breaks_ties_lexicographically() {
        let corpus = fruit();
        assert_eq!(corpus.best_guess(|_| 7).unwrap(), &seq("apple"));
    }

    #[test]
    fn best_guess_orders_tuple_criteria() {
        let corpus = fruit();
        let best = corpus
            .best_guess(|s| (0usize, !s.contains('h')))
            .unwrap();
        assert_eq!(best, &seq("peach"));
    }

    #[test]
    fn best_guess_is_a_member() {
        let corpus = fruit();
        let best = corpus.best_guess(|s| s.text().len()).unwrap();
        assert!(corpus.contains(best));
    }

    #[test]
    fn best_guess_empty_corpus_fails() {
        let empty = Corpus::from_members(BTreeSet::new(), 5);
        assert_eq!(empty.best_guess(|_| 0), Err(CorpusError::Empty));
    }

    #[test]
    fn narrow_keeps_passing_members() {
        let corpus = fruit();
        let narrowed = corpus
            .narrow(&CandidateFilter::new("has-r", |s| s.contains('r')))
            .unwrap();
        assert_eq!(narrowed.len(), 2);
        assert!(narrowed.contains(&seq("grape")));
        assert!(narrowed.contains(&seq("berry")));
        assert_eq!(narrowed.word_length(), 5);
    }

    #[test]
    fn narrow_to_nothing_fails() {
        assert_eq!(
            fruit().narrow(&CandidateFilter::always_false()),
            Err(CorpusError::Empty)
        );
    }
}
