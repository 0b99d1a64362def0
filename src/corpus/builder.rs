//! Staging builder for `Corpus`
//!
//! The builder favours robustness over strictness: a sequence whose length
//! disagrees with the declared word length is skipped and reported, never
//! allowed to abort the whole build.

use super::{Corpus, CorpusError};
use crate::core::{CandidateFilter, Sequence};
use log::{debug, warn};
use std::collections::BTreeSet;
use std::fmt;

/// A sequence rejected by the builder because of its length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub sequence: Sequence,
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for SkippedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skipped '{}': length {} does not match word length {}",
            self.sequence, self.actual, self.expected
        )
    }
}

/// Result of a successful build: the corpus plus everything that was skipped
#[derive(Debug, Clone)]
pub struct BuiltCorpus {
    pub corpus: Corpus,
    pub skipped: Vec<SkippedEntry>,
}

/// Mutable staging area for a corpus
#[derive(Debug, Clone)]
pub struct CorpusBuilder {
    word_length: usize,
    staged: BTreeSet<Sequence>,
    skipped: Vec<SkippedEntry>,
}

impl CorpusBuilder {
    /// Start an empty builder for sequences of `word_length` characters
    #[must_use]
    pub const fn empty(word_length: usize) -> Self {
        Self {
            word_length,
            staged: BTreeSet::new(),
            skipped: Vec::new(),
        }
    }

    /// Start an empty builder from an untrusted, signed length
    ///
    /// # Errors
    /// Returns `CorpusError::InvalidWordLength` if `word_length` is negative.
    pub fn try_empty(word_length: i64) -> Result<Self, CorpusError> {
        usize::try_from(word_length)
            .map(Self::empty)
            .map_err(|_| CorpusError::InvalidWordLength(word_length))
    }

    /// Start a builder pre-filled with the members of an existing corpus
    #[must_use]
    pub fn from_corpus(corpus: &Corpus) -> Self {
        Self {
            word_length: corpus.word_length(),
            staged: corpus.members(),
            skipped: Vec::new(),
        }
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of sequences staged so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Sequences rejected so far
    #[must_use]
    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    /// Stage a sequence, skipping it if its length is wrong
    #[must_use]
    pub fn add(mut self, sequence: Sequence) -> Self {
        if sequence.len() == self.word_length {
            self.staged.insert(sequence);
        } else {
            let entry = SkippedEntry {
                actual: sequence.len(),
                expected: self.word_length,
                sequence,
            };
            warn!("{entry}");
            self.skipped.push(entry);
        }
        self
    }

    /// Stage every sequence from an iterator
    #[must_use]
    pub fn add_all<I>(self, sequences: I) -> Self
    where
        I: IntoIterator<Item = Sequence>,
    {
        sequences.into_iter().fold(self, Self::add)
    }

    /// Drop staged sequences rejected by `filter`
    #[must_use]
    pub fn filter(mut self, filter: &CandidateFilter) -> Self {
        let before = self.staged.len();
        self.staged.retain(|s| filter.test(s));
        debug!(
            "filter {filter} kept {} of {before} sequences",
            self.staged.len()
        );
        self
    }

    /// Freeze the staged sequences into a corpus
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if no valid sequence was ever staged.
    ///
    /// # Examples
    /// ```
    /// use matchle::core::Sequence;
    /// use matchle::corpus::CorpusBuilder;
    ///
    /// let built = CorpusBuilder::empty(5)
    ///     .add(Sequence::new("apple").unwrap())
    ///     .add(Sequence::new("test").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(built.corpus.len(), 1);
    /// assert_eq!(built.skipped.len(), 1);
    /// ```
    pub fn build(self) -> Result<BuiltCorpus, CorpusError> {
        if self.staged.is_empty() {
            return Err(CorpusError::Empty);
        }

        debug!(
            "built corpus of {} sequences (length {}), skipped {}",
            self.staged.len(),
            self.word_length,
            self.skipped.len()
        );

        Ok(BuiltCorpus {
            corpus: Corpus::from_members(self.staged, self.word_length),
            skipped: self.skipped,
        })
    }
}
