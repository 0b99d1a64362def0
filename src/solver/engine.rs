//! History-aware guess selection

use super::strategy::Strategy;
use crate::core::{CandidateFilter, Feedback, FeedbackError, Sequence};
use crate::corpus::{Corpus, CorpusError};
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while constructing or querying a solver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Feedback(#[from] FeedbackError),

    #[error("guess '{guess}' has length {actual}, corpus words have length {expected}")]
    GuessLength {
        guess: Sequence,
        expected: usize,
        actual: usize,
    },
}

/// A scored guess, as listed by `Solver::ranking`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedGuess<'a> {
    pub guess: &'a Sequence,
    pub score: usize,
    /// Whether the guess is itself still a plausible key
    pub is_candidate: bool,
}

/// Ranks guesses over a corpus, taking earlier feedback into account
///
/// The guess pool is always the whole corpus. The hypothetical keys are the
/// corpus members consistent with every observation so far; with no history
/// that is the whole corpus again.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    strategy: Strategy,
    corpus: &'a Corpus,
    evidence: Vec<Feedback>,
    candidates: Corpus,
}

impl<'a> Solver<'a> {
    /// Create a solver from a corpus and the feedback observed so far
    ///
    /// Observations of the same guess are merged into one; each distinct
    /// observation then narrows the hypothetical keys.
    ///
    /// # Errors
    /// - `CorpusError::Empty` if the corpus is empty or no member is
    ///   consistent with the history
    /// - `FeedbackError` if merging observations fails
    pub fn new(
        strategy: Strategy,
        corpus: &'a Corpus,
        history: &[Feedback],
    ) -> Result<Self, SolverError> {
        if corpus.is_empty() {
            return Err(CorpusError::Empty.into());
        }

        let evidence = merge_by_guess(history)?;
        let candidates = match evidence_filter(&evidence) {
            Some(filter) => corpus.narrow(&filter)?,
            None => corpus.clone(),
        };

        debug!(
            "{strategy} solver: {} of {} sequences remain after {} observations",
            candidates.len(),
            corpus.len(),
            evidence.len()
        );

        Ok(Self {
            strategy,
            corpus,
            evidence,
            candidates,
        })
    }

    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The full corpus guesses are drawn from
    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    /// Corpus members still consistent with the history
    #[must_use]
    pub const fn candidates(&self) -> &Corpus {
        &self.candidates
    }

    /// History after merging observations of the same guess
    #[must_use]
    pub fn evidence(&self) -> &[Feedback] {
        &self.evidence
    }

    /// Consistency count of `key` for `guess` among the remaining candidates
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if no candidates remain.
    pub fn score_key(&self, key: &Sequence, guess: &Sequence) -> Result<usize, SolverError> {
        Ok(self.candidates.score(key, guess)?)
    }

    /// Aggregate score of `guess` over every remaining candidate as the key
    ///
    /// # Errors
    /// Returns `SolverError::GuessLength` if the guess does not have the
    /// corpus word length.
    pub fn score(&self, guess: &Sequence) -> Result<usize, SolverError> {
        if guess.len() != self.corpus.word_length() {
            return Err(SolverError::GuessLength {
                guess: guess.clone(),
                expected: self.corpus.word_length(),
                actual: guess.len(),
            });
        }

        Ok(self.strategy.score(guess, &self.candidates))
    }

    /// The corpus member with the lowest aggregate score
    ///
    /// Ties prefer a guess that is still a plausible key, then the
    /// lexicographically smallest. With no history every member is a
    /// candidate and this is exactly `Corpus::best_guess` over the score.
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if the corpus is empty.
    ///
    /// # Examples
    /// ```
    /// use matchle::core::Sequence;
    /// use matchle::corpus::CorpusBuilder;
    /// use matchle::solver::{Solver, Strategy};
    ///
    /// let corpus = CorpusBuilder::empty(5)
    ///     .add_all(["apple", "grape", "peach", "berry"].map(|w| Sequence::new(w).unwrap()))
    ///     .build()
    ///     .unwrap()
    ///     .corpus;
    ///
    /// let solver = Solver::new(Strategy::WorstCase, &corpus, &[]).unwrap();
    /// let best = solver.guess().unwrap();
    /// assert!(corpus.contains(best));
    /// ```
    pub fn guess(&self) -> Result<&'a Sequence, SolverError> {
        let best = self.corpus.best_guess(|guess| {
            (
                self.strategy.score(guess, &self.candidates),
                !self.candidates.contains(guess),
            )
        })?;

        debug!("{} picked '{best}'", self.strategy);
        Ok(best)
    }

    /// The `limit` best guesses in ranking order
    #[must_use]
    pub fn ranking(&self, limit: usize) -> Vec<RankedGuess<'a>> {
        let pool: Vec<&'a Sequence> = self.corpus.iter().collect();

        let mut ranked: Vec<RankedGuess<'a>> = pool
            .par_iter()
            .map(|&guess| RankedGuess {
                guess,
                score: self.strategy.score(guess, &self.candidates),
                is_candidate: self.candidates.contains(guess),
            })
            .collect();

        ranked.sort_by(|a, b| {
            (a.score, !a.is_candidate, a.guess).cmp(&(b.score, !b.is_candidate, b.guess))
        });
        ranked.truncate(limit);
        ranked
    }
}

/// Merge observations that share a guess, keeping first-seen guess order
fn merge_by_guess(history: &[Feedback]) -> Result<Vec<Feedback>, FeedbackError> {
    let mut order: Vec<&Sequence> = Vec::new();
    let mut merged: BTreeMap<&Sequence, Feedback> = BTreeMap::new();

    for feedback in history {
        let guess = feedback.guess();
        if let Some(existing) = merged.get_mut(guess) {
            *existing = existing.merge(feedback)?;
        } else {
            order.push(guess);
            merged.insert(guess, feedback.clone());
        }
    }

    Ok(order
        .into_iter()
        .filter_map(|guess| merged.remove(guess))
        .collect())
}

/// Conjunction of one consistency filter per observation
fn evidence_filter(evidence: &[Feedback]) -> Option<CandidateFilter> {
    evidence
        .iter()
        .cloned()
        .map(CandidateFilter::consistent_with)
        .reduce(|acc, next| acc.and(Some(next)))
}
