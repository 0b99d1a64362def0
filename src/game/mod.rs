//! Game state for one round
//!
//! A `Game` owns the secret key, the attempt budget and the feedback history.
//! Raw player input passes through `validate_guess` before it reaches the
//! classifier; invalid input is reported and costs no attempt.

mod validation;

pub use validation::{GuessError, validate_guess};

use crate::core::{Feedback, Sequence, classify};
use crate::corpus::{Corpus, CorpusError};
use crate::solver::{Solver, SolverError, Strategy};
use log::debug;
use rand::Rng;
use rand::seq::IteratorRandom;
use thiserror::Error;

/// Errors raised while setting up a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("attempt budget must be at least 1")]
    NoAttempts,

    #[error("words must have at least one letter")]
    EmptyWords,

    #[error("key '{0}' is not in the corpus")]
    KeyNotInCorpus(Sequence),

    #[error(transparent)]
    Corpus(#[from] CorpusError),
}

/// Pick a key uniformly at random from the corpus
///
/// # Errors
/// Returns `CorpusError::Empty` if the corpus has no members.
pub fn choose_key<'a, R: Rng + ?Sized>(
    corpus: &'a Corpus,
    rng: &mut R,
) -> Result<&'a Sequence, CorpusError> {
    corpus.iter().choose(rng).ok_or(CorpusError::Empty)
}

/// One round: a key, an attempt budget and the feedback so far
#[derive(Debug, Clone)]
pub struct Game<'a> {
    corpus: &'a Corpus,
    key: Sequence,
    max_attempts: usize,
    history: Vec<Feedback>,
}

impl<'a> Game<'a> {
    /// Start a game with a known key
    ///
    /// # Errors
    /// - `GameError::NoAttempts` if `max_attempts` is 0
    /// - `GameError::EmptyWords` if the corpus word length is 0
    /// - `GameError::KeyNotInCorpus` if the key is not a corpus member
    pub fn new(corpus: &'a Corpus, key: Sequence, max_attempts: usize) -> Result<Self, GameError> {
        if max_attempts == 0 {
            return Err(GameError::NoAttempts);
        }
        if corpus.word_length() == 0 {
            return Err(GameError::EmptyWords);
        }
        if !corpus.contains(&key) {
            return Err(GameError::KeyNotInCorpus(key));
        }

        Ok(Self {
            corpus,
            key,
            max_attempts,
            history: Vec::new(),
        })
    }

    /// Start a game with a key drawn from the corpus
    ///
    /// # Errors
    /// Same as `Game::new`, plus `CorpusError::Empty` for an empty corpus.
    pub fn with_random_key<R: Rng + ?Sized>(
        corpus: &'a Corpus,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let key = choose_key(corpus, rng)?.clone();
        Self::new(corpus, key, max_attempts)
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    #[must_use]
    pub const fn key(&self) -> &Sequence {
        &self.key
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Feedback for every accepted guess, oldest first
    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    #[must_use]
    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.history.last()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts.saturating_sub(self.history.len())
    }

    /// True once the last accepted guess was the key
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.last_feedback().is_some_and(Feedback::is_win)
    }

    /// True once the player has won or used every attempt
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_win() || self.attempts_left() == 0
    }

    /// Validate raw input, classify it against the key and record the result
    ///
    /// # Errors
    /// Returns a `GuessError` for blank, wrong-length or unknown words, or if
    /// the game is already over. Rejected input does not use an attempt.
    pub fn make_guess(&mut self, input: &str) -> Result<&Feedback, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        let guess = validate_guess(input, self.corpus)?;
        let feedback = classify(&self.key, &guess)?;
        debug!("guess '{guess}' -> {}", feedback.to_emoji());

        self.history.push(feedback);
        Ok(&self.history[self.history.len() - 1])
    }

    /// A solver narrowed by this game's history
    ///
    /// # Errors
    /// Propagates `SolverError` from `Solver::new`.
    pub fn solver(&self, strategy: Strategy) -> Result<Solver<'a>, SolverError> {
        Solver::new(strategy, self.corpus, &self.history)
    }
}
