//! Validation of raw player input

use crate::core::{FeedbackError, Sequence, SequenceError};
use crate::corpus::Corpus;
use thiserror::Error;

/// Reasons a guess is refused
///
/// All of these are recoverable: the caller reports them and asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess cannot be blank")]
    Blank,

    #[error("guess must have {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("'{0}' is not in the word list")]
    NotInCorpus(String),

    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error(transparent)]
    Feedback(#[from] FeedbackError),
}

/// Turn raw input into a corpus member
///
/// Surrounding whitespace is ignored. Input that differs from a member only
/// in letter case resolves to that member.
///
/// # Errors
/// Returns `GuessError` if the input is blank, has the wrong length, contains
/// an absent character or is not in the corpus.
pub fn validate_guess(input: &str, corpus: &Corpus) -> Result<Sequence, GuessError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(GuessError::Blank);
    }

    let actual = input.chars().count();
    if actual != corpus.word_length() {
        return Err(GuessError::WrongLength {
            expected: corpus.word_length(),
            actual,
        });
    }

    let guess = Sequence::new(input)?;
    if corpus.contains(&guess) {
        return Ok(guess);
    }

    corpus
        .iter()
        .find(|member| member.eq_ignore_case(&guess))
        .cloned()
        .ok_or_else(|| GuessError::NotInCorpus(input.to_string()))
}
