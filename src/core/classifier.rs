//! Feedback classification for a (key, guess) pair
//!
//! Classification is purely positional: each guessed character is judged on
//! its own against the key, with no bookkeeping of how many times a letter
//! occurs. A repeated guess letter can therefore be marked `Partial` more
//! often than it appears in the key.

use super::{Feedback, FeedbackCategory, FeedbackError, IndexedChar, Sequence};
use std::collections::BTreeMap;

/// Classify a single guessed character against the key
#[inline]
#[must_use]
pub fn classify_char(key: &Sequence, ic: IndexedChar) -> FeedbackCategory {
    if key.matches(ic) {
        FeedbackCategory::Exact
    } else if key.contains_elsewhere(ic) {
        FeedbackCategory::Partial
    } else {
        FeedbackCategory::Absent
    }
}

/// Calculate the feedback for `guess` when `key` is the secret
///
/// # Algorithm
/// For every position `i` of the guess holding `c`:
/// 1. `key[i] == c` → Exact
/// 2. `c` occurs elsewhere in the key → Partial
/// 3. otherwise → Absent
///
/// # Errors
/// Returns `FeedbackError::LengthMismatch` if key and guess differ in length.
///
/// # Examples
/// ```
/// use matchle::core::{classify, FeedbackCategory, Sequence};
///
/// let key = Sequence::new("apple").unwrap();
/// let guess = Sequence::new("grape").unwrap();
/// let feedback = classify(&key, &guess).unwrap();
///
/// assert_eq!(feedback.category_at(0), Some(FeedbackCategory::Absent)); // g
/// assert_eq!(feedback.category_at(2), Some(FeedbackCategory::Partial)); // a
/// assert_eq!(feedback.category_at(4), Some(FeedbackCategory::Exact)); // e
/// ```
pub fn classify(key: &Sequence, guess: &Sequence) -> Result<Feedback, FeedbackError> {
    if key.len() != guess.len() {
        return Err(FeedbackError::LengthMismatch {
            key: key.len(),
            guess: guess.len(),
        });
    }

    let categories: BTreeMap<usize, FeedbackCategory> = guess
        .indexed()
        .map(|ic| (ic.position, classify_char(key, ic)))
        .collect();

    Ok(Feedback::from_parts(guess.clone(), categories))
}
