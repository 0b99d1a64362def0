//! Per-position feedback for a guess
//!
//! A `Feedback` maps each position of the guess to one of three categories:
//! - `Exact`   = the character is at this position in the key
//! - `Partial` = the character occurs in the key, but not here
//! - `Absent`  = the character does not occur in the key
//!
//! Feedback remembers the guess it was computed for, so two observations can
//! only be merged when they describe the same guess.

use super::{IndexedChar, Sequence, classify_char};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Classification of a single guessed character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeedbackCategory {
    Exact,
    Partial,
    Absent,
}

impl FeedbackCategory {
    /// Parse a single pattern symbol
    ///
    /// Accepts 'G'/'g'/🟩 for exact, 'Y'/'y'/🟨 for partial and '-'/'_'/⬜ for absent.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Partial),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Partial => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "EXACT",
            Self::Partial => "PARTIAL",
            Self::Absent => "ABSENT",
        };
        f.write_str(name)
    }
}

/// Errors produced while building, comparing or merging feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("key has length {key} but guess has length {guess}")]
    LengthMismatch { key: usize, guess: usize },

    #[error("cannot merge feedback for '{left}' with feedback for '{right}'")]
    GuessMismatch { left: Sequence, right: Sequence },

    #[error("position {position} is outside guess '{guess}'")]
    PositionOutOfRange { guess: Sequence, position: usize },

    #[error("invalid feedback pattern '{0}'")]
    InvalidPattern(String),
}

/// Feedback computed for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    guess: Sequence,
    categories: BTreeMap<usize, FeedbackCategory>,
}

impl Feedback {
    /// Build feedback from explicit `(position, category)` entries
    ///
    /// Later entries for the same position replace earlier ones. The entries
    /// need not cover every position; partial feedback is what `merge` combines.
    ///
    /// # Errors
    /// Returns `FeedbackError::PositionOutOfRange` if a position does not
    /// exist in the guess.
    pub fn new<I>(guess: Sequence, entries: I) -> Result<Self, FeedbackError>
    where
        I: IntoIterator<Item = (usize, FeedbackCategory)>,
    {
        let mut categories = BTreeMap::new();
        for (position, category) in entries {
            if position >= guess.len() {
                return Err(FeedbackError::PositionOutOfRange { guess, position });
            }
            categories.insert(position, category);
        }

        Ok(Self { guess, categories })
    }

    /// Used by the classifier, which always covers every position.
    pub(crate) const fn from_parts(
        guess: Sequence,
        categories: BTreeMap<usize, FeedbackCategory>,
    ) -> Self {
        Self { guess, categories }
    }

    /// Parse a pattern like "GY-GY" or "🟩🟨⬜🟩🟨" for the given guess
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidPattern` if the pattern length differs
    /// from the guess or contains an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use matchle::core::{Feedback, FeedbackCategory, Sequence};
    ///
    /// let guess = Sequence::new("crane").unwrap();
    /// let feedback = Feedback::parse(guess, "GY-GY").unwrap();
    /// assert_eq!(feedback.category_at(1), Some(FeedbackCategory::Partial));
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    pub fn parse(guess: Sequence, pattern: &str) -> Result<Self, FeedbackError> {
        let invalid = || FeedbackError::InvalidPattern(pattern.to_string());

        let categories = pattern
            .chars()
            .map(FeedbackCategory::from_symbol)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;

        if categories.len() != guess.len() {
            return Err(invalid());
        }

        Self::new(guess, categories.into_iter().enumerate())
    }

    /// The guess this feedback was computed for
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Sequence {
        &self.guess
    }

    /// Category for the guessed character at `position`, if recorded
    #[inline]
    #[must_use]
    pub fn category_at(&self, position: usize) -> Option<FeedbackCategory> {
        self.categories.get(&position).copied()
    }

    /// Iterate over recorded `(position, category)` pairs in position order
    pub fn entries(&self) -> impl Iterator<Item = (usize, FeedbackCategory)> + '_ {
        self.categories.iter().map(|(&p, &c)| (p, c))
    }

    /// True iff every position of the guess is `Exact`
    #[must_use]
    pub fn is_win(&self) -> bool {
        (0..self.guess.len()).all(|p| self.category_at(p) == Some(FeedbackCategory::Exact))
    }

    /// True iff `key` would have produced every recorded category
    ///
    /// Only recorded positions are checked, so partial feedback admits every
    /// key that agrees with what was observed. A key of another length is
    /// never admitted.
    #[must_use]
    pub fn admits(&self, key: &Sequence) -> bool {
        key.len() == self.guess.len()
            && self.entries().all(|(position, category)| {
                self.guess.get(position).is_some_and(|character| {
                    classify_char(key, IndexedChar::new(position, character)) == category
                })
            })
    }

    /// Combine two observations of the same guess
    ///
    /// The result holds the union of both maps; on overlapping positions the
    /// entries of `other` win.
    ///
    /// # Errors
    /// Returns `FeedbackError::GuessMismatch` if the feedbacks were computed
    /// for different guesses.
    pub fn merge(&self, other: &Self) -> Result<Self, FeedbackError> {
        if self.guess != other.guess {
            return Err(FeedbackError::GuessMismatch {
                left: self.guess.clone(),
                right: other.guess.clone(),
            });
        }

        let mut categories = self.categories.clone();
        categories.extend(other.entries());

        Ok(Self {
            guess: self.guess.clone(),
            categories,
        })
    }

    /// Render as emoji, one square per guess position
    ///
    /// Positions without a recorded category render as '⬛'.
    #[must_use]
    pub fn to_emoji(&self) -> String {
        (0..self.guess.len())
            .map(|p| self.category_at(p).map_or('⬛', FeedbackCategory::emoji))
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guess: {}\nResult: ", self.guess)?;
        let mut first = true;
        for (position, category) in self.entries() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            // Entries are range-checked on construction
            let character = self.guess.get(position).unwrap_or('?');
            write!(f, "{position}-{character}: {category}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackCategory::{Absent, Exact, Partial};

    fn seq(text: &str) -> Sequence {
        Sequence::new(text).unwrap()
    }

    fn test_feedback() -> Feedback {
        Feedback::new(
            seq("test"),
            [(0, Exact), (1, Partial), (2, Absent), (3, Exact)],
        )
        .unwrap()
    }

    #[test]
    fn feedback_accessors() {
        let feedback = test_feedback();
        assert_eq!(feedback.guess(), &seq("test"));
        assert_eq!(feedback.category_at(0), Some(Exact));
        assert_eq!(feedback.category_at(1), Some(Partial));
        assert_eq!(feedback.category_at(2), Some(Absent));
        assert_eq!(feedback.category_at(3), Some(Exact));
        assert_eq!(feedback.category_at(4), None);
    }

    #[test]
    fn feedback_rejects_out_of_range_position() {
        let result = Feedback::new(seq("abc"), [(3, Exact)]);
        assert!(matches!(
            result,
            Err(FeedbackError::PositionOutOfRange { position: 3, .. })
        ));
    }

    #[test]
    fn is_win_all_exact() {
        let feedback = Feedback::new(seq("test"), (0..4).map(|p| (p, Exact))).unwrap();
        assert!(feedback.is_win());
    }

    #[test]
    fn is_win_false_with_partial() {
        assert!(!test_feedback().is_win());
    }

    #[test]
    fn is_win_false_when_positions_missing() {
        let feedback = Feedback::new(seq("test"), [(0, Exact)]).unwrap();
        assert!(!feedback.is_win());
    }

    #[test]
    fn admits_checks_recorded_positions_only() {
        let feedback = Feedback::new(seq("apple"), [(4, Exact)]).unwrap();
        assert!(feedback.admits(&seq("apple")));
        assert!(feedback.admits(&seq("grape")));
        assert!(!feedback.admits(&seq("peach")));
        assert!(!feedback.admits(&seq("apples")));
    }

    #[test]
    fn admits_full_feedback_matches_classifier() {
        let key = seq("peach");
        let feedback = crate::core::classify(&key, &seq("grape")).unwrap();
        assert!(feedback.admits(&key));
        assert!(!feedback.admits(&seq("berry")));
    }

    #[test]
    fn merge_unions_entries() {
        let left = Feedback::new(seq("test"), [(0, Exact), (1, Partial)]).unwrap();
        let right = Feedback::new(seq("test"), [(2, Absent), (3, Exact)]).unwrap();

        let merged = left.merge(&right).unwrap();
        assert_eq!(merged, test_feedback());
    }

    #[test]
    fn merge_prefers_other_on_overlap() {
        let left = Feedback::new(seq("test"), [(0, Absent), (1, Partial)]).unwrap();
        let right = Feedback::new(seq("test"), [(0, Exact)]).unwrap();

        let merged = left.merge(&right).unwrap();
        assert_eq!(merged.category_at(0), Some(Exact));
        assert_eq!(merged.category_at(1), Some(Partial));
    }

    #[test]
    fn merge_is_idempotent() {
        let feedback = test_feedback();
        assert_eq!(feedback.merge(&feedback).unwrap(), feedback);
    }

    #[test]
    fn merge_rejects_different_guesses() {
        let left = Feedback::new(seq("test"), [(0, Exact)]).unwrap();
        let right = Feedback::new(seq("fail"), [(0, Absent)]).unwrap();

        assert!(matches!(
            left.merge(&right),
            Err(FeedbackError::GuessMismatch { .. })
        ));
    }

    #[test]
    fn display_lists_positions_in_order() {
        assert_eq!(
            test_feedback().to_string(),
            "Guess: test\nResult: 0-t: EXACT, 1-e: PARTIAL, 2-s: ABSENT, 3-t: EXACT"
        );
    }

    #[test]
    fn parse_valid_patterns() {
        let p1 = Feedback::parse(seq("test"), "GY-G").unwrap();
        let p2 = Feedback::parse(seq("test"), "🟩🟨⬜🟩").unwrap();
        let p3 = Feedback::parse(seq("test"), "gy_g").unwrap();

        assert_eq!(p1, test_feedback());
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
    }

    #[test]
    fn parse_invalid_patterns() {
        assert!(Feedback::parse(seq("test"), "GY-").is_err()); // Too short
        assert!(Feedback::parse(seq("test"), "GY-GG").is_err()); // Too long
        assert!(Feedback::parse(seq("test"), "GX-G").is_err()); // Invalid symbol
    }

    #[test]
    fn emoji_marks_missing_positions() {
        let feedback = Feedback::new(seq("test"), [(0, Exact), (2, Absent)]).unwrap();
        assert_eq!(feedback.to_emoji(), "🟩⬛⬜⬛");
    }
}
