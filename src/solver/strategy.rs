//! Guess-ranking strategies
//!
//! Both strategies score a guess from the same per-key consistency counts and
//! differ only in how those counts are aggregated.

use super::calculator::key_scores;
use crate::core::Sequence;
use std::fmt;
use std::str::FromStr;

/// How per-key consistency counts are folded into one score
///
/// Lower is better for both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Minimax: the largest count over all hypothetical keys
    #[default]
    WorstCase,
    /// The summed count over all hypothetical keys
    ///
    /// Proportional to the expected number of remaining candidates; it is
    /// not divided by the key count.
    AverageCase,
}

impl Strategy {
    pub const ALL: [Self; 2] = [Self::WorstCase, Self::AverageCase];

    /// Create strategy from name string
    ///
    /// Supported names: "worst", "worst-case", "minimax", "average", "average-case", "sum"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "worst" | "worst-case" | "minimax" => Some(Self::WorstCase),
            "average" | "average-case" | "sum" => Some(Self::AverageCase),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WorstCase => "worst-case",
            Self::AverageCase => "average-case",
        }
    }

    /// Fold per-key counts into a single score
    ///
    /// An empty input aggregates to 0.
    #[must_use]
    pub fn aggregate<I>(self, scores: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        let scores = scores.into_iter();
        match self {
            Self::WorstCase => scores.max().unwrap_or(0),
            Self::AverageCase => scores.sum(),
        }
    }

    /// Score `guess` against every sequence in `keys` treated as the true key
    ///
    /// # Examples
    /// ```
    /// use matchle::core::Sequence;
    /// use matchle::solver::Strategy;
    ///
    /// let keys: Vec<Sequence> = ["apple", "grape", "peach", "berry"]
    ///     .iter()
    ///     .map(|w| Sequence::new(w).unwrap())
    ///     .collect();
    /// let guess = Sequence::new("apple").unwrap();
    ///
    /// // Every key is told apart by "apple"
    /// assert_eq!(Strategy::WorstCase.score(&guess, &keys), 1);
    /// assert_eq!(Strategy::AverageCase.score(&guess, &keys), 4);
    /// ```
    #[must_use]
    pub fn score<'a, I>(self, guess: &Sequence, keys: I) -> usize
    where
        I: IntoIterator<Item = &'a Sequence>,
    {
        self.aggregate(key_scores(guess, keys))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| format!("Unknown strategy: {s} (expected 'worst' or 'average')"))
    }
}
