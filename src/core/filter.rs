//! Named predicates over sequences
//!
//! Filters describe which corpus members remain plausible keys. They are
//! cheap to clone and safe to share across the rayon worker pool.

use super::{Feedback, Sequence, classify};
use std::fmt;
use std::sync::Arc;

type Predicate = dyn Fn(&Sequence) -> bool + Send + Sync;

/// A named boolean predicate over sequences
#[derive(Clone)]
pub struct CandidateFilter {
    name: String,
    predicate: Arc<Predicate>,
}

impl CandidateFilter {
    /// Wrap an arbitrary predicate
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Sequence) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// A filter that rejects everything
    ///
    /// Represents an impossible constraint, such as feedback for a key and
    /// guess of different lengths.
    #[must_use]
    pub fn always_false() -> Self {
        Self::new("always-false", |_| false)
    }

    /// Keep sequences that, as the key, agree with every category in `feedback`
    #[must_use]
    pub fn consistent_with(feedback: Feedback) -> Self {
        let name = format!("consistent({})", feedback.to_emoji());
        Self::new(name, move |candidate| feedback.admits(candidate))
    }

    /// Filter for the feedback `guess` earns against `key`
    ///
    /// Falls back to `always_false` when key and guess differ in length.
    #[must_use]
    pub fn from_match(key: &Sequence, guess: &Sequence) -> Self {
        classify(key, guess).map_or_else(|_| Self::always_false(), Self::consistent_with)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate the predicate
    #[inline]
    #[must_use]
    pub fn test(&self, sequence: &Sequence) -> bool {
        (self.predicate)(sequence)
    }

    /// Conjunction with another filter; identity when `other` is `None`
    #[must_use]
    pub fn and(self, other: Option<Self>) -> Self {
        match other {
            Some(other) => {
                let name = format!("{} AND {}", self.name, other.name);
                let (left, right) = (self.predicate, other.predicate);
                Self {
                    name,
                    predicate: Arc::new(move |s: &Sequence| left(s) && right(s)),
                }
            }
            None => self,
        }
    }
}

impl fmt::Debug for CandidateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateFilter")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CandidateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
