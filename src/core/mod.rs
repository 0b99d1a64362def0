//! Core domain types for the guessing game
//!
//! This module contains the pure building blocks: sequences, feedback, the
//! classifier that produces feedback, and the candidate filters derived from it.
//! Nothing here performs I/O.

mod classifier;
mod feedback;
mod filter;
mod sequence;

pub use classifier::{classify, classify_char};
pub use feedback::{Feedback, FeedbackCategory, FeedbackError};
pub use filter::CandidateFilter;
pub use sequence::{IndexedChar, Sequence, SequenceError};
