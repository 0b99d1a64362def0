//! Guess-ranking algorithms
//!
//! `Strategy` decides how per-key consistency counts are aggregated;
//! `Solver` applies a strategy to a corpus narrowed by earlier feedback.

pub mod calculator;
mod engine;
pub mod strategy;

pub use engine::{RankedGuess, Solver, SolverError};
pub use strategy::Strategy;
