//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;
pub mod suggest;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{Outcome, PlayConfig, play_round, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use suggest::{SuggestedGuess, Suggestion, parse_observation, suggest};
