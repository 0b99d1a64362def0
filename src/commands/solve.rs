//! Self-play solving command
//!
//! Plays a game against a known key, always taking the solver's choice, and
//! returns the path it took.

use crate::core::{Feedback, Sequence};
use crate::corpus::Corpus;
use crate::game::Game;
use crate::solver::Strategy;
use anyhow::{Context, Result};
use log::debug;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    pub strategy: Strategy,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            max_guesses: 6,
            strategy: Strategy::default(),
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Sequence,
    pub strategy: Strategy,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub feedback: Feedback,
    pub score: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

impl GuessStep {
    #[must_use]
    pub const fn word(&self) -> &Sequence {
        self.feedback.guess()
    }
}

/// Solve a specific word by self-play
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a corpus member or `max_guesses` is 0
/// - The solver cannot narrow or rank the corpus
pub fn solve_word(config: &SolveConfig, corpus: &Corpus) -> Result<SolveResult> {
    let target = Sequence::new(config.target.trim())
        .with_context(|| format!("Invalid target word '{}'", config.target))?;
    let mut game = Game::new(corpus, target, config.max_guesses)?;
    let mut guesses: Vec<GuessStep> = Vec::new();

    while !game.is_over() {
        let solver = game.solver(config.strategy)?;
        let guess = solver.guess()?;
        let score = solver.score(guess)?;
        let candidates_before = solver.candidates().len();

        let feedback = game.make_guess(&guess.text())?.clone();
        let candidates_after = solver.candidates().count_consistent(&feedback);
        debug!(
            "turn {}: '{guess}' {} ({candidates_before} -> {candidates_after})",
            guesses.len() + 1,
            feedback.to_emoji()
        );

        guesses.push(GuessStep {
            feedback,
            score,
            candidates_before,
            candidates_after,
        });
    }

    Ok(SolveResult {
        success: game.is_win(),
        guesses,
        target: game.key().clone(),
        strategy: config.strategy,
    })
}
