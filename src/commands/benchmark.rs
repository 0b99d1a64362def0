//! Benchmark command
//!
//! Tests solver performance across many keys.

use crate::core::{Feedback, Sequence, classify};
use crate::corpus::Corpus;
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub strategy: Strategy,
    pub opening: Sequence,
    pub total_words: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess counts of solved keys
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<Sequence>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run benchmark on a set of target keys
///
/// Every game opens with the same word, since with no history the solver's
/// choice does not depend on the key. A key not solved within `max_guesses`
/// counts as a failure and is left out of the distribution.
///
/// # Errors
///
/// Returns an error if the corpus is empty or the progress bar template is invalid.
pub fn run_benchmark(
    corpus: &Corpus,
    strategy: Strategy,
    targets: &[&Sequence],
    max_guesses: usize,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let opening = Solver::new(strategy, corpus, &[])?.guess()?;

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures: Vec<Sequence> = Vec::new();

    for &target in targets {
        let (guesses, solved) = play_out(corpus, strategy, target, opening, max_guesses)?;

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses_seen = max_guesses_seen.max(guesses);
        if solved {
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures.push(target.clone());
        }

        pb.set_message(format!("{target} in {guesses}"));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = targets.len();
    let average_guesses = if total_words == 0 {
        0.0
    } else {
        total_guesses as f64 / total_words as f64
    };

    Ok(BenchmarkResult {
        strategy,
        opening: opening.clone(),
        total_words,
        total_guesses,
        average_guesses,
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses: max_guesses_seen,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Play one game to completion, returning the number of guesses and whether it was solved
fn play_out(
    corpus: &Corpus,
    strategy: Strategy,
    target: &Sequence,
    opening: &Sequence,
    max_guesses: usize,
) -> Result<(usize, bool)> {
    let mut history: Vec<Feedback> = Vec::new();

    while history.len() < max_guesses {
        let guess = if history.is_empty() {
            opening
        } else {
            Solver::new(strategy, corpus, &history)?.guess()?
        };

        let feedback = classify(target, guess)?;
        let solved = feedback.is_win();
        history.push(feedback);

        if solved {
            return Ok((history.len(), true));
        }
    }

    Ok((history.len(), false))
}
