//! Display functions for command results

use super::formatters::{colorize_feedback, create_progress_bar, word_list};
use crate::commands::{BenchmarkResult, SolveResult, Suggestion};
use crate::corpus::SkippedEntry;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  ({})",
        result.target.text().to_uppercase().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colorize_feedback(&step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Score:      {}", step.score);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print ranked suggestions for the next guess
pub fn print_suggestion(suggestion: &Suggestion) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({})",
        "SUGGESTIONS".bright_cyan().bold(),
        suggestion.strategy
    );
    println!("{}", "═".repeat(60).cyan());

    if !suggestion.history.is_empty() {
        println!("\n📝 {}", "History:".bright_cyan().bold());
        for feedback in &suggestion.history {
            println!("   {}  {}", colorize_feedback(feedback), feedback.to_emoji());
        }
    }

    println!(
        "\n🎯 {} {}",
        suggestion.candidates.len().to_string().bright_yellow().bold(),
        if suggestion.candidates.len() == 1 {
            "candidate remains"
        } else {
            "candidates remain"
        }
    );
    if suggestion.candidates.len() <= 20 {
        println!("   {}", word_list(&suggestion.candidates, 20));
    }

    let Some(top_score) = suggestion.ranking.iter().map(|g| g.score).max() else {
        return;
    };

    println!("\n📊 {}", "Ranking:".bright_cyan().bold());
    for (i, guess) in suggestion.ranking.iter().enumerate() {
        let bar = create_progress_bar(guess.score as f64, top_score as f64, 20);
        let marker = if guess.is_candidate { "●" } else { "○" };
        println!(
            "   {:2}. {} {} [{}] {}",
            i + 1,
            marker.green(),
            guess.word.text().to_uppercase().bold(),
            bar.bright_black(),
            guess.score
        );
    }
    println!("\n   {} possible key  {} probe only", "●".green(), "○".green());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({})",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.strategy
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Opening guess:    {}",
        result.opening.text().to_uppercase().bold()
    );
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if result.failures.is_empty() {
        println!("\n{}", "✅ Every word solved".green().bold());
    } else {
        println!(
            "\n{} {}",
            format!("❌ {} unsolved:", result.failures.len()).red().bold(),
            word_list(&result.failures, 10)
        );
    }
}

/// Report words the corpus builder skipped
pub fn print_skipped(skipped: &[SkippedEntry]) {
    if skipped.is_empty() {
        return;
    }

    println!(
        "{}",
        format!("⚠️  Skipped {} word(s) of the wrong length", skipped.len()).yellow()
    );
    for entry in skipped.iter().take(5) {
        println!("   {}", entry.to_string().bright_black());
    }
}
