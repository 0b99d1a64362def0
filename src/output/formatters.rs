//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackCategory};
use colored::Colorize;

/// Render the guess with one colored tile per letter
///
/// Positions without a recorded category are left uncolored.
#[must_use]
pub fn colorize_feedback(feedback: &Feedback) -> String {
    feedback
        .guess()
        .indexed()
        .map(|ic| {
            let tile = format!(" {} ", ic.character.to_uppercase());
            match feedback.category_at(ic.position) {
                Some(FeedbackCategory::Exact) => tile.black().on_green().bold().to_string(),
                Some(FeedbackCategory::Partial) => tile.black().on_yellow().bold().to_string(),
                Some(FeedbackCategory::Absent) => tile.white().on_bright_black().to_string(),
                None => tile,
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Comma-separated list of up to `limit` words, noting how many were left out
#[must_use]
pub fn word_list<I, S>(words: I, limit: usize) -> String
where
    I: IntoIterator<Item = S>,
    S: ToString,
{
    let mut shown = Vec::new();
    let mut hidden = 0usize;

    for word in words {
        if shown.len() < limit {
            shown.push(word.to_string());
        } else {
            hidden += 1;
        }
    }

    let mut result = shown.join(", ");
    if hidden > 0 {
        result.push_str(&format!(" (+{hidden} more)"));
    }
    result
}
