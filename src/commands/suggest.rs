//! Suggestion command
//!
//! Ranks guesses given feedback the player has already seen, for use alongside
//! a game played elsewhere.

use crate::core::{Feedback, Sequence};
use crate::corpus::Corpus;
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result, bail};

/// A ranked guess as reported to the user
pub struct SuggestedGuess {
    pub word: Sequence,
    pub score: usize,
    pub is_candidate: bool,
}

/// Result of a suggestion query
pub struct Suggestion {
    pub strategy: Strategy,
    pub history: Vec<Feedback>,
    pub candidates: Vec<Sequence>,
    pub ranking: Vec<SuggestedGuess>,
}

impl Suggestion {
    /// The top-ranked guess
    #[must_use]
    pub fn best(&self) -> Option<&SuggestedGuess> {
        self.ranking.first()
    }
}

/// Parse one `guess:pattern` observation, e.g. `crane:GY--G`
///
/// # Errors
///
/// Returns an error if the separator is missing, the guess has the wrong
/// length or the pattern contains unknown symbols.
pub fn parse_observation(text: &str, word_length: usize) -> Result<Feedback> {
    let Some((guess, pattern)) = text.trim().split_once(':') else {
        bail!("Observation '{text}' must look like guess:pattern");
    };

    let guess = Sequence::new(guess.trim())
        .with_context(|| format!("Invalid guess in observation '{text}'"))?;
    if guess.len() != word_length {
        bail!(
            "Guess '{guess}' has {} letters, expected {word_length}",
            guess.len()
        );
    }

    Feedback::parse(guess, pattern.trim())
        .with_context(|| format!("Invalid pattern in observation '{text}'"))
}

/// Rank the `top` best guesses after the given observations
///
/// # Errors
///
/// Returns an error if no corpus member is consistent with the history.
pub fn suggest(
    corpus: &Corpus,
    strategy: Strategy,
    history: Vec<Feedback>,
    top: usize,
) -> Result<Suggestion> {
    let solver = Solver::new(strategy, corpus, &history)
        .context("No word in the list is consistent with that feedback")?;

    let ranking = solver
        .ranking(top)
        .into_iter()
        .map(|ranked| SuggestedGuess {
            word: ranked.guess.clone(),
            score: ranked.score,
            is_candidate: ranked.is_candidate,
        })
        .collect();

    Ok(Suggestion {
        strategy,
        history,
        candidates: solver.candidates().iter().cloned().collect(),
        ranking,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackCategory;
    use crate::corpus::tests::corpus_of;

    fn fruit() -> Corpus {
        corpus_of(&["apple", "berry", "grape", "peach"])
    }

    #[test]
    fn parse_observation_accepts_symbols() {
        let feedback = parse_observation("grape:--YYG", 5).unwrap();

        assert_eq!(feedback.guess(), &Sequence::new("grape").unwrap());
        assert_eq!(feedback.category_at(0), Some(FeedbackCategory::Absent));
        assert_eq!(feedback.category_at(4), Some(FeedbackCategory::Exact));
    }

    #[test]
    fn parse_observation_rejects_garbage() {
        assert!(parse_observation("grape", 5).is_err());
        assert!(parse_observation("pear:GGGG", 5).is_err());
        assert!(parse_observation("grape:GGXGG", 5).is_err());
        assert!(parse_observation("grape:GG", 5).is_err());
    }

    #[test]
    fn suggest_without_history_ranks_whole_corpus() {
        let corpus = fruit();
        let suggestion = suggest(&corpus, Strategy::WorstCase, Vec::new(), 10).unwrap();

        assert_eq!(suggestion.candidates.len(), 4);
        assert_eq!(suggestion.ranking.len(), 4);
        assert!(suggestion.ranking.iter().all(|g| g.is_candidate));
        assert!(
            suggestion
                .ranking
                .windows(2)
                .all(|pair| pair[0].score <= pair[1].score)
        );
    }

    #[test]
    fn suggest_narrows_by_history() {
        let corpus = fruit();
        let history = vec![parse_observation("grape:--YYG", 5).unwrap()];
        let suggestion = suggest(&corpus, Strategy::AverageCase, history, 3).unwrap();

        assert_eq!(suggestion.candidates, vec![Sequence::new("apple").unwrap()]);
        assert_eq!(
            suggestion.best().map(|g| &g.word),
            Some(&Sequence::new("apple").unwrap())
        );
    }

    #[test]
    fn suggest_impossible_history_is_an_error() {
        let corpus = fruit();
        let history = vec![parse_observation("apple:GGGGY", 5).unwrap()];
        assert!(suggest(&corpus, Strategy::WorstCase, history, 3).is_err());
    }
}
