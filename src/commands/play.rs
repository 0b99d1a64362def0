//! Interactive play mode
//!
//! Line-oriented game loop: the player types guesses, invalid input is
//! reported and asked for again, and the key is revealed at the end.

use crate::corpus::Corpus;
use crate::game::{Game, GuessError};
use crate::output::formatters::colorize_feedback;
use crate::solver::Strategy;
use anyhow::Result;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};

/// Configuration for one interactive round
pub struct PlayConfig {
    pub max_attempts: usize,
    pub seed: Option<u64>,
    /// Strategy used to offer a hint before each guess, if any
    pub hint: Option<Strategy>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            seed: None,
            hint: None,
        }
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { attempts: usize },
    Lost,
    Quit,
}

/// Run an interactive round on stdin and stdout
///
/// # Errors
///
/// Returns an error if the corpus is empty or there's an I/O error.
pub fn run_play(corpus: &Corpus, config: &PlayConfig) -> Result<Outcome> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let mut game = Game::with_random_key(corpus, config.max_attempts, &mut rng)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_round(&mut game, config.hint, &mut stdin.lock(), &mut stdout.lock())
}

/// Drive a game from `input`, writing prompts and feedback to `out`
///
/// End of input or `quit` abandons the round.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if the hint solver fails.
pub fn play_round<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    hint: Option<Strategy>,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome> {
    writeln!(
        out,
        "Guess the {}-letter word in {} attempts. Type 'quit' to give up.",
        game.key().len(),
        game.max_attempts()
    )?;

    while !game.is_over() {
        if let Some(strategy) = hint {
            let solver = game.solver(strategy)?;
            writeln!(
                out,
                "{} {} ({} candidates)",
                "Hint:".bright_black(),
                solver.guess()?.text().to_uppercase().bright_cyan(),
                solver.candidates().len()
            )?;
        }

        let turn = game.history().len() + 1;
        write!(out, "Guess {turn}/{}: ", game.max_attempts())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return finish(game, Outcome::Quit, out);
        }

        let line = line.trim();
        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            return finish(game, Outcome::Quit, out);
        }

        match game.make_guess(line) {
            Ok(feedback) => {
                writeln!(out, "  {}  {}", colorize_feedback(feedback), feedback.to_emoji())?;
            }
            Err(GuessError::GameOver) => break,
            Err(e) => writeln!(out, "{}", format!("❌ {e}").red())?,
        }
    }

    let outcome = if game.is_win() {
        Outcome::Won {
            attempts: game.history().len(),
        }
    } else {
        Outcome::Lost
    };
    finish(game, outcome, out)
}

fn finish<W: Write>(game: &Game<'_>, outcome: Outcome, out: &mut W) -> Result<Outcome> {
    match outcome {
        Outcome::Won { attempts } => writeln!(
            out,
            "\n{}",
            format!(
                "🎉 Solved in {attempts} {}!",
                if attempts == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        )?,
        Outcome::Lost | Outcome::Quit => writeln!(
            out,
            "\n{} {}",
            "The word was".yellow(),
            game.key().text().to_uppercase().bright_yellow().bold()
        )?,
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Sequence;
    use crate::corpus::tests::corpus_of;
    use std::io::Cursor;

    fn fruit() -> Corpus {
        corpus_of(&["apple", "berry", "grape", "peach"])
    }

    fn run(game: &mut Game<'_>, hint: Option<Strategy>, script: &str) -> (Outcome, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let outcome = play_round(game, hint, &mut input, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_round() {
        let corpus = fruit();
        let mut game = Game::new(&corpus, Sequence::new("peach").unwrap(), 6).unwrap();
        let (outcome, output) = run(&mut game, None, "apple\npeach\n");

        assert_eq!(outcome, Outcome::Won { attempts: 2 });
        assert!(output.contains("Solved in 2 guesses"));
    }

    #[test]
    fn invalid_input_is_reprompted() {
        let corpus = fruit();
        let mut game = Game::new(&corpus, Sequence::new("apple").unwrap(), 6).unwrap();
        let (outcome, output) = run(&mut game, None, "\npear\nlemon\nAPPLE\n");

        assert_eq!(outcome, Outcome::Won { attempts: 1 });
        assert!(output.contains("blank"));
        assert!(output.contains("must have 5 letters"));
        assert!(output.contains("not in the word list"));
    }

    #[test]
    fn uppercase_word_list_can_be_won() {
        let corpus = corpus_of(&["APPLE", "GRAPE"]);
        let mut game = Game::new(&corpus, Sequence::new("APPLE").unwrap(), 6).unwrap();
        let (outcome, output) = run(&mut game, None, "GRAPE\napple\n");

        assert_eq!(outcome, Outcome::Won { attempts: 2 });
        assert!(!output.contains("not in the word list"));
        assert_eq!(game.history()[1].guess(), &Sequence::new("APPLE").unwrap());
    }

    #[test]
    fn losing_round_reveals_key() {
        let corpus = fruit();
        let mut game = Game::new(&corpus, Sequence::new("apple").unwrap(), 2).unwrap();
        let (outcome, output) = run(&mut game, None, "berry\ngrape\npeach\n");

        assert_eq!(outcome, Outcome::Lost);
        assert_eq!(game.history().len(), 2);
        assert!(output.contains("APPLE"));
    }

    #[test]
    fn end_of_input_quits() {
        let corpus = fruit();
        let mut game = Game::new(&corpus, Sequence::new("grape").unwrap(), 6).unwrap();
        let (outcome, output) = run(&mut game, None, "berry\n");

        assert_eq!(outcome, Outcome::Quit);
        assert!(output.contains("GRAPE"));
    }

    #[test]
    fn quit_command() {
        let corpus = fruit();
        let mut game = Game::new(&corpus, Sequence::new("grape").unwrap(), 6).unwrap();
        let (outcome, _) = run(&mut game, None, "quit\napple\n");

        assert_eq!(outcome, Outcome::Quit);
        assert!(game.history().is_empty());
    }

    #[test]
    fn hints_are_printed() {
        let corpus = fruit();
        let mut game = Game::new(&corpus, Sequence::new("berry").unwrap(), 6).unwrap();
        let (_, output) = run(&mut game, Some(Strategy::WorstCase), "berry\n");

        assert!(output.contains("Hint:"));
        assert!(output.contains("4 candidates"));
    }
}
