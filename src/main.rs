//! Matchle - CLI
//!
//! Play a word-guessing game, ask the solver for suggestions, or measure how
//! well it does across a whole word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use matchle::{
    commands::{
        PlayConfig, SolveConfig, parse_observation, run_benchmark, run_play, solve_word, suggest,
    },
    core::Sequence,
    corpus::{BuiltCorpus, Corpus, CorpusBuilder},
    output::{print_benchmark_result, print_skipped, print_solve_result, print_suggestion},
    solver::Strategy,
    wordlists::{
        WORDS,
        loader::{corpus_from_slice, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "matchle",
    about = "Word-guessing game with a minimax / expected-size solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: worst (minimax, default) or average
    #[arg(short, long, global = true, default_value = "worst")]
    strategy: Strategy,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Word length
    #[arg(short, long, global = true, default_value = "5", allow_negative_numbers = true)]
    length: i64,

    /// Show debug logging and per-turn details
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a random word (default)
    Play {
        /// Number of attempts
        #[arg(short, long, default_value = "6")]
        attempts: usize,

        /// Seed for choosing the word
        #[arg(long)]
        seed: Option<u64>,

        /// Show the solver's suggestion before each guess
        #[arg(long)]
        hint: bool,
    },

    /// Suggest the next guess from feedback seen so far
    Suggest {
        /// Observation as guess:pattern, e.g. crane:GY--G (repeatable)
        #[arg(short = 'H', long)]
        history: Vec<String>,

        /// Number of guesses to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Number of attempts
        #[arg(short, long, default_value = "6")]
        attempts: usize,
    },

    /// Benchmark solver performance over the word list
    Benchmark {
        /// Limit number of words to test
        #[arg(long)]
        limit: Option<usize>,

        /// Number of attempts per word
        #[arg(short, long, default_value = "6")]
        attempts: usize,
    },
}

/// Load the corpus selected by the -w flag
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": a custom word list, one word per line
fn load_wordlist(wordlist_mode: &str, length: i64) -> Result<BuiltCorpus> {
    let word_length = CorpusBuilder::try_empty(length)?.word_length();

    let built = match wordlist_mode {
        "embedded" => corpus_from_slice(WORDS, word_length)
            .with_context(|| format!("Embedded word list has no words of length {word_length}"))?,
        path => load_from_file(path, word_length)?,
    };

    info!(
        "loaded {} words of length {word_length} from {wordlist_mode}",
        built.corpus.len()
    );
    Ok(built)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let built = load_wordlist(&cli.wordlist, cli.length)?;
    if cli.verbose {
        print_skipped(&built.skipped);
    }
    let corpus = built.corpus;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        attempts: 6,
        seed: None,
        hint: false,
    });

    match command {
        Commands::Play {
            attempts,
            seed,
            hint,
        } => {
            let config = PlayConfig {
                max_attempts: attempts,
                seed,
                hint: hint.then_some(cli.strategy),
            };
            run_play(&corpus, &config)?;
            Ok(())
        }
        Commands::Suggest { history, top } => {
            run_suggest_command(&corpus, cli.strategy, &history, top)
        }
        Commands::Solve { word, attempts } => {
            let config = SolveConfig {
                target: word,
                max_guesses: attempts,
                strategy: cli.strategy,
            };
            let result = solve_word(&config, &corpus)?;
            print_solve_result(&result, cli.verbose);
            Ok(())
        }
        Commands::Benchmark { limit, attempts } => {
            run_benchmark_command(&corpus, cli.strategy, limit, attempts)
        }
    }
}

fn run_suggest_command(
    corpus: &Corpus,
    strategy: Strategy,
    observations: &[String],
    top: usize,
) -> Result<()> {
    let history = observations
        .iter()
        .map(|text| parse_observation(text, corpus.word_length()))
        .collect::<Result<Vec<_>>>()?;

    let suggestion = suggest(corpus, strategy, history, top)?;
    print_suggestion(&suggestion);
    Ok(())
}

fn run_benchmark_command(
    corpus: &Corpus,
    strategy: Strategy,
    limit: Option<usize>,
    attempts: usize,
) -> Result<()> {
    let targets: Vec<&Sequence> = corpus.iter().take(limit.unwrap_or(usize::MAX)).collect();

    println!(
        "Running {strategy} benchmark on {} of {} words...",
        targets.len(),
        corpus.len()
    );

    let result = run_benchmark(corpus, strategy, &targets, attempts, true)?;
    print_benchmark_result(&result);
    Ok(())
}
