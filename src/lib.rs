//! Matchle
//!
//! A Wordle-style word game engine with a minimax / expected-size guess solver.
//!
//! # Quick Start
//!
//! ```rust
//! use matchle::core::{Sequence, classify};
//! use matchle::corpus::CorpusBuilder;
//! use matchle::solver::{Solver, Strategy};
//!
//! let words = ["apple", "berry", "grape", "peach"];
//! let corpus = CorpusBuilder::empty(5)
//!     .add_all(words.iter().map(|w| Sequence::new(w).unwrap()))
//!     .build()
//!     .unwrap()
//!     .corpus;
//!
//! let key = Sequence::new("peach").unwrap();
//! let guess = Sequence::new("grape").unwrap();
//! let feedback = classify(&key, &guess).unwrap();
//! println!("{}", feedback.to_emoji());
//!
//! let solver = Solver::new(Strategy::WorstCase, &corpus, &[feedback]).unwrap();
//! assert!(solver.candidates().contains(&key));
//! ```

// Core domain types
pub mod core;

// Word collections
pub mod corpus;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Game state and input validation
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
