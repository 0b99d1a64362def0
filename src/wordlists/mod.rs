//! Word lists for building a corpus
//!
//! Provides the embedded default list and loaders for line-delimited files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::IngestionError;
