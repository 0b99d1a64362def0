//! Word list loading utilities
//!
//! Turns line-delimited text into a corpus. Each line is trimmed and kept only
//! if it has exactly the configured number of characters.

use crate::core::Sequence;
use crate::corpus::{BuiltCorpus, CorpusBuilder, CorpusError};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while ingesting a word list
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("failed to read word list '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list '{}' has no words of length {word_length}", path.display())]
    NoWords { path: PathBuf, word_length: usize },
}

/// Sequences of `word_length` characters from line-delimited text
#[must_use]
pub fn sequences_from_lines(content: &str, word_length: usize) -> Vec<Sequence> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() == word_length)
        .filter_map(|line| Sequence::new(line).ok())
        .collect()
}

/// Build a corpus from string slices, such as the embedded list
///
/// # Errors
/// Returns `CorpusError::Empty` if no slice has the requested length.
///
/// # Examples
/// ```
/// use matchle::wordlists::loader::corpus_from_slice;
/// use matchle::wordlists::WORDS;
///
/// let corpus = corpus_from_slice(WORDS, 5).unwrap().corpus;
/// assert_eq!(corpus.len(), WORDS.len());
/// ```
pub fn corpus_from_slice(slice: &[&str], word_length: usize) -> Result<BuiltCorpus, CorpusError> {
    let sequences = slice
        .iter()
        .filter_map(|&s| Sequence::new(s.trim()).ok());

    CorpusBuilder::empty(word_length).add_all(sequences).build()
}

/// Load a corpus from a file
///
/// # Errors
/// - `IngestionError::Read` if the file cannot be read
/// - `IngestionError::NoWords` if no line has the requested length
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<BuiltCorpus, IngestionError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| IngestionError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let sequences = sequences_from_lines(&content, word_length);
    debug!(
        "read {} words of length {word_length} from {}",
        sequences.len(),
        path.display()
    );

    CorpusBuilder::empty(word_length)
        .add_all(sequences)
        .build()
        .map_err(|_| IngestionError::NoWords {
            path: path.to_path_buf(),
            word_length,
        })
}
