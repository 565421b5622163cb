//! Word list loading utilities
//!
//! Word lists are newline-delimited, one 5-letter word per line. Blank lines
//! are ignored; any other malformed line is an error.

use super::DICTIONARY;
use crate::core::{CandidateSet, Word, WordError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for dictionary loading
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Line {line}: '{text}' is not a valid word: {source}")]
    InvalidWord {
        line: usize,
        text: String,
        #[source]
        source: WordError,
    },
    #[error("Word list contains no words")]
    Empty,
}

/// Load the embedded dictionary
///
/// # Errors
///
/// Returns `DictionaryError` if the embedded list is malformed or empty.
///
/// # Examples
/// ```
/// use wordle_advisor::wordlists::{DICTIONARY_COUNT, load_dictionary};
///
/// let dictionary = load_dictionary().unwrap();
/// assert!(dictionary.len() <= DICTIONARY_COUNT);
/// ```
pub fn load_dictionary() -> Result<CandidateSet, DictionaryError> {
    parse_lines(DICTIONARY.iter().copied())
}

/// Load words from a file
///
/// # Errors
///
/// Returns `DictionaryError` if the file cannot be read, contains an invalid
/// word, or holds no words at all.
///
/// # Examples
/// ```no_run
/// use wordle_advisor::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CandidateSet, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content)?;
    tracing::debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Parse a newline-delimited word list
///
/// Duplicates keep their first position.
///
/// # Errors
///
/// Returns `DictionaryError::InvalidWord` for the first malformed line and
/// `DictionaryError::Empty` if there are no words.
pub fn parse_word_list(content: &str) -> Result<CandidateSet, DictionaryError> {
    parse_lines(content.lines())
}

fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Result<CandidateSet, DictionaryError> {
    let words = lines
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            Word::new(line).map_err(|source| DictionaryError::InvalidWord {
                line: index + 1,
                text: line.trim().to_string(),
                source,
            })
        })
        .collect::<Result<Vec<Word>, _>>()?;

    if words.is_empty() {
        return Err(DictionaryError::Empty);
    }

    Ok(CandidateSet::from_words(words))
}
