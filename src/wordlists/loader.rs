//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Entries are trimmed and lowercased; anything that is not purely alphabetic
//! is skipped.

use crate::core::word_length;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize).collect())
}

/// Convert an embedded string slice to owned, normalised words
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
/// use word_ladder::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize(s)).collect()
}

/// The words of exactly `length` letters, in their original order
#[must_use]
pub fn words_of_length<S: AsRef<str>>(words: &[S], length: usize) -> Vec<String> {
    words
        .iter()
        .map(|word| word.as_ref())
        .filter(|word| word_length(word) == length)
        .map(str::to_string)
        .collect()
}

fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(trimmed.to_lowercase())
}
