//! Neighbour listing command
//!
//! Lists every word one legal transform away from a given word.

use crate::core::word_length;
use crate::error::LadderError;
use crate::index::PatternIndex;
use crate::wordlists::loader::words_of_length;

/// Result of listing a word's neighbours
pub struct NeighborsResult {
    pub word: String,
    pub neighbors: Vec<String>,
    /// Words of the same length that were indexed
    pub dictionary_size: usize,
}

/// List the neighbours of `word` among the same-length words of `dictionary`
///
/// # Errors
///
/// Returns an error if:
/// - The word is empty
/// - The word is not in the dictionary
pub fn list_neighbors<S: AsRef<str>>(
    word: &str,
    dictionary: &[S],
) -> Result<NeighborsResult, LadderError> {
    let word = word.trim().to_lowercase();
    let length = word_length(&word);
    if length == 0 {
        return Err(LadderError::EmptyWord);
    }

    let index = PatternIndex::new(words_of_length(dictionary, length))?;
    let neighbors = index
        .transformable_words(&word)?
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(NeighborsResult {
        word,
        neighbors,
        dictionary_size: index.len(),
    })
}
