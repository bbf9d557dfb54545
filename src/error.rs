//! Error type shared by the index and the search

use thiserror::Error;

/// Failures raised while building a pattern index or starting a query
///
/// A query that simply finds no ladder is not an error; it is reported as
/// `Ok(None)` by the search functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    /// A zero-length word was supplied as a dictionary entry or query word
    #[error("words must contain at least one letter")]
    EmptyWord,

    /// The dictionary mixes word lengths
    #[error("dictionary word '{word}' has {found} letters, expected {expected}")]
    MixedLength {
        word: String,
        expected: usize,
        found: usize,
    },

    /// A lookup was requested for a word that was never indexed
    #[error("word '{0}' is not in the dictionary")]
    UnknownWord(String),

    /// A query word cannot be reached because its length differs from the dictionary
    #[error("word '{word}' has {found} letters but the dictionary holds {expected}-letter words")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },
}
