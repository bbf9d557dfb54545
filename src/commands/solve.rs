//! Ladder solving command
//!
//! Finds a shortest ladder between two words of a possibly mixed-length word
//! list and reports how the search went.

use crate::core::{Ladder, word_length};
use crate::error::LadderError;
use crate::search::LadderSearch;
use crate::wordlists::loader::words_of_length;
use std::time::{Duration, Instant};

/// Configuration for solving one ladder
pub struct SolveConfig {
    pub start: String,
    pub end: String,
    /// Add the start and end words to the dictionary when they are missing
    pub augment: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.trim().to_lowercase(),
            end: end.trim().to_lowercase(),
            augment: true,
        }
    }

    /// Require both words to be in the dictionary already
    #[must_use]
    pub const fn strict(mut self) -> Self {
        self.augment = false;
        self
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub start: String,
    pub end: String,
    /// `None` when no ladder exists
    pub ladder: Option<Ladder>,
    pub rounds: usize,
    /// Words of the start word's length that were searched
    pub dictionary_size: usize,
    pub duration: Duration,
}

impl SolveResult {
    /// Steps in the ladder, or `-1` when there is none
    #[must_use]
    pub fn length_or_sentinel(&self) -> i64 {
        self.ladder
            .as_ref()
            .map_or(-1, |ladder| ladder.num_transformations() as i64)
    }
}

/// Solve a ladder using the words of `dictionary` that match the start word's length
///
/// # Errors
///
/// Returns an error if:
/// - Either word is empty
/// - The end word's length differs from the start word's
/// - Strict mode is on and the start word is not in the dictionary
pub fn solve_ladder<S: AsRef<str>>(
    config: &SolveConfig,
    dictionary: &[S],
) -> Result<SolveResult, LadderError> {
    let length = word_length(&config.start);
    if length == 0 || config.end.is_empty() {
        return Err(LadderError::EmptyWord);
    }

    let mut words = words_of_length(dictionary, length);
    if config.augment {
        for word in [&config.start, &config.end] {
            if word_length(word) == length && !words.contains(word) {
                words.push(word.clone());
            }
        }
    }

    let started = Instant::now();
    let search = LadderSearch::new(&words)?;
    let state = search.search(&config.start, &config.end)?;
    let duration = started.elapsed();

    Ok(SolveResult {
        start: config.start.clone(),
        end: config.end.clone(),
        rounds: state.rounds(),
        ladder: state.into_ladder(),
        dictionary_size: search.index().len(),
        duration,
    })
}
