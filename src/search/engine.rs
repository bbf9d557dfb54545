//! Main ladder search interface

use super::state::{SearchState, SearchStatus};
use crate::core::{Ladder, word_length};
use crate::error::LadderError;
use crate::index::PatternIndex;
use std::time::Instant;
use tracing::info;

/// Shortest-ladder search over one dictionary
///
/// Owns the pattern index; each query builds its own [`SearchState`], so a
/// single `LadderSearch` can serve many queries, including from several
/// threads at once.
#[derive(Debug, Clone)]
pub struct LadderSearch {
    index: PatternIndex,
}

impl LadderSearch {
    /// Index a dictionary for searching
    ///
    /// # Errors
    /// Returns the index construction error if the dictionary mixes word
    /// lengths or contains an empty word.
    pub fn new<I, S>(dictionary: I) -> Result<Self, LadderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::from_index(PatternIndex::new(dictionary)?))
    }

    /// Search over an index that has already been built
    #[must_use]
    pub const fn from_index(index: PatternIndex) -> Self {
        Self { index }
    }

    /// The pattern index queries run against
    #[inline]
    #[must_use]
    pub const fn index(&self) -> &PatternIndex {
        &self.index
    }

    /// Validate a query and return its initial state without running any round
    ///
    /// # Errors
    /// - `LadderError::EmptyWord` if either word is empty
    /// - `LadderError::UnknownWord` if `start` is not in the dictionary
    /// - `LadderError::LengthMismatch` if `end` differs in length from the
    ///   dictionary words
    pub fn begin(&self, start: &str, end: &str) -> Result<SearchState, LadderError> {
        if start.is_empty() || end.is_empty() {
            return Err(LadderError::EmptyWord);
        }
        if !self.index.contains(start) {
            return Err(LadderError::UnknownWord(start.to_string()));
        }

        // A member start word implies the index has a word length
        let expected = self.index.word_length().unwrap_or_default();
        let found = word_length(end);
        if found != expected {
            return Err(LadderError::LengthMismatch {
                word: end.to_string(),
                expected,
                found,
            });
        }

        Ok(SearchState::new(start, end))
    }

    /// Run a full query and return the finished state
    ///
    /// # Errors
    /// See [`LadderSearch::begin`].
    pub fn search(&self, start: &str, end: &str) -> Result<SearchState, LadderError> {
        let started = Instant::now();
        let state = self.begin(start, end)?.run(&self.index)?;

        info!(
            start,
            end,
            outcome = ?state.status(),
            rounds = state.rounds(),
            steps = ?state.winner().map(Ladder::num_transformations),
            elapsed_us = started.elapsed().as_micros() as u64,
            "ladder search finished"
        );

        Ok(state)
    }

    /// Find one shortest ladder from `start` to `end`
    ///
    /// Returns `Ok(None)` when no ladder exists. `end` does not have to be in
    /// the dictionary, but then no ladder can reach it.
    ///
    /// # Errors
    /// See [`LadderSearch::begin`].
    ///
    /// # Examples
    /// ```
    /// use word_ladder::search::LadderSearch;
    ///
    /// let search = LadderSearch::new(["hot", "dot", "dog", "lot", "log", "cog"]).unwrap();
    /// let ladder = search.shortest_ladder("hot", "cog").unwrap().unwrap();
    ///
    /// assert_eq!(ladder.num_transformations(), 3);
    /// assert_eq!(ladder.first_word(), Some("hot"));
    /// assert_eq!(ladder.last_word(), Some("cog"));
    /// ```
    pub fn shortest_ladder(&self, start: &str, end: &str) -> Result<Option<Ladder>, LadderError> {
        let state = self.search(start, end)?;
        debug_assert_ne!(state.status(), SearchStatus::Active);
        Ok(state.into_ladder())
    }
}

/// Number of steps in the shortest ladder from `start` to `end`
///
/// Works on a copy of `dictionary` with `start` and `end` appended when they
/// are missing, so both are always indexable; the caller's slice is left
/// untouched. Returns `Ok(None)` when no ladder exists.
///
/// # Errors
/// Returns `LadderError::MixedLength` if the dictionary (including the start
/// and end words) mixes lengths, or `LadderError::EmptyWord` for empty words.
///
/// # Examples
/// ```
/// use word_ladder::shortest_transform_length;
///
/// let dictionary = ["hot", "dot", "dog", "lot", "log", "cog"];
/// assert_eq!(shortest_transform_length("hot", "dog", &dictionary).unwrap(), Some(2));
/// assert_eq!(shortest_transform_length("hot", "xyz", &dictionary).unwrap(), None);
/// ```
pub fn shortest_transform_length<S: AsRef<str>>(
    start: &str,
    end: &str,
    dictionary: &[S],
) -> Result<Option<usize>, LadderError> {
    let mut words: Vec<&str> = dictionary.iter().map(|word| word.as_ref()).collect();
    for word in [start, end] {
        if !words.contains(&word) {
            words.push(word);
        }
    }

    let search = LadderSearch::new(words)?;
    Ok(search
        .shortest_ladder(start, end)?
        .map(|ladder| ladder.num_transformations()))
}
