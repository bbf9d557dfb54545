//! Ladder value object
//!
//! A ladder is the ordered list of words visited by one candidate path through
//! the dictionary. Ladders only grow; branching is done by cloning.

use std::fmt;

/// An ordered sequence of words, each one letter away from the next
///
/// `Clone` produces a fully independent copy, so sibling branches created
/// during a search never share storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<String>,
}

impl Ladder {
    /// Create a ladder seeded with its first word
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Ladder;
    ///
    /// let mut ladder = Ladder::new("hot");
    /// ladder.push("dot");
    /// ladder.push("dog");
    ///
    /// assert_eq!(ladder.last_word(), Some("dog"));
    /// assert_eq!(ladder.num_transformations(), 2);
    /// ```
    #[must_use]
    pub fn new(first_word: impl Into<String>) -> Self {
        Self {
            words: vec![first_word.into()],
        }
    }

    /// Append a word to the end of the ladder
    pub fn push(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    /// All words in order, first to last
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The most recently added word, or `None` for an empty ladder
    #[inline]
    #[must_use]
    pub fn last_word(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    /// The first word, or `None` for an empty ladder
    #[inline]
    #[must_use]
    pub fn first_word(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Number of one-letter steps the ladder represents (word count minus one)
    #[inline]
    #[must_use]
    pub fn num_transformations(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// Number of words in the ladder
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if no word has been added yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Consume the ladder and return its words
    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_ladder_has_zero_transformations() {
        let ladder = Ladder::new("hot");
        assert_eq!(ladder.words(), &["hot".to_string()]);
        assert_eq!(ladder.last_word(), Some("hot"));
        assert_eq!(ladder.num_transformations(), 0);
        assert_eq!(ladder.len(), 1);
    }

    #[test]
    fn empty_ladder() {
        let ladder = Ladder::default();
        assert!(ladder.is_empty());
        assert_eq!(ladder.last_word(), None);
        assert_eq!(ladder.first_word(), None);
        assert_eq!(ladder.num_transformations(), 0);
    }

    #[test]
    fn push_appends_in_order() {
        let mut ladder = Ladder::default();
        ladder.push("cold");
        ladder.push("cord");
        ladder.push("card");

        assert_eq!(ladder.first_word(), Some("cold"));
        assert_eq!(ladder.last_word(), Some("card"));
        assert_eq!(ladder.num_transformations(), 2);
        assert_eq!(ladder.into_words(), vec!["cold", "cord", "card"]);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = Ladder::new("hot");
        original.push("dot");

        let mut copy = original.clone();
        copy.push("dog");
        original.push("lot");

        assert_eq!(original.words(), &["hot", "dot", "lot"]);
        assert_eq!(copy.words(), &["hot", "dot", "dog"]);
    }

    #[test]
    fn display_joins_with_arrows() {
        let mut ladder = Ladder::new("hot");
        ladder.push("dot");
        assert_eq!(format!("{ladder}"), "hot -> dot");
    }
}
