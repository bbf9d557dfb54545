//! Masked pattern keys
//!
//! A key is a word with the letter at one position replaced by a wildcard,
//! tagged with that position. Two words share a key exactly when they agree at
//! every other position.

use std::fmt;

/// Placeholder written over the masked letter
pub(crate) const WILDCARD: char = '_';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct PatternKey {
    position: usize,
    masked: Box<str>,
}

impl PatternKey {
    /// Mask the letter at `position` (counted in chars)
    pub(crate) fn masked_at(word: &str, position: usize) -> Self {
        let masked = word
            .chars()
            .enumerate()
            .map(|(i, ch)| if i == position { WILDCARD } else { ch })
            .collect();

        Self { position, masked }
    }

    /// One key per letter position of `word`
    pub(crate) fn all_for(word: &str) -> impl Iterator<Item = Self> + '_ {
        (0..word.chars().count()).map(move |position| Self::masked_at(word, position))
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_each_position() {
        let keys: Vec<String> = PatternKey::all_for("hot").map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["_ot", "h_t", "ho_"]);
    }

    #[test]
    fn neighbours_share_exactly_one_key() {
        let hot: Vec<_> = PatternKey::all_for("hot").collect();
        let dot: Vec<_> = PatternKey::all_for("dot").collect();

        let shared = hot.iter().filter(|k| dot.contains(k)).count();
        assert_eq!(shared, 1);
    }

    #[test]
    fn literal_wildcard_does_not_alias_other_positions() {
        // Both render as "__c", but "_bc" and "x_c" differ in two places
        let first = PatternKey::masked_at("_bc", 1);
        let second = PatternKey::masked_at("x_c", 0);
        assert_eq!(first.to_string(), second.to_string());
        assert_ne!(first, second);
    }

    #[test]
    fn empty_word_has_no_keys() {
        assert_eq!(PatternKey::all_for("").count(), 0);
    }
}
