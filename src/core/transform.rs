//! One-letter transform predicate
//!
//! Two words are one legal step apart when they have the same non-zero length
//! and differ in exactly one position. Lengths and positions are counted in
//! `char`s, so multi-byte letters behave like any other letter.

/// Check whether `from` can become `to` by changing exactly one letter
///
/// Returns `false` for words of different lengths, empty words, identical
/// words, and words differing in two or more positions. The relation is
/// symmetric.
///
/// # Examples
/// ```
/// use word_ladder::core::is_legal_transform;
///
/// assert!(is_legal_transform("cold", "cord"));
/// assert!(!is_legal_transform("cold", "cold"));
/// assert!(!is_legal_transform("cold", "card"));
/// assert!(!is_legal_transform("cold", "colds"));
/// ```
#[must_use]
pub fn is_legal_transform(from: &str, to: &str) -> bool {
    let mut from_chars = from.chars();
    let mut to_chars = to.chars();
    let mut differences = 0usize;

    loop {
        match (from_chars.next(), to_chars.next()) {
            (Some(a), Some(b)) => {
                if a != b {
                    differences += 1;
                    if differences > 1 {
                        return false;
                    }
                }
            }
            (None, None) => return differences == 1,
            // One word ran out first
            _ => return false,
        }
    }
}

/// Number of letters in a word
#[inline]
#[must_use]
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}
