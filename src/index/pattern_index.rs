//! Dictionary organised into wildcard buckets

use super::key::PatternKey;
use crate::core::{is_legal_transform, word_length};
use crate::error::LadderError;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Read-only index from masked patterns to the dictionary words sharing them
///
/// Every word is stored once and appears in exactly one bucket per letter
/// position. All words share one length, fixed by the first dictionary entry.
/// Once built the index is immutable and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct PatternIndex {
    /// Unique words in sorted order; bucket entries are positions in here
    words: Vec<String>,
    buckets: FxHashMap<PatternKey, Vec<usize>>,
    word_length: Option<usize>,
}

impl PatternIndex {
    /// Build an index from a dictionary
    ///
    /// Duplicate entries collapse and input order does not matter. An empty
    /// dictionary gives an empty index.
    ///
    /// # Errors
    /// - `LadderError::EmptyWord` if any entry is empty
    /// - `LadderError::MixedLength` if an entry differs in length from the first
    ///
    /// # Examples
    /// ```
    /// use word_ladder::index::PatternIndex;
    ///
    /// let index = PatternIndex::new(["hot", "dot", "dog", "cog"]).unwrap();
    /// assert_eq!(index.transformable_words("dot").unwrap(), vec!["dog", "hot"]);
    ///
    /// assert!(PatternIndex::new(["hot", "door"]).is_err());
    /// ```
    pub fn new<I, S>(dictionary: I) -> Result<Self, LadderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut word_length = None;
        let mut unique: FxHashSet<String> = FxHashSet::default();

        for entry in dictionary {
            let word = entry.as_ref();
            let found = word_length_checked(word)?;

            match word_length {
                None => word_length = Some(found),
                Some(expected) if expected != found => {
                    return Err(LadderError::MixedLength {
                        word: word.to_string(),
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }

            if !unique.contains(word) {
                unique.insert(word.to_string());
            }
        }

        let mut words: Vec<String> = unique.into_iter().collect();
        words.sort_unstable();

        let mut buckets: FxHashMap<PatternKey, Vec<usize>> = FxHashMap::default();
        for (id, word) in words.iter().enumerate() {
            for key in PatternKey::all_for(word) {
                buckets.entry(key).or_default().push(id);
            }
        }

        debug!(
            words = words.len(),
            buckets = buckets.len(),
            word_length = ?word_length,
            "built pattern index"
        );

        Ok(Self {
            words,
            buckets,
            word_length,
        })
    }

    /// All dictionary words one legal transform away from `word`, sorted
    ///
    /// The union of the word's buckets is re-checked against
    /// [`is_legal_transform`] before it is returned.
    ///
    /// # Errors
    /// Returns `LadderError::UnknownWord` if `word` is not in the dictionary.
    pub fn transformable_words(&self, word: &str) -> Result<Vec<&str>, LadderError> {
        let id = self
            .position_of(word)
            .ok_or_else(|| LadderError::UnknownWord(word.to_string()))?;

        let mut candidates: Vec<usize> = PatternKey::all_for(word)
            .filter_map(|key| self.buckets.get(&key))
            .flatten()
            .copied()
            .filter(|&other| other != id)
            .collect();

        // Ids follow the sorted word order, so sorting ids sorts the words
        candidates.sort_unstable();
        candidates.dedup();

        Ok(candidates
            .into_iter()
            .map(|other| self.words[other].as_str())
            .filter(|other| is_legal_transform(word, other))
            .collect())
    }

    /// True if `word` was part of the dictionary
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.position_of(word).is_some()
    }

    /// Number of unique words indexed
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the dictionary was empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length shared by every indexed word, `None` for an empty index
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> Option<usize> {
        self.word_length
    }

    /// Number of distinct masked patterns
    #[inline]
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Indexed words in sorted order
    pub fn words(&self) -> impl ExactSizeIterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    fn position_of(&self, word: &str) -> Option<usize> {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .ok()
    }
}

fn word_length_checked(word: &str) -> Result<usize, LadderError> {
    match word_length(word) {
        0 => Err(LadderError::EmptyWord),
        len => Ok(len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 6] = ["hot", "dot", "dog", "lot", "log", "cog"];

    #[test]
    fn every_word_lands_in_one_bucket_per_letter() {
        let index = PatternIndex::new(SAMPLE).unwrap();

        assert_eq!(index.len(), 6);
        assert_eq!(index.word_length(), Some(3));

        let memberships: usize = index.buckets.values().map(Vec::len).sum();
        assert_eq!(memberships, 6 * 3);
    }

    #[test]
    fn transformable_words_are_sorted_neighbours() {
        let index = PatternIndex::new(SAMPLE).unwrap();

        assert_eq!(index.transformable_words("hot").unwrap(), vec!["dot", "lot"]);
        assert_eq!(index.transformable_words("dot").unwrap(), vec!["dog", "hot", "lot"]);
        assert_eq!(index.transformable_words("cog").unwrap(), vec!["dog", "log"]);
    }

    #[test]
    fn lookup_excludes_query_word() {
        let index = PatternIndex::new(SAMPLE).unwrap();
        for word in SAMPLE {
            let neighbours = index.transformable_words(word).unwrap();
            assert!(!neighbours.contains(&word));
        }
    }

    #[test]
    fn isolated_word_has_no_neighbours() {
        let index = PatternIndex::new(["hot", "dot", "xyz"]).unwrap();
        assert!(index.transformable_words("xyz").unwrap().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected() {
        let index = PatternIndex::new(SAMPLE).unwrap();
        assert_eq!(
            index.transformable_words("cat"),
            Err(LadderError::UnknownWord("cat".to_string()))
        );
    }

    #[test]
    fn mixed_lengths_are_rejected() {
        let result = PatternIndex::new(["hot", "dot", "door"]);
        assert_eq!(
            result.unwrap_err(),
            LadderError::MixedLength {
                word: "door".to_string(),
                expected: 3,
                found: 4,
            }
        );
    }

    #[test]
    fn first_word_fixes_the_length() {
        let result = PatternIndex::new(["door", "hot"]);
        assert!(matches!(
            result,
            Err(LadderError::MixedLength { expected: 4, found: 3, .. })
        ));
    }

    #[test]
    fn empty_entries_are_rejected() {
        assert_eq!(
            PatternIndex::new(["hot", ""]).unwrap_err(),
            LadderError::EmptyWord
        );
    }

    #[test]
    fn empty_dictionary_builds_empty_index() {
        let index = PatternIndex::new(Vec::<String>::new()).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.word_length(), None);
        assert_eq!(index.bucket_count(), 0);
        assert!(!index.contains("hot"));
    }

    #[test]
    fn duplicates_collapse() {
        let index = PatternIndex::new(["hot", "dot", "hot", "hot"]).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.transformable_words("dot").unwrap(), vec!["hot"]);
    }

    #[test]
    fn input_order_does_not_matter() {
        let forward = PatternIndex::new(SAMPLE).unwrap();
        let mut reversed_words = SAMPLE;
        reversed_words.reverse();
        let reversed = PatternIndex::new(reversed_words).unwrap();

        for word in SAMPLE {
            assert_eq!(
                forward.transformable_words(word).unwrap(),
                reversed.transformable_words(word).unwrap()
            );
        }
        assert!(forward.words().eq(reversed.words()));
    }

    #[test]
    fn neighbours_are_reciprocal() {
        let index = PatternIndex::new(SAMPLE).unwrap();
        for word in index.words() {
            for neighbour in index.transformable_words(word).unwrap() {
                assert!(
                    index.transformable_words(neighbour).unwrap().contains(&word),
                    "{neighbour} does not link back to {word}"
                );
            }
        }
    }

    #[test]
    fn index_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatternIndex>();
    }
}
