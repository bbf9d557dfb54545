//! Index consistency check
//!
//! Builds one pattern index per word length found in a dictionary and verifies
//! every neighbour relation it produces.

use crate::core::{is_legal_transform, word_length};
use crate::error::LadderError;
use crate::index::PatternIndex;
use crate::wordlists::loader::words_of_length;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fmt;
use std::time::{Duration, Instant};

/// A neighbour relation that breaks an index invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The lookup returned a word that was never indexed
    NotMember { word: String, neighbor: String },
    /// The neighbour is not exactly one letter away
    NotOneLetter { word: String, neighbor: String },
    /// The lookup returned the query word itself
    SelfNeighbor { word: String },
    /// `neighbor` is listed for `word` but not the other way round
    NotReciprocal { word: String, neighbor: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotMember { word, neighbor } => {
                write!(f, "{word}: neighbour '{neighbor}' is not in the dictionary")
            }
            Self::NotOneLetter { word, neighbor } => {
                write!(f, "{word}: neighbour '{neighbor}' is not one letter away")
            }
            Self::SelfNeighbor { word } => write!(f, "{word}: listed as its own neighbour"),
            Self::NotReciprocal { word, neighbor } => {
                write!(f, "{word}: '{neighbor}' does not link back")
            }
        }
    }
}

/// Per-length summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthSummary {
    pub length: usize,
    pub words: usize,
    pub buckets: usize,
    /// Directed neighbour links (each undirected pair counts twice)
    pub links: usize,
    /// Words with no neighbour at all
    pub isolated: usize,
}

/// Result of checking a dictionary
#[derive(Debug)]
pub struct CheckReport {
    pub lengths: Vec<LengthSummary>,
    pub violations: Vec<Violation>,
    pub duration: Duration,
}

impl CheckReport {
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.lengths.iter().map(|summary| summary.words).sum()
    }
}

/// Check every word of `dictionary` against the index built for its length
///
/// # Errors
///
/// Returns an error if the dictionary contains an empty word.
pub fn check_index<S: AsRef<str> + Sync>(dictionary: &[S]) -> Result<CheckReport, LadderError> {
    let started = Instant::now();

    let mut lengths = BTreeSet::new();
    for word in dictionary {
        match word_length(word.as_ref()) {
            0 => return Err(LadderError::EmptyWord),
            length => {
                lengths.insert(length);
            }
        }
    }

    let mut summaries = Vec::with_capacity(lengths.len());
    let mut violations = Vec::new();

    for length in lengths {
        let index = PatternIndex::new(words_of_length(dictionary, length))?;
        let words: Vec<&str> = index.words().collect();

        let per_word: Vec<(usize, Vec<Violation>)> = words
            .par_iter()
            .map(|&word| check_word(&index, word))
            .collect::<Result<_, _>>()?;

        let links = per_word.iter().map(|(count, _)| count).sum();
        let isolated = per_word.iter().filter(|(count, _)| *count == 0).count();
        violations.extend(per_word.into_iter().flat_map(|(_, found)| found));

        summaries.push(LengthSummary {
            length,
            words: index.len(),
            buckets: index.bucket_count(),
            links,
            isolated,
        });
    }

    Ok(CheckReport {
        lengths: summaries,
        violations,
        duration: started.elapsed(),
    })
}

fn check_word(index: &PatternIndex, word: &str) -> Result<(usize, Vec<Violation>), LadderError> {
    let neighbors = index.transformable_words(word)?;
    let mut violations = Vec::new();

    for &neighbor in &neighbors {
        if neighbor == word {
            violations.push(Violation::SelfNeighbor {
                word: word.to_string(),
            });
            continue;
        }
        if !index.contains(neighbor) {
            violations.push(Violation::NotMember {
                word: word.to_string(),
                neighbor: neighbor.to_string(),
            });
            continue;
        }
        if !is_legal_transform(word, neighbor) {
            violations.push(Violation::NotOneLetter {
                word: word.to_string(),
                neighbor: neighbor.to_string(),
            });
        }
        if !index.transformable_words(neighbor)?.contains(&word) {
            violations.push(Violation::NotReciprocal {
                word: word.to_string(),
                neighbor: neighbor.to_string(),
            });
        }
    }

    Ok((neighbors.len(), violations))
}
