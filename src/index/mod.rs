//! Wildcard pattern index
//!
//! Groups dictionary words by masked pattern so the one-letter neighbours of a
//! word are found by looking up a handful of buckets instead of comparing it
//! against the whole dictionary.

mod key;
mod pattern_index;

pub use pattern_index::PatternIndex;
