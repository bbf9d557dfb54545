//! Word Ladder
//!
//! Finds a shortest chain of one-letter changes between two words, where every
//! word along the way is in a fixed dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::search::LadderSearch;
//!
//! let search = LadderSearch::new(["cold", "cord", "card", "ward", "warm"]).unwrap();
//! let ladder = search.shortest_ladder("cold", "warm").unwrap().unwrap();
//!
//! assert_eq!(ladder.num_transformations(), 4);
//! println!("{ladder}");
//! ```

// Core domain types
pub mod core;

// Error type
mod error;

// Wildcard pattern index
pub mod index;

// Ladder search
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::LadderError;
pub use search::shortest_transform_length;
