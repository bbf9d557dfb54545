//! Core domain types for word ladders
//!
//! The legal-transform predicate and the ladder value object. Both are pure and
//! have no knowledge of dictionaries or search state.

mod ladder;
mod transform;

pub use ladder::Ladder;
pub use transform::{is_legal_transform, word_length};
