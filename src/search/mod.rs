//! Shortest ladder search
//!
//! A breadth-first search that keeps one explicit [`Ladder`](crate::core::Ladder)
//! per frontier word and branches a ladder whenever its last word has more than
//! one unclaimed neighbour.

mod engine;
mod state;

pub use engine::{LadderSearch, shortest_transform_length};
pub use state::{SearchState, SearchStatus};
