//! Command implementations

pub mod benchmark;
pub mod check;
pub mod neighbors;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use check::{CheckReport, LengthSummary, Violation, check_index};
pub use neighbors::{NeighborsResult, list_neighbors};
pub use simple::{run_simple, run_simple_with};
pub use solve::{SolveConfig, SolveResult, solve_ladder};
