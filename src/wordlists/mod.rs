//! Word lists for ladder search
//!
//! Provides an embedded demo dictionary compiled into the binary and helpers
//! for loading and filtering custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
