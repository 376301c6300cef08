//! Word lists for the hint engine
//!
//! Vocabularies are read from plain-text files at startup.

pub mod loader;

pub use loader::{load_from_file, words_from_lines, words_from_slice};
