//! Core domain types for the word puzzle
//!
//! Pure types with no solver state: words, per-letter outcomes and the
//! scoring rule that produces them.

mod feedback;
mod word;

pub use feedback::{Clue, Feedback, Outcome};
pub use word::{WORD_LEN, Word, WordError};
