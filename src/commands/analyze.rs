//! Word analysis command
//!
//! Reports how a single guess would split the current candidates.

use crate::core::Word;
use crate::solver::{FeedbackSource, GuessReport, Solver};
use anyhow::Result;

/// Analyze `word` as the next guess after `history`
///
/// The word does not have to be a remaining candidate.
///
/// # Errors
///
/// Returns an error if the word is invalid, a feedback string is malformed, or
/// the history eliminates every word.
pub fn analyze_word<S: FeedbackSource, T: AsRef<str>>(
    solver: &mut Solver<S>,
    word: &str,
    history: &[T],
) -> Result<GuessReport> {
    let guess = Word::new(word)?;
    solver.apply_history(history)?;
    Ok(solver.analyze(&guess))
}
