//! Hint command
//!
//! Applies the game so far and suggests the next guess.

use crate::solver::{FeedbackSource, Hint, SolveError, Solver};

/// Result of a hint request
pub struct HintResult {
    pub vocabulary: usize,
    pub clues: usize,
    pub remaining: usize,
    /// Remaining candidates, when no more than the listing limit
    pub candidates: Vec<String>,
    pub hint: Hint,
}

/// Apply `history` and search for the best next guess
///
/// # Errors
///
/// Returns an error if:
/// - A feedback string is malformed
/// - The history eliminates every word
pub fn run_hint<S: FeedbackSource, T: AsRef<str>>(
    solver: &mut Solver<S>,
    history: &[T],
    list_limit: usize,
) -> Result<HintResult, SolveError> {
    solver.apply_history(history)?;

    let remaining = solver.remaining();
    let candidates = if remaining <= list_limit {
        solver.candidates().map(|w| w.text().to_string()).collect()
    } else {
        Vec::new()
    };

    let hint = solver.best_guess()?;

    Ok(HintResult {
        vocabulary: solver.candidate_set().vocabulary_len(),
        clues: solver.history().len(),
        remaining,
        candidates,
        hint,
    })
}
