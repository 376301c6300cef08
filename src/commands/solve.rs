//! Word solving command
//!
//! Plays a full game against a known target and returns the solution path.

use crate::core::{Clue, Feedback, Word};
use crate::solver::{FeedbackSource, SearchOptions, Solver};
use anyhow::{Result, bail};
use log::info;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Summed remaining-candidate count the search assigned this guess
    pub total: usize,
}

/// Solve `config.target` starting from the full vocabulary
///
/// Each turn asks the engine for its best guess, scores it against the target
/// and feeds the resulting clue back as permanent history.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid or not in the vocabulary
/// - The engine runs out of candidates
pub fn solve_word<S: FeedbackSource>(
    config: SolveConfig,
    vocabulary: &[Word],
    source: S,
    options: SearchOptions,
) -> Result<SolveResult> {
    let target = Word::new(&config.target)?;
    if !vocabulary.contains(&target) {
        bail!("target {target} is not in the word list");
    }

    let mut solver = Solver::with_source(vocabulary.to_vec(), source)?.with_options(options);
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = solver.remaining();
        let hint = solver.best_guess()?;
        let clue = Clue::observed(&hint.guess, &target);

        let solved = clue.feedback.is_solved();
        if solved {
            info!("solved {target} in {} guesses", guesses.len() + 1);
        } else {
            solver.apply_clues(&[clue])?;
        }

        guesses.push(GuessStep {
            word: hint.guess.text().to_string(),
            feedback: clue.feedback,
            candidates_before,
            candidates_after: if solved { 1 } else { solver.remaining() },
            total: hint.total,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}
