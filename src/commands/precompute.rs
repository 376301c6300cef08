//! Score table precompute command
//!
//! Builds the guess × answer feedback table offline and saves it.

use crate::solver::ScoreTable;
use crate::wordlists::loader::load_from_file;
use anyhow::{Context, Result};
use std::path::Path;
use std::time::{Duration, Instant};

/// Result of building a score table
pub struct PrecomputeResult {
    pub guesses: usize,
    pub answers: usize,
    pub duration: Duration,
}

/// Build the table for two word lists and write it to `out`
///
/// # Errors
///
/// Returns an error if either word list cannot be read or the table cannot be
/// written.
pub fn run_precompute(guesses: &Path, answers: &Path, out: &Path) -> Result<PrecomputeResult> {
    let start = Instant::now();
    let guess_words = load_from_file(guesses)
        .with_context(|| format!("reading guesses from {}", guesses.display()))?;
    let answer_words = load_from_file(answers)
        .with_context(|| format!("reading answers from {}", answers.display()))?;

    let table = ScoreTable::build(&guess_words, &answer_words);
    table
        .save(out)
        .with_context(|| format!("writing score table to {}", out.display()))?;

    Ok(PrecomputeResult {
        guesses: table.guess_count(),
        answers: table.answer_count(),
        duration: start.elapsed(),
    })
}
