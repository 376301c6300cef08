//! Solver error types

use thiserror::Error;

/// What was wrong with a feedback string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatIssue {
    #[error("expected 10 characters, got {0}")]
    Length(usize),
    #[error("unknown action {found:?} at character {index} (expected '=', '-' or '.')")]
    Action { index: usize, found: char },
    #[error("expected a letter a-z at character {index}, got {found:?}")]
    Letter { index: usize, found: char },
}

/// Errors surfaced by the hint engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("invalid feedback {input:?}: {issue}")]
    InvalidFeedbackFormat { input: String, issue: FormatIssue },

    #[error("no candidates remain; the feedback history is contradictory")]
    NoCandidatesRemaining,

    #[error("the word list is empty")]
    EmptyVocabulary,
}
