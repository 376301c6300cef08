//! Candidate filtering and guess search
//!
//! - [`candidates`]: word arena with permanent and temporary exclusion flags
//! - [`rules`]: elimination rules for `=`, `-` and `.` feedback
//! - [`constraints`]: parsing and applying the game history
//! - [`evaluator`]: one simulated guess/answer trial
//! - [`search`]: the exhaustive best-guess search
//! - [`table`]: optional precomputed feedback table

pub mod candidates;
pub mod constraints;
mod engine;
mod error;
pub mod evaluator;
pub mod rules;
pub mod search;
pub mod table;

pub use candidates::{CandidateSet, Exclusion};
pub use constraints::{apply_history, parse_clue, parse_history};
pub use engine::Solver;
pub use error::{FormatIssue, SolveError};
pub use evaluator::{FeedbackSource, LiveScoring, evaluate};
pub use rules::Rule;
pub use search::{GuessReport, Hint, SearchOptions, analyze_guess, best_guess};
pub use table::{ScoreTable, TableError};
