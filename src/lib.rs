//! Wordle Hint
//!
//! Keeps the set of answers consistent with the feedback so far and suggests
//! the guess that leaves the fewest candidates, summed over every possible
//! answer.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hint::solver::Solver;
//! use wordle_hint::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["apple", "angle", "table"]);
//! let mut solver = Solver::new(words).unwrap();
//!
//! // Guessed APPLE: A right, P and P absent, L and E right
//! solver.apply_history(&["=a.p.p=l=e"]).unwrap();
//!
//! let hint = solver.best_guess().unwrap();
//! assert_eq!(hint.guess.text(), "angle");
//! ```

// Core domain types
pub mod core;

// Filtering and search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
