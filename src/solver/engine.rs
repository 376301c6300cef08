//! Main hint engine interface

use super::candidates::CandidateSet;
use super::constraints::{apply_clues, parse_history};
use super::error::SolveError;
use super::evaluator::{FeedbackSource, LiveScoring};
use super::search::{GuessReport, Hint, SearchOptions, analyze_guess, best_guess};
use crate::core::{Clue, Word};
use log::{debug, info};

/// Main hint engine
///
/// Owns the candidate set for one game. History is applied permanently; each
/// search simulates trials with temporary exclusions and resets them.
#[derive(Debug)]
pub struct Solver<S: FeedbackSource = LiveScoring> {
    candidates: CandidateSet,
    source: S,
    options: SearchOptions,
    history: Vec<Clue>,
}

impl Solver<LiveScoring> {
    /// Create a solver that scores feedback live
    ///
    /// # Errors
    /// Returns `SolveError::EmptyVocabulary` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, SolveError> {
        Self::with_source(words, LiveScoring)
    }
}

impl<S: FeedbackSource> Solver<S> {
    /// Create a solver with a specific feedback source
    ///
    /// # Errors
    /// Returns `SolveError::EmptyVocabulary` if `words` is empty.
    pub fn with_source(words: Vec<Word>, source: S) -> Result<Self, SolveError> {
        let candidates = CandidateSet::new(words)?;
        info!(
            "loaded {} words using {} distinct letters",
            candidates.vocabulary_len(),
            candidates.letters_seen().count()
        );
        debug!(
            "letters: {}",
            candidates
                .letters_seen()
                .map(|letter| {
                    format!("{}={}", char::from(letter), candidates.letter_total(letter))
                })
                .collect::<Vec<_>>()
                .join(" ")
        );
        Ok(Self {
            candidates,
            source,
            options: SearchOptions::default(),
            history: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Apply prior feedback strings permanently
    ///
    /// Every string is validated before any of them is applied.
    ///
    /// # Errors
    /// - `InvalidFeedbackFormat` for a malformed string (nothing is applied)
    /// - `NoCandidatesRemaining` if the history leaves no words
    pub fn apply_history<T: AsRef<str>>(&mut self, history: &[T]) -> Result<(), SolveError> {
        let clues = parse_history(history)?;
        info!(
            "applying {} clues to {} candidates",
            clues.len(),
            self.candidates.len()
        );
        self.apply_clues(&clues)
    }

    /// Apply parsed clues permanently
    ///
    /// # Errors
    /// Returns `NoCandidatesRemaining` if the clues leave no words.
    pub fn apply_clues(&mut self, clues: &[Clue]) -> Result<(), SolveError> {
        self.history.extend_from_slice(clues);
        apply_clues(&mut self.candidates, clues)
    }

    /// Best next guess for the current candidates
    ///
    /// # Errors
    /// Returns `NoCandidatesRemaining` if no words are left.
    pub fn best_guess(&mut self) -> Result<Hint, SolveError> {
        best_guess(&mut self.candidates, &self.source, &self.options)
    }

    /// How `guess` would split the current candidates
    pub fn analyze(&mut self, guess: &Word) -> GuessReport {
        analyze_guess(&mut self.candidates, &self.source, guess)
    }

    /// Number of candidates remaining
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Current candidates in vocabulary order
    pub fn candidates(&self) -> impl Iterator<Item = &Word> + '_ {
        self.candidates.iter()
    }

    #[must_use]
    pub const fn candidate_set(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Clues applied so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Clue] {
        &self.history
    }
}
