//! Exhaustive best-guess search
//!
//! Every included word is tried as the next guess against every included word
//! as the hidden answer. A guess scores the sum of the candidate counts left
//! after each trial, and the lowest sum wins. Ties go to the word that comes
//! first in vocabulary order.

use super::candidates::CandidateSet;
use super::error::SolveError;
use super::evaluator::{FeedbackSource, evaluate};
use crate::core::Word;
use indicatif::ProgressBar;
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

const SLOW_GUESS: Duration = Duration::from_secs(1);

/// Knobs for [`best_guess`]
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Fan the outer guess loop out over the rayon pool
    pub parallel: bool,
    /// Ticked once per guess scored
    pub progress: Option<ProgressBar>,
}

impl SearchOptions {
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            parallel: false,
            progress: None,
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            progress: None,
        }
    }
}

/// The outcome of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub guess: Word,
    /// Sum of remaining-candidate counts over every possible answer
    pub total: usize,
    /// Candidates included when the search ran
    pub remaining: usize,
    /// Guess/answer trials simulated (zero for the single-candidate shortcut)
    pub pairs_evaluated: usize,
}

impl Hint {
    /// Average number of candidates left after this guess
    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        if self.remaining == 0 {
            return 0.0;
        }
        self.total as f64 / self.remaining as f64
    }
}

/// Find the included word that minimises the summed remaining-candidate count
///
/// Any pending temporary exclusions are reset first. The set is left with no
/// temporary exclusions.
///
/// # Errors
/// Returns `SolveError::NoCandidatesRemaining` if the set is empty.
///
/// # Examples
/// ```
/// use wordle_hint::solver::{CandidateSet, LiveScoring, SearchOptions, best_guess};
/// use wordle_hint::wordlists::loader::words_from_slice;
///
/// let mut set = CandidateSet::new(words_from_slice(&["apple", "angle", "table"])).unwrap();
/// let hint = best_guess(&mut set, &LiveScoring, &SearchOptions::default()).unwrap();
///
/// assert_eq!(hint.guess.text(), "apple");
/// assert_eq!(hint.total, 3);
/// ```
pub fn best_guess<S: FeedbackSource + ?Sized>(
    set: &mut CandidateSet,
    source: &S,
    options: &SearchOptions,
) -> Result<Hint, SolveError> {
    set.reset();
    let remaining = set.len();

    let candidates: Vec<Word> = match remaining {
        0 => return Err(SolveError::NoCandidatesRemaining),
        1 => {
            let guess = set.iter().next().cloned().ok_or(SolveError::NoCandidatesRemaining)?;
            return Ok(Hint {
                guess,
                total: 1,
                remaining,
                pairs_evaluated: 0,
            });
        }
        _ => set.iter().cloned().collect(),
    };

    debug!(
        "searching {remaining} candidates ({} trials)",
        remaining * remaining
    );
    if let Some(bar) = &options.progress {
        bar.set_length(remaining as u64);
        bar.set_position(0);
    }

    let (total, index) = if options.parallel {
        search_parallel(set, source, &candidates, options.progress.as_ref())
    } else {
        search_sequential(set, source, &candidates, options.progress.as_ref())
    }
    .ok_or(SolveError::NoCandidatesRemaining)?;

    Ok(Hint {
        guess: candidates[index].clone(),
        total,
        remaining,
        pairs_evaluated: remaining * remaining,
    })
}

/// Sum the remaining-candidate counts for `guess` over every answer
fn total_for<S: FeedbackSource + ?Sized>(
    set: &mut CandidateSet,
    source: &S,
    guess: &Word,
    answers: &[Word],
) -> usize {
    let start = Instant::now();
    let total = answers
        .iter()
        .map(|answer| {
            let left = evaluate(set, source, guess, answer);
            set.reset();
            left
        })
        .sum();

    let elapsed = start.elapsed();
    if elapsed > SLOW_GUESS {
        debug!("{guess} took {elapsed:.2?}");
    }
    total
}

fn search_sequential<S: FeedbackSource + ?Sized>(
    set: &mut CandidateSet,
    source: &S,
    candidates: &[Word],
    progress: Option<&ProgressBar>,
) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;

    for (index, guess) in candidates.iter().enumerate() {
        let total = total_for(set, source, guess, candidates);
        if best.is_none_or(|(best_total, _)| total < best_total) {
            debug!("new best guess {guess}: {total}");
            best = Some((total, index));
        }
        if let Some(bar) = progress {
            bar.inc(1);
        }
    }

    best
}

/// Each rayon job scores guesses against its own clone of the set, so the
/// temporary flags are never shared between threads.
fn search_parallel<S: FeedbackSource + ?Sized>(
    set: &CandidateSet,
    source: &S,
    candidates: &[Word],
    progress: Option<&ProgressBar>,
) -> Option<(usize, usize)> {
    let best = candidates
        .par_iter()
        .enumerate()
        .map_init(
            || set.clone(),
            |local, (index, guess)| {
                let total = total_for(local, source, guess, candidates);
                if let Some(bar) = progress {
                    bar.inc(1);
                }
                (total, index)
            },
        )
        // (total, index) ordering keeps the earliest guess on ties
        .min();

    if let Some((total, index)) = best {
        debug!("best guess {}: {total}", candidates[index]);
    }
    best
}

/// How a single guess would split the current candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub guess: Word,
    /// Sum of remaining-candidate counts over every answer
    pub total: usize,
    /// Largest remaining-candidate count over every answer
    pub worst_case: usize,
    /// Number of distinct feedbacks the guess can receive
    pub distinct_feedbacks: usize,
    pub remaining: usize,
}

/// Score one guess, which need not be a candidate itself
///
/// The set is left with no temporary exclusions.
pub fn analyze_guess<S: FeedbackSource + ?Sized>(
    set: &mut CandidateSet,
    source: &S,
    guess: &Word,
) -> GuessReport {
    set.reset();
    let answers: Vec<Word> = set.iter().cloned().collect();

    let mut total = 0;
    let mut worst_case = 0;
    let mut feedbacks = FxHashSet::default();
    for answer in &answers {
        feedbacks.insert(source.feedback(guess, answer));
        let left = evaluate(set, source, guess, answer);
        set.reset();
        total += left;
        worst_case = worst_case.max(left);
    }

    GuessReport {
        guess: guess.clone(),
        total,
        worst_case,
        distinct_feedbacks: feedbacks.len(),
        remaining: answers.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::LiveScoring;
    use crate::solver::constraints::apply_history;
    use crate::wordlists::loader::words_from_slice;

    const VOCAB: [&str; 8] = [
        "apple", "angle", "table", "crust", "lapse", "speed", "abide", "cable",
    ];

    fn set(words: &[&str]) -> CandidateSet {
        CandidateSet::new(words_from_slice(words)).unwrap()
    }

    #[test]
    fn three_word_vocabulary_prefers_first_of_tie() {
        // apple and angle both total 3, table totals 5
        let mut set = set(&["apple", "angle", "table"]);
        let hint = best_guess(&mut set, &LiveScoring, &SearchOptions::sequential()).unwrap();
        assert_eq!(hint.guess.text(), "apple");
        assert_eq!(hint.total, 3);
        assert_eq!(hint.remaining, 3);
        assert_eq!(hint.pairs_evaluated, 9);
    }

    #[test]
    fn guess_totals_for_three_words() {
        let mut set = set(&["apple", "angle", "table"]);
        let totals: Vec<usize> = ["apple", "angle", "table"]
            .iter()
            .map(|text| analyze_guess(&mut set, &LiveScoring, &Word::new(*text).unwrap()).total)
            .collect();
        assert_eq!(totals, [3, 3, 5]);
    }

    #[test]
    fn single_candidate_short_circuits() {
        let mut set = set(&["apple", "angle", "table"]);
        apply_history(&mut set, &["=a.p.p=l=e"]).unwrap();
        let hint = best_guess(&mut set, &LiveScoring, &SearchOptions::default()).unwrap();
        assert_eq!(hint.guess.text(), "angle");
        assert_eq!(hint.pairs_evaluated, 0);
        assert_eq!(hint.remaining, 1);
    }

    #[test]
    fn empty_set_is_an_error() {
        let mut set = set(&["apple", "angle", "table"]);
        set.exclude_if_has_letter(b'e', true, crate::solver::Exclusion::Permanent);
        let result = best_guess(&mut set, &LiveScoring, &SearchOptions::default());
        assert_eq!(result.unwrap_err(), SolveError::NoCandidatesRemaining);
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut sequential_set = set(&VOCAB);
        let mut parallel_set = set(&VOCAB);
        let sequential =
            best_guess(&mut sequential_set, &LiveScoring, &SearchOptions::sequential()).unwrap();
        let parallel =
            best_guess(&mut parallel_set, &LiveScoring, &SearchOptions::default()).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn search_leaves_set_untouched() {
        let mut set = set(&VOCAB);
        let before = set.len();
        best_guess(&mut set, &LiveScoring, &SearchOptions::sequential()).unwrap();
        assert_eq!(set.len(), before);
        assert!((0..VOCAB.len()).all(|i| !set.is_temporarily_excluded(i)));
    }

    #[test]
    fn search_is_deterministic() {
        let first = best_guess(&mut set(&VOCAB), &LiveScoring, &SearchOptions::default()).unwrap();
        let second = best_guess(&mut set(&VOCAB), &LiveScoring, &SearchOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn best_total_is_minimal() {
        let mut set = set(&VOCAB);
        let hint = best_guess(&mut set, &LiveScoring, &SearchOptions::sequential()).unwrap();
        for text in VOCAB {
            let report = analyze_guess(&mut set, &LiveScoring, &Word::new(text).unwrap());
            assert!(hint.total <= report.total, "{text}");
        }
    }

    #[test]
    fn progress_is_ticked_per_guess() {
        let bar = ProgressBar::hidden();
        let options = SearchOptions::sequential().with_progress(bar.clone());
        best_guess(&mut set(&VOCAB), &LiveScoring, &options).unwrap();
        assert_eq!(bar.position(), VOCAB.len() as u64);
    }

    #[test]
    fn analyze_reports_split_shape() {
        let mut set = set(&["apple", "angle", "table"]);
        let report = analyze_guess(&mut set, &LiveScoring, &Word::new("table").unwrap());
        assert_eq!(report.total, 5);
        assert_eq!(report.worst_case, 2);
        assert_eq!(report.distinct_feedbacks, 2);
        assert_eq!(report.remaining, 3);
    }

    #[test]
    fn expected_remaining_is_average() {
        let mut set = set(&["apple", "angle", "table"]);
        let hint = best_guess(&mut set, &LiveScoring, &SearchOptions::sequential()).unwrap();
        assert!((hint.expected_remaining() - 1.0).abs() < f64::EPSILON);
    }
}
