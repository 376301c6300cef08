//! Single guess/answer trial
//!
//! Simulates guessing `guess` when the hidden answer is `answer` by applying
//! the resulting feedback as temporary exclusions, then reports how many
//! candidates would survive.

use super::candidates::{CandidateSet, Exclusion};
use crate::core::{Clue, Feedback, Word};

/// Provides the feedback a guess receives against an answer
///
/// Implemented by live scoring and by a precomputed score table. The search
/// shares one source across worker threads, hence `Sync`.
pub trait FeedbackSource: Sync {
    fn feedback(&self, guess: &Word, answer: &Word) -> Feedback;
}

impl<T: FeedbackSource + ?Sized> FeedbackSource for &T {
    #[inline]
    fn feedback(&self, guess: &Word, answer: &Word) -> Feedback {
        (**self).feedback(guess, answer)
    }
}

/// Computes feedback on demand with [`Feedback::score`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveScoring;

impl FeedbackSource for LiveScoring {
    #[inline]
    fn feedback(&self, guess: &Word, answer: &Word) -> Feedback {
        Feedback::score(guess, answer)
    }
}

/// Run one trial and return the number of candidates left
///
/// The exclusions stay applied; call [`CandidateSet::reset`] before the next
/// independent trial.
///
/// # Examples
/// ```
/// use wordle_hint::core::Word;
/// use wordle_hint::solver::{CandidateSet, LiveScoring, evaluate};
/// use wordle_hint::wordlists::loader::words_from_slice;
///
/// let mut set = CandidateSet::new(words_from_slice(&["apple", "angle", "table"])).unwrap();
/// let guess = Word::new("table").unwrap();
/// let answer = Word::new("apple").unwrap();
///
/// assert_eq!(evaluate(&mut set, &LiveScoring, &guess, &answer), 2);
/// set.reset();
/// assert_eq!(set.len(), 3);
/// ```
pub fn evaluate<S: FeedbackSource + ?Sized>(
    set: &mut CandidateSet,
    source: &S,
    guess: &Word,
    answer: &Word,
) -> usize {
    let clue = Clue::new(*guess.chars(), source.feedback(guess, answer));
    set.apply_clue(&clue, Exclusion::Temporary);
    set.len()
}
