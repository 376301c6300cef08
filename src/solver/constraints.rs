//! Feedback-string interpretation
//!
//! A feedback string is ten characters: five `(action, letter)` pairs, where
//! the action is `=` (right place), `-` (wrong place) or `.` (not in word).
//! For example `=a.p.p=l=e` is the feedback for guessing `apple` when the
//! answer is `angle`.

use super::candidates::{CandidateSet, Exclusion};
use super::error::{FormatIssue, SolveError};
use crate::core::{Clue, Feedback, Outcome, WORD_LEN};
use log::debug;
use std::str::FromStr;

/// Length of one feedback string
pub const CLUE_LEN: usize = 2 * WORD_LEN;

impl FromStr for Clue {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_clue(s)
    }
}

/// Parse one feedback string
///
/// Letters are lower-cased before validation.
///
/// # Errors
/// Returns `SolveError::InvalidFeedbackFormat` if the string is not exactly
/// ten characters, an action is not one of `=`, `-`, `.`, or a letter is not
/// in `a..=z`.
///
/// # Examples
/// ```
/// use wordle_hint::solver::parse_clue;
///
/// let clue = parse_clue("=a.p.p=l=e").unwrap();
/// assert_eq!(&clue.letters, b"apple");
/// assert!(parse_clue("=a.p.p=l?e").is_err());
/// ```
pub fn parse_clue(input: &str) -> Result<Clue, SolveError> {
    let invalid = |issue| SolveError::InvalidFeedbackFormat {
        input: input.to_string(),
        issue,
    };

    let chars: Vec<char> = input.chars().collect();
    if chars.len() != CLUE_LEN {
        return Err(invalid(FormatIssue::Length(chars.len())));
    }

    let mut letters = [0u8; WORD_LEN];
    let mut outcomes = [Outcome::Absent; WORD_LEN];
    for (position, pair) in chars.chunks_exact(2).enumerate() {
        let (action, letter) = (pair[0], pair[1].to_ascii_lowercase());
        outcomes[position] = Outcome::from_symbol(action).ok_or_else(|| {
            invalid(FormatIssue::Action {
                index: 2 * position,
                found: action,
            })
        })?;
        if !letter.is_ascii_lowercase() {
            return Err(invalid(FormatIssue::Letter {
                index: 2 * position + 1,
                found: pair[1],
            }));
        }
        letters[position] = letter as u8;
    }

    Ok(Clue::new(letters, Feedback::new(outcomes)))
}

/// Parse every feedback string, failing on the first malformed one
///
/// # Errors
/// Returns the first `SolveError::InvalidFeedbackFormat` encountered.
pub fn parse_history<S: AsRef<str>>(history: &[S]) -> Result<Vec<Clue>, SolveError> {
    history.iter().map(|s| parse_clue(s.as_ref())).collect()
}

/// Permanently apply a game history to the candidate set
///
/// All strings are parsed before anything is applied, so a malformed entry
/// leaves the set untouched.
///
/// # Errors
/// - `InvalidFeedbackFormat` for a malformed string
/// - `NoCandidatesRemaining` if the history eliminates every word
pub fn apply_history<S: AsRef<str>>(
    set: &mut CandidateSet,
    history: &[S],
) -> Result<Vec<Clue>, SolveError> {
    let clues = parse_history(history)?;
    apply_clues(set, &clues)?;
    Ok(clues)
}

/// Permanently apply already-parsed clues
///
/// Pending temporary exclusions are reset first.
///
/// # Errors
/// Returns `NoCandidatesRemaining` if the clues eliminate every word.
pub fn apply_clues(set: &mut CandidateSet, clues: &[Clue]) -> Result<(), SolveError> {
    set.reset();
    for clue in clues {
        let excluded = set.apply_clue(clue, Exclusion::Permanent);
        debug!("applied {clue}: excluded {excluded}, {} remaining", set.len());
    }

    if set.is_empty() {
        return Err(SolveError::NoCandidatesRemaining);
    }
    Ok(())
}
