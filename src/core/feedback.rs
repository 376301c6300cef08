//! Per-letter feedback and its scoring rule
//!
//! A guess is scored against an answer position by position:
//! - `Exact` (`=`): the answer has this letter at this position
//! - `Present` (`-`): the answer has this letter somewhere else
//! - `Absent` (`.`): the answer does not have this letter
//!
//! Positions are scored independently. A repeated guess letter is not capped by
//! the number of times it occurs in the answer, so `speed` against `abide`
//! marks both `e`s as present.

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Absent,
    Present,
    Exact,
}

impl Outcome {
    /// Symbol used in hint strings
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => '=',
            Self::Present => '-',
            Self::Absent => '.',
        }
    }

    /// Parse a hint-string symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '=' => Some(Self::Exact),
            '-' => Some(Self::Present),
            '.' => Some(Self::Absent),
            _ => None,
        }
    }

    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Feedback for a whole guess, one outcome per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Outcome; WORD_LEN]);

impl Feedback {
    /// Every position exact
    pub const SOLVED: Self = Self([Outcome::Exact; WORD_LEN]);

    /// Number of distinct feedback codes (3^5)
    pub const CODES: usize = 243;

    #[must_use]
    pub const fn new(outcomes: [Outcome; WORD_LEN]) -> Self {
        Self(outcomes)
    }

    /// Score `guess` against a hidden `answer`
    ///
    /// # Examples
    /// ```
    /// use wordle_hint::core::{Feedback, Outcome::*, Word};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let answer = Word::new("angle").unwrap();
    /// let feedback = Feedback::score(&guess, &answer);
    /// assert_eq!(feedback.outcomes(), &[Exact, Absent, Absent, Exact, Exact]);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut outcomes = [Outcome::Absent; WORD_LEN];
        for (position, (outcome, &letter)) in outcomes.iter_mut().zip(guess.chars()).enumerate() {
            *outcome = if answer.has_letter_at(letter, position) {
                Outcome::Exact
            } else if answer.has_letter(letter) {
                Outcome::Present
            } else {
                Outcome::Absent
            };
        }
        Self(outcomes)
    }

    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[Outcome; WORD_LEN] {
        &self.0
    }

    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    /// Compact base-3 encoding (0-242), position i weighted 3^i
    #[must_use]
    pub fn code(self) -> u8 {
        self.0
            .iter()
            .rev()
            .fold(0u8, |acc, outcome| acc * 3 + outcome.digit())
    }

    /// Decode a value produced by [`Feedback::code`]
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        if usize::from(code) >= Self::CODES {
            return None;
        }
        let mut outcomes = [Outcome::Absent; WORD_LEN];
        let mut rest = code;
        for outcome in &mut outcomes {
            *outcome = Outcome::from_digit(rest % 3);
            rest /= 3;
        }
        Some(Self(outcomes))
    }

    /// Render as coloured squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|outcome| match outcome {
                Outcome::Exact => '🟩',
                Outcome::Present => '🟨',
                Outcome::Absent => '⬜',
            })
            .collect()
    }
}

/// One turn of game history: the letters guessed and the feedback received
///
/// Displays as the 10-character hint string, e.g. `=a.p.p=l=e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clue {
    pub letters: [u8; WORD_LEN],
    pub feedback: Feedback,
}

impl Clue {
    #[must_use]
    pub const fn new(letters: [u8; WORD_LEN], feedback: Feedback) -> Self {
        Self { letters, feedback }
    }

    /// The clue a player would receive guessing `guess` when the answer is `answer`
    #[must_use]
    pub fn observed(guess: &Word, answer: &Word) -> Self {
        Self::new(*guess.chars(), Feedback::score(guess, answer))
    }

    /// Letter/outcome pairs in position order
    pub fn pairs(&self) -> impl Iterator<Item = (usize, u8, Outcome)> + '_ {
        self.letters
            .iter()
            .zip(self.feedback.outcomes())
            .enumerate()
            .map(|(position, (&letter, &outcome))| (position, letter, outcome))
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, letter, outcome) in self.pairs() {
            write!(f, "{}{}", outcome.symbol(), char::from(letter))?;
        }
        Ok(())
    }
}
