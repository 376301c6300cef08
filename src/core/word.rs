//! Five-letter word representation
//!
//! A Word stores its letters by position plus a count for every letter of the
//! alphabet, so "does this word contain L" is defined for every letter.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

const ALPHABET: usize = 26;

/// An immutable 5-letter word with per-letter counts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
    letter_counts: [u8; ALPHABET],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lower-cased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_hint::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    /// assert_eq!(word.count_of(b'p'), 2);
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letter_counts = [0u8; ALPHABET];
        for &ch in &chars {
            letter_counts[usize::from(ch - b'a')] += 1;
        }

        Ok(Self {
            text,
            chars,
            letter_counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Number of times `letter` occurs in the word
    ///
    /// Zero for any letter the word lacks, including bytes outside `a..=z`.
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        letter
            .checked_sub(b'a')
            .and_then(|idx| self.letter_counts.get(usize::from(idx)))
            .copied()
            .unwrap_or(0)
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.count_of(letter) > 0
    }

    /// Check if the word has `letter` at exactly `position`
    #[inline]
    #[must_use]
    pub fn has_letter_at(&self, letter: u8, position: usize) -> bool {
        self.chars.get(position) == Some(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
