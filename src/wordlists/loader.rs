//! Word list loading utilities
//!
//! A word list is one word per line. Blank lines are skipped; lines that are
//! not five ASCII letters are skipped with a warning.

use crate::core::Word;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, preserving file order
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_hint::wordlists::loader::load_from_file;
///
/// let words = load_from_file("five.letter.words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(&content);
    debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-separated words
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            Word::new(trimmed)
                .inspect_err(|e| warn!("skipping line {}: {trimmed:?}: {e}", number + 1))
                .ok()
        })
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_hint::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["apple", "toolong", "angle"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
