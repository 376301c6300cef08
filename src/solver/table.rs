//! Precomputed guess × answer feedback table
//!
//! Building the table scores every guess against every answer once, offline.
//! The table is saved as JSON together with a fingerprint of both word lists.
//! Loading recomputes the fingerprint from the lists in use, and a mismatch
//! means either list changed since the table was built, so the table is
//! rejected as stale.

use super::evaluator::FeedbackSource;
use crate::core::{Feedback, Word};
use log::{info, warn};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHasher};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors reading or writing a score table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("score table I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("score table is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("score table is stale: rebuild it for the current word lists")]
    Stale,

    #[error("score table is corrupt: {0}")]
    Corrupt(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredTable {
    fingerprint: u64,
    guesses: Vec<String>,
    answers: Vec<String>,
    /// Row-major: `codes[g * answers.len() + a]`
    codes: Vec<u8>,
}

/// Feedback for every (guess, answer) pair of two word lists
#[derive(Debug)]
pub struct ScoreTable {
    stored: StoredTable,
    guess_index: FxHashMap<String, usize>,
    answer_index: FxHashMap<String, usize>,
}

/// Fingerprint of the two word lists a table was built from
///
/// Lengths are hashed as `u64` so they do not depend on `usize` width. The
/// value is still tied to the `FxHasher` of the `rustc-hash` release and
/// target the table was built with; a table from another build may load as
/// stale and must be rebuilt with `precompute`.
#[must_use]
pub fn fingerprint(guesses: &[Word], answers: &[Word]) -> u64 {
    let mut hasher = FxHasher::default();
    for list in [guesses, answers] {
        (list.len() as u64).hash(&mut hasher);
        for word in list {
            word.text().hash(&mut hasher);
        }
    }
    hasher.finish()
}

impl ScoreTable {
    /// Score every guess against every answer, rows in parallel
    #[must_use]
    pub fn build(guesses: &[Word], answers: &[Word]) -> Self {
        let codes: Vec<u8> = guesses
            .par_iter()
            .flat_map_iter(|guess| {
                answers
                    .iter()
                    .map(move |answer| Feedback::score(guess, answer).code())
            })
            .collect();

        info!(
            "built score table: {} guesses x {} answers",
            guesses.len(),
            answers.len()
        );

        Self::from_stored(StoredTable {
            fingerprint: fingerprint(guesses, answers),
            guesses: guesses.iter().map(|w| w.text().to_string()).collect(),
            answers: answers.iter().map(|w| w.text().to_string()).collect(),
            codes,
        })
    }

    fn from_stored(stored: StoredTable) -> Self {
        let index = |words: &[String]| {
            words
                .iter()
                .enumerate()
                .map(|(i, w)| (w.clone(), i))
                .collect::<FxHashMap<_, _>>()
        };
        let guess_index = index(&stored.guesses);
        let answer_index = index(&stored.answers);
        Self {
            stored,
            guess_index,
            answer_index,
        }
    }

    /// Write the table as JSON
    ///
    /// # Errors
    /// Returns `TableError` if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TableError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &self.stored)?;
        writer.flush()?;
        Ok(())
    }

    /// Load a table and check it against the word lists in use
    ///
    /// # Errors
    /// - `Io` / `Json` if the file cannot be read or parsed
    /// - `Stale` if either word list differs from the ones the table was built from
    /// - `Corrupt` if the stored codes do not fit the stored lists
    pub fn load(
        path: impl AsRef<Path>,
        guesses: &[Word],
        answers: &[Word],
    ) -> Result<Self, TableError> {
        let reader = BufReader::new(File::open(path)?);
        let stored: StoredTable = serde_json::from_reader(reader)?;

        if stored.fingerprint != fingerprint(guesses, answers) {
            return Err(TableError::Stale);
        }
        let expected = stored.guesses.len() * stored.answers.len();
        if stored.codes.len() != expected {
            return Err(TableError::Corrupt(format!(
                "expected {expected} codes, found {}",
                stored.codes.len()
            )));
        }
        if let Some(bad) = stored
            .codes
            .iter()
            .find(|&&code| usize::from(code) >= Feedback::CODES)
        {
            return Err(TableError::Corrupt(format!("invalid feedback code {bad}")));
        }

        Ok(Self::from_stored(stored))
    }

    /// Stored feedback for a pair, if both words are in the table
    #[must_use]
    pub fn lookup(&self, guess: &str, answer: &str) -> Option<Feedback> {
        let g = *self.guess_index.get(guess)?;
        let a = *self.answer_index.get(answer)?;
        let code = self.stored.codes[g * self.stored.answers.len() + a];
        Feedback::from_code(code)
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.stored.guesses.len()
    }

    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.stored.answers.len()
    }
}

impl FeedbackSource for ScoreTable {
    /// Falls back to live scoring for pairs missing from the table
    fn feedback(&self, guess: &Word, answer: &Word) -> Feedback {
        self.lookup(guess.text(), answer.text()).unwrap_or_else(|| {
            warn!("{guess}/{answer} missing from score table, scoring live");
            Feedback::score(guess, answer)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wordle_hint_{}_{name}.json", std::process::id()))
    }

    #[test]
    fn lookup_matches_live_scoring() {
        let guesses = words_from_slice(&["apple", "angle", "table", "speed"]);
        let answers = words_from_slice(&["angle", "abide", "table"]);
        let table = ScoreTable::build(&guesses, &answers);

        assert_eq!(table.guess_count(), 4);
        assert_eq!(table.answer_count(), 3);
        for guess in &guesses {
            for answer in &answers {
                assert_eq!(
                    table.lookup(guess.text(), answer.text()),
                    Some(Feedback::score(guess, answer))
                );
            }
        }
    }

    #[test]
    fn lookup_unknown_pair_is_none() {
        let words = words_from_slice(&["apple", "angle"]);
        let table = ScoreTable::build(&words, &words);
        assert_eq!(table.lookup("crust", "apple"), None);
        assert_eq!(table.lookup("apple", "crust"), None);
    }

    #[test]
    fn save_and_load() {
        let guesses = words_from_slice(&["apple", "angle", "table"]);
        let answers = words_from_slice(&["angle", "table"]);
        let path = temp_path("save_and_load");

        ScoreTable::build(&guesses, &answers).save(&path).unwrap();
        let loaded = ScoreTable::load(&path, &guesses, &answers).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            loaded.lookup("apple", "angle"),
            Some(Feedback::score(&guesses[0], &answers[0]))
        );
    }

    #[test]
    fn changed_word_list_is_stale() {
        let guesses = words_from_slice(&["apple", "angle", "table"]);
        let answers = words_from_slice(&["angle", "table"]);
        let path = temp_path("stale");

        ScoreTable::build(&guesses, &answers).save(&path).unwrap();
        let changed = words_from_slice(&["angle", "cable"]);
        let result = ScoreTable::load(&path, &guesses, &changed);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(TableError::Stale)));
    }

    #[test]
    fn fingerprint_depends_on_list_boundaries() {
        let a = words_from_slice(&["apple", "angle"]);
        let b = words_from_slice(&["table"]);
        let ab = words_from_slice(&["apple", "angle", "table"]);
        assert_ne!(fingerprint(&a, &b), fingerprint(&ab, &[]));
        assert_eq!(fingerprint(&a, &b), fingerprint(&a, &b));
    }

    #[test]
    fn fingerprint_hashes_lengths_as_u64() {
        let guesses = words_from_slice(&["apple", "angle"]);
        let answers = words_from_slice(&["table"]);

        let mut hasher = FxHasher::default();
        2u64.hash(&mut hasher);
        "apple".hash(&mut hasher);
        "angle".hash(&mut hasher);
        1u64.hash(&mut hasher);
        "table".hash(&mut hasher);

        assert_eq!(fingerprint(&guesses, &answers), hasher.finish());
    }

    #[test]
    fn missing_pair_falls_back_to_live() {
        let words = words_from_slice(&["apple", "angle"]);
        let table = ScoreTable::build(&words, &words);
        let outsider = Word::new("table").unwrap();
        assert_eq!(
            table.feedback(&outsider, &words[0]),
            Feedback::score(&outsider, &words[0])
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let words = words_from_slice(&["apple"]);
        let result = ScoreTable::load(temp_path("does_not_exist"), &words, &words);
        assert!(matches!(result, Err(TableError::Io(_))));
    }
}
