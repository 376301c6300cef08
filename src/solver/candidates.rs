//! Candidate set with reversible elimination
//!
//! Words live in a fixed arena and are never moved or removed. Elimination
//! flips one of two per-word flags:
//! - permanent: derived from the real game history, never undone
//! - temporary: applied while simulating one guess/answer trial, undone by
//!   [`CandidateSet::reset`]
//!
//! A word is included when neither flag is set.

use super::error::SolveError;
use crate::core::Word;

/// How long an exclusion lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    Permanent,
    Temporary,
}

/// The words still consistent with everything learned so far
#[derive(Debug, Clone)]
pub struct CandidateSet {
    words: Vec<Word>,
    letter_totals: [usize; 26],
    permanently_excluded: Vec<bool>,
    temporarily_excluded: Vec<bool>,
    /// Indices not permanently excluded, in input order
    live: Vec<usize>,
    /// Indices temporarily excluded since the last reset
    touched: Vec<usize>,
    included: usize,
}

impl CandidateSet {
    /// Build a candidate set from a vocabulary, preserving its order
    ///
    /// # Errors
    /// Returns `SolveError::EmptyVocabulary` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, SolveError> {
        if words.is_empty() {
            return Err(SolveError::EmptyVocabulary);
        }

        let mut letter_totals = [0usize; 26];
        for word in &words {
            for &ch in word.chars() {
                letter_totals[usize::from(ch - b'a')] += 1;
            }
        }

        let count = words.len();
        Ok(Self {
            words,
            letter_totals,
            permanently_excluded: vec![false; count],
            temporarily_excluded: vec![false; count],
            live: (0..count).collect(),
            touched: Vec::new(),
            included: count,
        })
    }

    /// Number of included words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.included
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.included == 0
    }

    /// Size of the original vocabulary
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.words.len()
    }

    /// Occurrences of `letter` across the whole vocabulary
    #[must_use]
    pub fn letter_total(&self, letter: u8) -> usize {
        letter
            .checked_sub(b'a')
            .and_then(|idx| self.letter_totals.get(usize::from(idx)))
            .copied()
            .unwrap_or(0)
    }

    /// Letters that occur anywhere in the vocabulary, alphabetically
    pub fn letters_seen(&self) -> impl Iterator<Item = u8> + '_ {
        (b'a'..=b'z').filter(|&letter| self.letter_total(letter) > 0)
    }

    /// Word stored at arena index `index`
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    #[inline]
    #[must_use]
    pub fn is_included(&self, index: usize) -> bool {
        !self.permanently_excluded[index] && !self.temporarily_excluded[index]
    }

    #[must_use]
    pub fn is_permanently_excluded(&self, index: usize) -> bool {
        self.permanently_excluded[index]
    }

    #[must_use]
    pub fn is_temporarily_excluded(&self, index: usize) -> bool {
        self.temporarily_excluded[index]
    }

    /// Arena indices of included words, in input order
    pub fn included_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.live
            .iter()
            .copied()
            .filter(|&index| !self.temporarily_excluded[index])
    }

    /// Included words, in input order
    pub fn iter(&self) -> impl Iterator<Item = &Word> + '_ {
        self.included_indices().map(|index| &self.words[index])
    }

    /// Exclude every word where `exists == predicate(word)`
    ///
    /// A temporary exclusion only visits included words. A permanent one also
    /// visits words that are temporarily excluded, so a later reset cannot
    /// bring them back. Returns the number of words newly excluded.
    pub(crate) fn exclude_matching(
        &mut self,
        exists: bool,
        mode: Exclusion,
        predicate: impl Fn(&Word) -> bool,
    ) -> usize {
        let mut excluded = 0;
        for slot in 0..self.live.len() {
            let index = self.live[slot];
            let eligible = match mode {
                Exclusion::Permanent => !self.permanently_excluded[index],
                Exclusion::Temporary => self.is_included(index),
            };
            if eligible && exists == predicate(&self.words[index]) {
                self.exclude(index, mode);
                excluded += 1;
            }
        }

        if mode == Exclusion::Permanent && excluded > 0 {
            self.compact();
        }
        excluded
    }

    fn exclude(&mut self, index: usize, mode: Exclusion) {
        let was_included = self.is_included(index);
        match mode {
            Exclusion::Permanent => self.permanently_excluded[index] = true,
            Exclusion::Temporary => {
                self.temporarily_excluded[index] = true;
                self.touched.push(index);
            }
        }
        if was_included {
            self.included -= 1;
        }
    }

    fn compact(&mut self) {
        let excluded = &self.permanently_excluded;
        self.live.retain(|&index| !excluded[index]);
    }

    /// Undo every temporary exclusion
    ///
    /// Only the words touched since the previous reset are visited, so a reset
    /// after a trial that excluded nothing is free.
    pub fn reset(&mut self) {
        for index in self.touched.drain(..) {
            if self.temporarily_excluded[index] {
                self.temporarily_excluded[index] = false;
                if !self.permanently_excluded[index] {
                    self.included += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn set(words: &[&str]) -> CandidateSet {
        CandidateSet::new(words_from_slice(words)).unwrap()
    }

    fn assert_flags_consistent(set: &CandidateSet) {
        for index in 0..set.vocabulary_len() {
            assert_eq!(
                set.is_included(index),
                !set.is_permanently_excluded(index) && !set.is_temporarily_excluded(index)
            );
        }
        assert_eq!(
            set.len(),
            (0..set.vocabulary_len())
                .filter(|&i| set.is_included(i))
                .count()
        );
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        assert_eq!(
            CandidateSet::new(Vec::new()).unwrap_err(),
            SolveError::EmptyVocabulary
        );
    }

    #[test]
    fn new_set_includes_everything_in_order() {
        let set = set(&["apple", "angle", "table"]);
        assert_eq!(set.len(), 3);
        let texts: Vec<&str> = set.iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "angle", "table"]);
        assert_flags_consistent(&set);
    }

    #[test]
    fn letter_totals_cover_the_corpus() {
        let set = set(&["apple", "angle", "table"]);
        assert_eq!(set.letter_total(b'p'), 2);
        assert_eq!(set.letter_total(b'e'), 3);
        assert_eq!(set.letter_total(b'z'), 0);
        let seen: Vec<u8> = set.letters_seen().collect();
        assert_eq!(seen, b"abeglnpt");
    }

    #[test]
    fn temporary_exclusions_are_undone_by_reset() {
        let mut set = set(&["apple", "angle", "table"]);
        let removed = set.exclude_matching(true, Exclusion::Temporary, |w| w.has_letter(b'p'));
        assert_eq!(removed, 1);
        assert_eq!(set.len(), 2);
        assert!(set.is_temporarily_excluded(0));
        assert_flags_consistent(&set);

        set.reset();
        assert_eq!(set.len(), 3);
        assert!((0..3).all(|i| !set.is_temporarily_excluded(i)));
        assert_flags_consistent(&set);
    }

    #[test]
    fn reset_keeps_permanent_exclusions() {
        let mut set = set(&["apple", "angle", "table"]);
        set.exclude_matching(true, Exclusion::Permanent, |w| w.has_letter(b't'));
        set.exclude_matching(true, Exclusion::Temporary, |w| w.has_letter(b'n'));
        assert_eq!(set.len(), 1);

        set.reset();
        assert_eq!(set.len(), 2);
        assert!(set.is_permanently_excluded(2));
        assert!(!set.is_included(2));
        assert_flags_consistent(&set);
    }

    #[test]
    fn already_excluded_words_are_not_counted_twice() {
        let mut set = set(&["apple", "angle", "table"]);
        set.exclude_matching(true, Exclusion::Temporary, |w| w.has_letter(b'a'));
        assert_eq!(set.len(), 0);
        let again = set.exclude_matching(true, Exclusion::Temporary, |w| w.has_letter(b'e'));
        assert_eq!(again, 0);
        set.reset();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn permanent_exclusion_reaches_temporarily_excluded_words() {
        let mut set = set(&["apple", "angle", "table"]);
        set.exclude_matching(true, Exclusion::Temporary, |w| w.has_letter(b'p'));
        assert_eq!(set.len(), 2);

        let removed = set.exclude_matching(true, Exclusion::Permanent, |w| w.has_letter(b'p'));
        assert_eq!(removed, 1);
        assert!(set.is_permanently_excluded(0));
        assert_eq!(set.len(), 2);
        assert_flags_consistent(&set);

        set.reset();
        assert_eq!(set.len(), 2);
        assert!(!set.is_included(0));
        assert_flags_consistent(&set);
    }

    #[test]
    fn permanent_exclusion_shrinks_scan_without_moving_words() {
        let mut set = set(&["apple", "angle", "table"]);
        set.exclude_matching(true, Exclusion::Permanent, |w| w.has_letter(b'g'));
        assert_eq!(set.included_indices().collect::<Vec<_>>(), [0, 2]);
        assert_eq!(set.word(1).text(), "angle");
        assert_eq!(set.vocabulary_len(), 3);
    }
}
