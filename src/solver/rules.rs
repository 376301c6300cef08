//! Elimination rules driven by feedback symbols
//!
//! Every rule reduces to one of two exclusion primitives. Each primitive
//! excludes a word iff `exists == predicate(word)`, so the same primitive
//! expresses both "must satisfy" (`exists = false`) and "must not satisfy"
//! (`exists = true`).

use super::candidates::{CandidateSet, Exclusion};
use crate::core::{Clue, Outcome};

impl CandidateSet {
    /// Exclude included words where `exists == (word[position] == letter)`
    pub fn exclude_if_letter_at_position(
        &mut self,
        letter: u8,
        position: usize,
        exists: bool,
        mode: Exclusion,
    ) -> usize {
        self.exclude_matching(exists, mode, |word| word.has_letter_at(letter, position))
    }

    /// Exclude included words where `exists == word.has_letter(letter)`
    pub fn exclude_if_has_letter(&mut self, letter: u8, exists: bool, mode: Exclusion) -> usize {
        self.exclude_matching(exists, mode, |word| word.has_letter(letter))
    }

    /// Apply one rule, returning how many words it excluded
    pub fn apply_rule(&mut self, rule: Rule, mode: Exclusion) -> usize {
        match rule {
            Rule::Exact { letter, position } => {
                self.exclude_if_letter_at_position(letter, position, false, mode)
            }
            Rule::Present { letter, position } => {
                self.exclude_if_letter_at_position(letter, position, true, mode)
                    + self.exclude_if_has_letter(letter, false, mode)
            }
            Rule::Absent { letter } => self.exclude_if_has_letter(letter, true, mode),
        }
    }

    /// Apply all five rules of a clue in position order
    pub fn apply_clue(&mut self, clue: &Clue, mode: Exclusion) -> usize {
        Rule::for_clue(clue).map(|rule| self.apply_rule(rule, mode)).sum()
    }
}

/// A single constraint learned from one letter of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `=`: the answer has `letter` at `position`
    Exact { letter: u8, position: usize },
    /// `-`: the answer has `letter`, but not at `position`
    Present { letter: u8, position: usize },
    /// `.`: the answer does not have `letter`
    Absent { letter: u8 },
}

impl Rule {
    #[must_use]
    pub const fn new(outcome: Outcome, letter: u8, position: usize) -> Self {
        match outcome {
            Outcome::Exact => Self::Exact { letter, position },
            Outcome::Present => Self::Present { letter, position },
            Outcome::Absent => Self::Absent { letter },
        }
    }

    /// The rules a clue implies, in position order
    pub fn for_clue(clue: &Clue) -> impl Iterator<Item = Self> + '_ {
        clue.pairs()
            .map(|(position, letter, outcome)| Self::new(outcome, letter, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::loader::words_from_slice;

    fn set(words: &[&str]) -> CandidateSet {
        CandidateSet::new(words_from_slice(words)).unwrap()
    }

    fn remaining(set: &CandidateSet) -> Vec<&str> {
        set.iter().map(Word::text).collect()
    }

    #[test]
    fn exact_rule_keeps_words_with_letter_in_place() {
        let mut set = set(&["apple", "angle", "table"]);
        let rule = Rule::Exact {
            letter: b'a',
            position: 0,
        };
        assert_eq!(set.apply_rule(rule, Exclusion::Permanent), 1);
        assert_eq!(remaining(&set), ["apple", "angle"]);
    }

    #[test]
    fn present_rule_requires_letter_elsewhere() {
        let mut set = set(&["apple", "angle", "table", "crust"]);
        // `a` reported present at position 1: table has it there, crust lacks it
        let rule = Rule::Present {
            letter: b'a',
            position: 1,
        };
        assert_eq!(set.apply_rule(rule, Exclusion::Permanent), 2);
        assert_eq!(remaining(&set), ["apple", "angle"]);
    }

    #[test]
    fn absent_rule_removes_words_with_letter() {
        let mut set = set(&["apple", "angle", "table"]);
        let rule = Rule::Absent { letter: b'p' };
        assert_eq!(set.apply_rule(rule, Exclusion::Temporary), 1);
        assert_eq!(remaining(&set), ["angle", "table"]);
    }

    #[test]
    fn xor_primitive_flips_with_exists() {
        let mut keep = set(&["apple", "angle", "table"]);
        keep.exclude_if_has_letter(b'n', false, Exclusion::Temporary);
        assert_eq!(remaining(&keep), ["angle"]);

        let mut drop = set(&["apple", "angle", "table"]);
        drop.exclude_if_has_letter(b'n', true, Exclusion::Temporary);
        assert_eq!(remaining(&drop), ["apple", "table"]);
    }

    #[test]
    fn clue_rules_follow_positions() {
        let guess = Word::new("apple").unwrap();
        let answer = Word::new("angle").unwrap();
        let rules: Vec<Rule> = Rule::for_clue(&Clue::observed(&guess, &answer)).collect();
        assert_eq!(
            rules,
            [
                Rule::Exact {
                    letter: b'a',
                    position: 0,
                },
                Rule::Absent { letter: b'p' },
                Rule::Absent { letter: b'p' },
                Rule::Exact {
                    letter: b'l',
                    position: 3,
                },
                Rule::Exact {
                    letter: b'e',
                    position: 4,
                },
            ]
        );
    }

    #[test]
    fn permanent_rules_only_shrink_the_set() {
        let mut set = set(&["apple", "angle", "table", "crust", "lapse"]);
        let rules = [
            Rule::Present {
                letter: b'l',
                position: 0,
            },
            Rule::Absent { letter: b'g' },
            Rule::Exact {
                letter: b'e',
                position: 4,
            },
        ];
        for rule in rules {
            let before = set.len();
            set.apply_rule(rule, Exclusion::Permanent);
            assert!(set.len() <= before);
        }
        assert_eq!(remaining(&set), ["apple", "table"]);
    }
}
