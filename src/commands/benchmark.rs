//! Benchmark command
//!
//! Plays full games against a sample of target words and summarises them.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::{FeedbackSource, SearchOptions};
use anyhow::Result;
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets from the vocabulary
///
/// A seed makes the sample reproducible.
#[must_use]
pub fn sample_targets(vocabulary: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    match seed {
        Some(seed) => sample_with(vocabulary, count, &mut StdRng::seed_from_u64(seed)),
        None => sample_with(vocabulary, count, &mut rand::rng()),
    }
}

fn sample_with<R: Rng + ?Sized>(vocabulary: &[Word], count: usize, rng: &mut R) -> Vec<Word> {
    vocabulary.choose_multiple(rng, count).cloned().collect()
}

/// Solve every target, each game starting from the full vocabulary
///
/// # Errors
///
/// Returns an error if a target is not in the vocabulary.
pub fn run_benchmark<S: FeedbackSource>(
    vocabulary: &[Word],
    targets: &[Word],
    source: &S,
    options: &SearchOptions,
    max_guesses: usize,
    progress: &ProgressBar,
) -> Result<BenchmarkResult> {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    progress.set_length(targets.len() as u64);
    for target in targets {
        let mut config = SolveConfig::new(target.text().to_string());
        config.max_guesses = max_guesses;
        let result = solve_word(config, vocabulary, source, options.clone())?;

        let guesses = result.guesses.len();
        if result.success {
            solved += 1;
        }
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses_seen = max_guesses_seen.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;

        progress.set_message(format!("{target}: {guesses}"));
        progress.inc(1);
    }
    progress.finish_and_clear();

    let duration = start.elapsed();
    let total_words = targets.len();
    let (average_guesses, words_per_second) = if total_words == 0 {
        (0.0, 0.0)
    } else {
        (
            total_guesses as f64 / total_words as f64,
            total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
        )
    };

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses,
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses: max_guesses_seen,
        distribution,
        duration,
        words_per_second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::LiveScoring;
    use crate::wordlists::loader::words_from_slice;

    const VOCAB: [&str; 10] = [
        "apple", "angle", "table", "cable", "crust", "lapse", "speed", "abide", "crane", "slate",
    ];

    fn bench(vocabulary: &[Word], targets: &[Word], max_guesses: usize) -> BenchmarkResult {
        run_benchmark(
            vocabulary,
            targets,
            &LiveScoring,
            &SearchOptions::sequential(),
            max_guesses,
            &ProgressBar::hidden(),
        )
        .unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let vocabulary = words_from_slice(&VOCAB);
        let result = bench(&vocabulary, &vocabulary, 10);

        assert_eq!(result.total_words, VOCAB.len());
        assert_eq!(result.solved, VOCAB.len());
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let vocabulary = words_from_slice(&VOCAB);
        let result = bench(&vocabulary, &vocabulary[..5], 10);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
    }

    #[test]
    fn benchmark_empty_target_list() {
        let vocabulary = words_from_slice(&VOCAB);
        let result = bench(&vocabulary, &[], 6);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn seeded_sample_is_reproducible() {
        let vocabulary = words_from_slice(&VOCAB);
        let first = sample_targets(&vocabulary, 4, Some(7));
        let second = sample_targets(&vocabulary, 4, Some(7));
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn sample_is_capped_by_vocabulary() {
        let vocabulary = words_from_slice(&VOCAB);
        assert_eq!(sample_targets(&vocabulary, 50, None).len(), VOCAB.len());
    }
}
