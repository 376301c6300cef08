//! Display functions for command results

use super::formatters::{create_progress_bar, format_candidates};
use crate::commands::{BenchmarkResult, HintResult, PrecomputeResult, SolveResult};
use crate::solver::GuessReport;
use colored::Colorize;

/// Print the result of a hint request
pub fn print_hint_result(result: &HintResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Found {} words and {} clues",
        result.vocabulary, result.clues
    );
    println!(
        "{} candidates remaining",
        result.remaining.to_string().bright_yellow().bold()
    );

    if !result.candidates.is_empty() {
        println!();
        for row in format_candidates(&result.candidates, 6) {
            println!("  {row}");
        }
    }

    println!("{}", "─".repeat(60).cyan());
    println!(
        "\nBest guess: {}",
        result.hint.guess.text().to_uppercase().bright_green().bold()
    );
    if result.hint.pairs_evaluated > 0 {
        println!(
            "  Score:     {} over {} trials",
            result.hint.total, result.hint.pairs_evaluated
        );
        println!(
            "  Expected:  {:.2} candidates remain",
            result.hint.expected_remaining()
        );
    } else {
        println!("  Only one candidate remains");
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}  {}",
            i + 1,
            step.word.to_uppercase(),
            step.feedback.to_emoji(),
            step.feedback
                .outcomes()
                .iter()
                .map(|o| o.symbol())
                .collect::<String>()
                .bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Score:      {}", step.total);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print how a single guess splits the candidates
pub fn print_analysis_result(report: &GuessReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        report.guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let expected = if report.remaining == 0 {
        0.0
    } else {
        report.total as f64 / report.remaining as f64
    };
    let bar = create_progress_bar(expected, report.remaining as f64, 30);

    println!("\n📊 Against {} candidates:", report.remaining);
    println!("   Score:       {}", report.total.to_string().bright_yellow());
    println!("   Expected:    [{}] {expected:.2} remain", bar.green());
    println!("   Worst case:  {} remain", report.worst_case);
    println!("   Feedbacks:   {} distinct", report.distinct_feedbacks);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.2}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(&usize, &usize)> = result.distribution.iter().collect();
    counts.sort();
    for (guess_count, &count) in counts {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print the result of building a score table
pub fn print_precompute_result(result: &PrecomputeResult, out: &str) {
    println!(
        "{} {} guesses × {} answers in {:.2}s → {}",
        "Score table:".bright_cyan().bold(),
        result.guesses,
        result.answers,
        result.duration.as_secs_f64(),
        out.bright_white()
    );
}
