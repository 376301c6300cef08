//! Formatting utilities for terminal output

use indicatif::{ProgressBar, ProgressStyle};

/// Create a text bar like `█████░░░░░`
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Lay words out `per_line` to a row, upper-cased
#[must_use]
pub fn format_candidates(words: &[String], per_line: usize) -> Vec<String> {
    words
        .chunks(per_line.max(1))
        .map(|row| {
            row.iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

/// Progress bar for the guess search, drawn on stderr
#[must_use]
pub fn search_progress_bar(label: &str) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "{spinner:.green} {prefix} [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));

    let bar = ProgressBar::new(0).with_style(style);
    bar.set_prefix(label.to_string());
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn candidates_are_chunked() {
        let words: Vec<String> = ["apple", "angle", "table"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            format_candidates(&words, 2),
            ["APPLE  ANGLE".to_string(), "TABLE".to_string()]
        );
    }
}
