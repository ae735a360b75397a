//! Formatting utilities for terminal output

use crate::core::{Evaluation, Verdict, Word};
use colored::{ColoredString, Colorize};

/// A single letter tile coloured by its verdict
#[must_use]
pub fn tile(letter: u8, verdict: Option<Verdict>) -> ColoredString {
    let face = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match verdict {
        Some(Verdict::Correct) => face.black().bold().on_green(),
        Some(Verdict::Present) => face.black().bold().on_yellow(),
        Some(Verdict::Absent) => face.white().on_bright_black(),
        None => face.bold(),
    }
}

/// A guess rendered as a row of coloured tiles
#[must_use]
pub fn tile_row(guess: &Word, evaluation: &Evaluation) -> String {
    guess
        .chars()
        .iter()
        .zip(evaluation.verdicts())
        .map(|(&letter, &verdict)| tile(letter, Some(verdict)).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
