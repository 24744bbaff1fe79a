//! Formatting utilities for terminal output

use crate::core::{Guess, Word};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }
    let filled = value.min(max).saturating_mul(width) / max;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many letters of a guess are in place
#[must_use]
pub fn likeness_bar(guess: &Guess) -> String {
    create_progress_bar(guess.likeness(), guess.word().len(), guess.word().len())
}

/// Lay words out in columns, `per_row` to a line
#[must_use]
pub fn word_columns(words: &[&Word], per_row: usize) -> Vec<String> {
    let width = words.iter().map(|w| w.len()).max().unwrap_or(0);

    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{:<width$}", w.text()))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// "1 word" / "3 words"
#[must_use]
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
