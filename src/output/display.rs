//! Display functions for command results

use super::formatters::{likeness_bar, plural, word_columns};
use crate::core::{Guess, GuessError, Word};
use colored::Colorize;

const COLUMNS: usize = 6;

/// Print the words still consistent with the guesses
pub fn print_candidates(candidates: &[&Word], guesses: &[Guess]) {
    println!("\n{}", "─".repeat(60).green());
    println!(" {}", "POSSIBLE WORDS".bright_green().bold());
    println!("{}", "─".repeat(60).green());

    if guesses.is_empty() {
        println!("{}", "Enter your first guess to see possible words.".bright_black());
    } else if candidates.is_empty() {
        println!("{}", "No words match the guesses.".bright_black());
    } else {
        for line in word_columns(candidates, COLUMNS) {
            println!("  {}", line.bright_white().bold());
        }
        println!(
            "\n  {}",
            plural(candidates.len(), "word", "words").bright_cyan()
        );
    }
}

/// Print recorded guesses with their 1-based positions
pub fn print_guesses(guesses: &[Guess]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {}", "GUESSES".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    if guesses.is_empty() {
        println!("{}", "No guesses have been added yet.".bright_black());
        return;
    }

    for (i, guess) in guesses.iter().enumerate() {
        println!(
            "  {}. {} {} {}",
            (i + 1).to_string().bright_black(),
            guess.word().text().bright_white().bold(),
            likeness_bar(guess).green(),
            guess.likeness().to_string().bright_yellow()
        );
    }
}

/// Print prefix suggestions on one line
pub fn print_suggestions(suggestions: &[&Word]) {
    if suggestions.is_empty() {
        println!("{}", "No matching words.".bright_black());
        return;
    }

    let joined = suggestions
        .iter()
        .map(|w| w.text())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", joined.bright_white());
}

/// Print the likeness of two strings
pub fn print_likeness(a: &str, b: &str, score: usize) {
    println!(
        "{} vs {}: likeness {}",
        a.bright_white().bold(),
        b.bright_white().bold(),
        score.to_string().bright_yellow().bold()
    );
}

/// Print a rejected guess
pub fn print_guess_error(error: GuessError) {
    println!("{} {error}", "✗".red().bold());
}
