//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::Dictionary;
use crate::core::Word;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines are ignored. Lines that are not a valid word are skipped with
/// a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hacking_solver::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words: Vec<Word> = parse_lines(&content);
    info!("loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Load a file straight into a [`Dictionary`]
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    load_from_file(path).map(Dictionary::from_words)
}

fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("skipping line {}: {trimmed:?}: {e}", number + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hacking_solver::dictionary::loader::words_from_slice;
/// use hacking_solver::dictionary::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
