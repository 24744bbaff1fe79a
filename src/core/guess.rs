//! Guess records and the `WORD LIKENESS` text format

use super::Word;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// One letter run, a single space, one digit run. ASCII only.
static GUESS_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+) ([0-9]+)$").expect("guess format regex is valid"));

/// Reasons a submitted guess is rejected
///
/// All are recoverable: the guess list is left untouched and the user may
/// simply try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guesses should be in the form: GUESS LIKENESS. For example; ARCHITECTS 3")]
    Format,
    #[error("This guess has already been added")]
    Duplicate,
    #[error("This guess is a different length to the first guess")]
    LengthMismatch,
}

/// A guessed word and the likeness the terminal reported for it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    word: Word,
    likeness: usize,
}

impl Guess {
    #[must_use]
    pub const fn new(word: Word, likeness: usize) -> Self {
        Self { word, likeness }
    }

    /// Parse a guess from `WORD LIKENESS` text
    ///
    /// The text must already be trimmed. The word is uppercased; likeness
    /// values too large for `usize` saturate, since no word can match them
    /// anyway.
    ///
    /// # Errors
    /// Returns `GuessError::Format` if the text is not a run of ASCII letters,
    /// one space and a run of ASCII digits.
    ///
    /// # Examples
    /// ```
    /// use hacking_solver::core::{Guess, GuessError};
    ///
    /// let guess = Guess::parse("architects 3").unwrap();
    /// assert_eq!(guess.word().text(), "ARCHITECTS");
    /// assert_eq!(guess.likeness(), 3);
    ///
    /// assert_eq!(Guess::parse("12 WORD"), Err(GuessError::Format));
    /// ```
    pub fn parse(text: &str) -> Result<Self, GuessError> {
        let caps = GUESS_FORMAT.captures(text).ok_or(GuessError::Format)?;

        let word = Word::new(&caps[1]).map_err(|_| GuessError::Format)?;
        let likeness = caps[2].parse::<usize>().unwrap_or(usize::MAX);

        Ok(Self { word, likeness })
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn likeness(&self) -> usize {
        self.likeness
    }

    /// Whether `candidate` would have produced this guess's likeness
    #[inline]
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        candidate.likeness(&self.word) == self.likeness
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.likeness)
    }
}

impl std::str::FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
