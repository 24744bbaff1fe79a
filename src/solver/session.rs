//! Guess session state
//!
//! A [`Session`] is a value: every operation returns a new session and leaves
//! the old one untouched. Callers keep whichever they want.

use super::filter::filter_candidates;
use crate::core::{Guess, GuessError, Word};
use crate::dictionary::Dictionary;
use log::{debug, trace};

/// Recorded guesses plus the error from the last rejected submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    guesses: Vec<Guess>,
    error: Option<GuessError>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded guesses in submission order
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Error left by the most recent submission, if it was rejected
    #[must_use]
    pub const fn error(&self) -> Option<GuessError> {
        self.error
    }

    /// Word length every guess must share, once the first guess is in
    #[must_use]
    pub fn word_length(&self) -> Option<usize> {
        self.guesses.first().map(|g| g.word().len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    /// Validate `input` and return the session with the guess appended
    ///
    /// `input` is trimmed first. Checks run in order: format, duplicate word,
    /// length against the first guess. The returned session has no error.
    ///
    /// # Errors
    /// Returns the first [`GuessError`] encountered; `self` is unchanged.
    ///
    /// # Examples
    /// ```
    /// use hacking_solver::core::GuessError;
    /// use hacking_solver::solver::Session;
    ///
    /// let session = Session::new().try_submit("vault 2").unwrap();
    /// assert_eq!(session.guesses().len(), 1);
    ///
    /// assert_eq!(session.try_submit("VAULT 3"), Err(GuessError::Duplicate));
    /// assert_eq!(session.try_submit("WORD 1"), Err(GuessError::LengthMismatch));
    /// ```
    pub fn try_submit(&self, input: &str) -> Result<Self, GuessError> {
        let guess = Guess::parse(input.trim())?;
        self.try_add(guess)
    }

    /// Append an already parsed guess, enforcing the session invariants
    ///
    /// # Errors
    /// `GuessError::Duplicate` if the word is already recorded,
    /// `GuessError::LengthMismatch` if its length differs from the first guess.
    pub fn try_add(&self, guess: Guess) -> Result<Self, GuessError> {
        if self.guesses.iter().any(|g| g.word() == guess.word()) {
            return Err(GuessError::Duplicate);
        }

        if let Some(length) = self.word_length()
            && length != guess.word().len()
        {
            return Err(GuessError::LengthMismatch);
        }

        debug!("adding guess {guess}");
        let mut guesses = self.guesses.clone();
        guesses.push(guess);

        Ok(Self {
            guesses,
            error: None,
        })
    }

    /// Submit `input`, recording any rejection as the current error
    ///
    /// Blank input is ignored and returns an identical session.
    #[must_use]
    pub fn submit(&self, input: &str) -> Self {
        if input.trim().is_empty() {
            return self.clone();
        }

        match self.try_submit(input) {
            Ok(next) => next,
            Err(error) => {
                trace!("rejected {input:?}: {error}");
                Self {
                    guesses: self.guesses.clone(),
                    error: Some(error),
                }
            }
        }
    }

    /// Session without the guess at `index`
    ///
    /// An out-of-range index returns an identical guess list.
    #[must_use]
    pub fn remove(&self, index: usize) -> Self {
        let guesses = self
            .guesses
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, g)| g.clone())
            .collect();

        Self {
            guesses,
            error: None,
        }
    }

    /// Fresh session with no guesses and no error
    #[must_use]
    pub fn reset() -> Self {
        Self::default()
    }

    /// Dictionary words consistent with every recorded guess
    #[must_use]
    pub fn candidates<'d>(&self, dictionary: &'d Dictionary) -> Vec<&'d Word> {
        filter_candidates(dictionary, &self.guesses)
    }
}
