//! One-shot filtering from command-line guesses

use crate::core::{GuessError, Word};
use crate::dictionary::Dictionary;
use crate::solver::Session;
use thiserror::Error;

/// A guess argument that could not be recorded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("guess {position} ({text:?}): {source}")]
pub struct FilterError {
    /// 1-based argument position
    pub position: usize,
    pub text: String,
    #[source]
    pub source: GuessError,
}

/// Outcome of applying every guess argument
#[derive(Debug, Clone)]
pub struct FilterResult<'d> {
    pub session: Session,
    pub candidates: Vec<&'d Word>,
}

/// Record each `WORD LIKENESS` argument in order, then filter
///
/// # Errors
///
/// Stops at the first argument the session rejects.
///
/// # Examples
/// ```
/// use hacking_solver::commands::filter_words;
/// use hacking_solver::dictionary::Dictionary;
///
/// let dictionary = Dictionary::embedded();
/// let result = filter_words(&dictionary, &["WORD 4"]).unwrap();
/// assert_eq!(result.candidates.len(), 1);
/// ```
pub fn filter_words<'d, S: AsRef<str>>(
    dictionary: &'d Dictionary,
    inputs: &[S],
) -> Result<FilterResult<'d>, FilterError> {
    let mut session = Session::new();

    for (i, input) in inputs.iter().enumerate() {
        let text = input.as_ref();
        session = session.try_submit(text).map_err(|source| FilterError {
            position: i + 1,
            text: text.to_string(),
            source,
        })?;
    }

    let candidates = session.candidates(dictionary);
    Ok(FilterResult {
        session,
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;

    fn setup_dictionary() -> Dictionary {
        words_from_slice(&["WORD", "WARD", "BIRD", "CORD"])
            .into_iter()
            .collect()
    }

    #[test]
    fn filters_with_all_arguments() {
        let dictionary = setup_dictionary();
        let result = filter_words(&dictionary, &["WORD 3", "CORD 2"]).unwrap();

        assert_eq!(result.session.guesses().len(), 2);
        let texts: Vec<&str> = result.candidates.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["WARD"]);
    }

    #[test]
    fn no_arguments_no_candidates() {
        let dictionary = setup_dictionary();
        let result = filter_words::<&str>(&dictionary, &[]).unwrap();
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn reports_first_rejected_argument() {
        let dictionary = setup_dictionary();
        let err = filter_words(&dictionary, &["WORD 3", "GHOUL 1", "nonsense"]).unwrap_err();

        assert_eq!(err.position, 2);
        assert_eq!(err.text, "GHOUL 1");
        assert_eq!(err.source, GuessError::LengthMismatch);
        assert_eq!(
            err.to_string(),
            "guess 2 (\"GHOUL 1\"): This guess is a different length to the first guess"
        );
    }

    #[test]
    fn accepts_owned_strings() {
        let dictionary = setup_dictionary();
        let args = vec!["word 4".to_string()];
        let result = filter_words(&dictionary, &args).unwrap();
        assert_eq!(result.candidates.len(), 1);
    }
}
