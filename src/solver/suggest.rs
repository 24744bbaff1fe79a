//! Prefix suggestions for the word currently being typed

use super::filter::filter_candidates;
use crate::core::{Guess, Word};
use crate::dictionary::Dictionary;

/// Words starting with the word part of `input`
///
/// The word part is everything before the first space, uppercased. Before
/// any guess is recorded the whole dictionary is searched (shortest lengths
/// first); afterwards only the remaining candidates are. Empty input gives no
/// suggestions.
///
/// # Examples
/// ```
/// use hacking_solver::core::Word;
/// use hacking_solver::dictionary::Dictionary;
/// use hacking_solver::solver::suggestions;
///
/// let dictionary: Dictionary = ["WORD", "WARD", "WORDS"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let found = suggestions(&dictionary, &[], "wor");
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].text(), "WORD");
/// ```
#[must_use]
pub fn suggestions<'d>(dictionary: &'d Dictionary, guesses: &[Guess], input: &str) -> Vec<&'d Word> {
    if input.is_empty() {
        return Vec::new();
    }

    let prefix = input
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_uppercase();

    if guesses.is_empty() {
        dictionary.iter().filter(|w| w.starts_with(&prefix)).collect()
    } else {
        filter_candidates(dictionary, guesses)
            .into_iter()
            .filter(|w| w.starts_with(&prefix))
            .collect()
    }
}

/// First suggestion for `input`, if there is one
#[must_use]
pub fn autocomplete<'d>(dictionary: &'d Dictionary, guesses: &[Guess], input: &str) -> Option<&'d Word> {
    suggestions(dictionary, guesses, input).into_iter().next()
}
