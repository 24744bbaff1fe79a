//! Candidate filtering

use crate::core::{Guess, Word};
use crate::dictionary::Dictionary;
use log::debug;

/// Filter the dictionary to words consistent with every guess
///
/// Only words as long as the first guess are considered. A word survives iff
/// its likeness against each guess equals that guess's reported likeness.
/// Returns an empty list when there are no guesses or no words of the
/// required length; dictionary order is preserved otherwise.
///
/// # Examples
/// ```
/// use hacking_solver::core::{Guess, Word};
/// use hacking_solver::dictionary::Dictionary;
/// use hacking_solver::solver::filter_candidates;
///
/// let dictionary: Dictionary = ["WORD", "WARD", "BIRD", "CORD"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let guesses = [Guess::parse("WORD 4").unwrap()];
/// let candidates = filter_candidates(&dictionary, &guesses);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].text(), "WORD");
///
/// assert!(filter_candidates(&dictionary, &[]).is_empty());
/// ```
#[must_use]
pub fn filter_candidates<'d>(dictionary: &'d Dictionary, guesses: &[Guess]) -> Vec<&'d Word> {
    let Some(first) = guesses.first() else {
        return Vec::new();
    };

    let length = first.word().len();
    let pool = dictionary.words_of_length(length);

    let candidates: Vec<&Word> = pool
        .iter()
        .filter(|&candidate| guesses.iter().all(|guess| guess.admits(candidate)))
        .collect();

    debug!(
        "length {length}: {} of {} words match {} guesses",
        candidates.len(),
        pool.len(),
        guesses.len()
    );

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::likeness;
    use crate::dictionary::loader::words_from_slice;

    fn setup_dictionary() -> Dictionary {
        words_from_slice(&["WORD", "WARD", "BIRD", "CORD", "GHOUL", "VAULT", "POWER"])
            .into_iter()
            .collect()
    }

    fn guesses(texts: &[&str]) -> Vec<Guess> {
        texts.iter().map(|t| Guess::parse(t).unwrap()).collect()
    }

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn empty_guesses_yield_nothing() {
        let dictionary = setup_dictionary();
        assert!(filter_candidates(&dictionary, &[]).is_empty());
    }

    #[test]
    fn exact_likeness_keeps_only_the_word() {
        let dictionary = setup_dictionary();
        let result = filter_candidates(&dictionary, &guesses(&["WORD 4"]));
        assert_eq!(texts(&result), ["WORD"]);
    }

    #[test]
    fn likeness_two_matches_predicate_exactly() {
        let dictionary = setup_dictionary();
        let word = Word::new("WORD").unwrap();
        let result = filter_candidates(&dictionary, &guesses(&["WORD 2"]));

        // Every length-4 word is in the result iff its likeness is exactly 2
        for candidate in dictionary.words_of_length(4) {
            let expected = likeness(candidate.text(), word.text()) == 2;
            assert_eq!(result.contains(&candidate), expected, "{candidate}");
        }
        // WARD=3, BIRD=2, CORD=3
        assert_eq!(texts(&result), ["BIRD"]);
    }

    #[test]
    fn only_first_guess_length_considered() {
        let dictionary = setup_dictionary();
        let result = filter_candidates(&dictionary, &guesses(&["VAULT 0"]));
        assert_eq!(texts(&result), ["GHOUL", "POWER"]);
        assert!(result.iter().all(|w| w.len() == 5));
    }

    #[test]
    fn missing_length_yields_nothing() {
        let dictionary = setup_dictionary();
        assert!(filter_candidates(&dictionary, &guesses(&["TERMINAL 3"])).is_empty());
    }

    #[test]
    fn conjunction_of_guesses() {
        let dictionary = setup_dictionary();

        // WORD 3 keeps WARD and CORD; CORD 2 then keeps only WARD
        let result = filter_candidates(&dictionary, &guesses(&["WORD 3"]));
        assert_eq!(texts(&result), ["WARD", "CORD"]);

        let result = filter_candidates(&dictionary, &guesses(&["WORD 3", "CORD 2"]));
        assert_eq!(texts(&result), ["WARD"]);
    }

    #[test]
    fn guess_order_does_not_matter() {
        let dictionary = setup_dictionary();
        let forward = filter_candidates(&dictionary, &guesses(&["WORD 3", "CORD 2"]));
        let backward = filter_candidates(&dictionary, &guesses(&["CORD 2", "WORD 3"]));
        assert_eq!(forward, backward);
    }

    #[test]
    fn preserves_dictionary_order() {
        let dictionary: Dictionary = words_from_slice(&["CORD", "WARD", "LORD", "FORD"])
            .into_iter()
            .collect();
        let result = filter_candidates(&dictionary, &guesses(&["WORD 3"]));
        assert_eq!(texts(&result), ["CORD", "WARD", "LORD", "FORD"]);
    }

    #[test]
    fn impossible_likeness_yields_nothing() {
        let dictionary = setup_dictionary();
        assert!(filter_candidates(&dictionary, &guesses(&["WORD 9"])).is_empty());
    }
}
