//! Length-keyed dictionary of terminal words
//!
//! Terminals only ever show words of a single length, so the dictionary is
//! stored as one ordered list per length.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Words grouped by length, each group in source order
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    by_length: FxHashMap<usize, Vec<Word>>,
}

impl Dictionary {
    /// Build a dictionary from words in source order
    ///
    /// Repeated words are kept only at their first position.
    ///
    /// # Examples
    /// ```
    /// use hacking_solver::core::Word;
    /// use hacking_solver::dictionary::Dictionary;
    ///
    /// let words = ["WORD", "WARD", "GHOUL"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::from_words(words);
    ///
    /// assert_eq!(dictionary.words_of_length(4).len(), 2);
    /// assert_eq!(dictionary.words_of_length(5).len(), 1);
    /// assert!(dictionary.words_of_length(6).is_empty());
    /// ```
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut by_length: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        let mut seen: FxHashSet<Word> = FxHashSet::default();

        for word in words {
            if seen.insert(word.clone()) {
                by_length.entry(word.len()).or_default().push(word);
            }
        }

        Self { by_length }
    }

    /// Dictionary built from the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(loader::words_from_slice(WORDS))
    }

    /// All words of the given length, in source order
    ///
    /// Returns an empty slice if there are none.
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Every word, shortest lengths first, each length in source order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.lengths()
            .into_iter()
            .flat_map(move |length| self.words_of_length(length))
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_length.values().all(Vec::is_empty)
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Dictionary {
        loader::words_from_slice(words).into_iter().collect()
    }

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_holds_every_word() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.len(), WORDS_COUNT);
        assert!(
            dictionary
                .words_of_length(10)
                .iter()
                .any(|w| w.text() == "ARCHITECTS")
        );
    }

    #[test]
    fn groups_preserve_source_order() {
        let dictionary = dictionary(&["WORD", "GHOUL", "WARD", "BIRD", "VAULT"]);

        let fours: Vec<&str> = dictionary.words_of_length(4).iter().map(Word::text).collect();
        assert_eq!(fours, ["WORD", "WARD", "BIRD"]);

        let fives: Vec<&str> = dictionary.words_of_length(5).iter().map(Word::text).collect();
        assert_eq!(fives, ["GHOUL", "VAULT"]);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let dictionary = dictionary(&["WORD", "WARD", "word", "BIRD"]);

        let fours: Vec<&str> = dictionary.words_of_length(4).iter().map(Word::text).collect();
        assert_eq!(fours, ["WORD", "WARD", "BIRD"]);
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn large_list_with_repeats_dedups_in_order() {
        let words: Vec<Word> = (0..20_000u32)
            .map(|i| {
                // Four base-26 digits, so every index is a distinct word
                let text: String = (0..4)
                    .map(|place| char::from(b'A' + u8::try_from(i / 26u32.pow(place) % 26).unwrap()))
                    .collect();
                Word::new(text).unwrap()
            })
            .collect();

        let dictionary: Dictionary = words.iter().cloned().chain(words.iter().cloned()).collect();

        assert_eq!(dictionary.len(), words.len());
        assert_eq!(dictionary.words_of_length(4), &words[..]);
    }

    #[test]
    fn missing_length_is_empty() {
        let dictionary = dictionary(&["WORD"]);
        assert!(dictionary.words_of_length(7).is_empty());
        assert!(dictionary.words_of_length(0).is_empty());
    }

    #[test]
    fn iter_is_ascending_by_length() {
        let dictionary = dictionary(&["TERMINAL", "WORD", "GHOUL", "WARD"]);

        let all: Vec<&str> = dictionary.iter().map(Word::text).collect();
        assert_eq!(all, ["WORD", "WARD", "GHOUL", "TERMINAL"]);
        assert_eq!(dictionary.lengths(), [4, 5, 8]);
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::default();
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.len(), 0);
        assert_eq!(dictionary.iter().count(), 0);
    }
}
