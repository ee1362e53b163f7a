//! The playable word list
//!
//! An immutable, deduplicated set of valid words with uniform random draws.

use crate::core::Word;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Immutable set of valid five-letter words
///
/// Backed by a vector (for uniform draws) and a hash set (for membership).
/// Read-only after construction.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

/// Error type for dictionary construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Dictionary contains no valid words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

impl Dictionary {
    /// Build a dictionary from a list of words, dropping duplicates
    ///
    /// Insertion order of first occurrences is preserved.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if `words` contains no words.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::Dictionary;
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let dictionary = Dictionary::new(words).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let mut unique = Vec::with_capacity(words.len());

        for word in words {
            if index.insert(word.clone()) {
                unique.push(word);
            }
        }

        if unique.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self {
            words: unique,
            index,
        })
    }

    /// Check whether a word is playable
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Draw a target word uniformly at random
    ///
    /// # Panics
    /// Will not panic - construction guarantees at least one word.
    #[must_use]
    pub fn pick(&self) -> &Word {
        self.words
            .choose(&mut rand::rng())
            .expect("dictionary is never empty")
    }

    /// Number of words in the dictionary
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false - an empty dictionary cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, in first-occurrence order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn dictionary_rejects_empty() {
        assert!(matches!(
            Dictionary::new(Vec::new()),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn dictionary_membership() {
        let dictionary = Dictionary::new(words(&["crane", "slate"])).unwrap();

        assert!(dictionary.contains(&Word::new("CRANE").unwrap()));
        assert!(dictionary.contains(&Word::new("slate").unwrap()));
        assert!(!dictionary.contains(&Word::new("audio").unwrap()));
    }

    #[test]
    fn dictionary_deduplicates() {
        let dictionary = Dictionary::new(words(&["crane", "CRANE", "slate"])).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words()[0].text(), "CRANE");
        assert_eq!(dictionary.words()[1].text(), "SLATE");
    }

    #[test]
    fn dictionary_pick_returns_member() {
        let dictionary = Dictionary::new(words(&["crane", "slate", "audio"])).unwrap();

        for _ in 0..20 {
            let picked = dictionary.pick();
            assert!(dictionary.contains(picked));
        }
    }

    #[test]
    fn dictionary_single_word_pick() {
        let dictionary = Dictionary::new(words(&["crane"])).unwrap();
        assert_eq!(dictionary.pick().text(), "CRANE");
    }
}
