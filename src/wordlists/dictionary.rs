//! The word oracle's dictionary
//!
//! One finite list serves both as the pool secrets are drawn from and as the
//! membership check for submitted guesses.

use super::{WORDS, loader::words_from_slice};
use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error raised when a dictionary cannot be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Dictionary contains no valid five-letter words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Read-only, case-insensitive word list
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from validated words, dropping duplicates
    ///
    /// # Errors
    /// Returns [`DictionaryError::Empty`] if no words are given.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(word.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, index })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded list is empty, which the build prevents in
    /// practice.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(words_from_slice(WORDS))
    }

    /// Draw a secret uniformly at random
    ///
    /// Never fails: construction guarantees at least one word.
    pub fn select_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// Case-insensitive membership check
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.index.contains(&candidate.to_ascii_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}
