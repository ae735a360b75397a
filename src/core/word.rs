//! Word representation
//!
//! A Word stores a validated five-letter word in lowercase, the form used for
//! dictionary membership. Display code upper-cases it on the way out.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every secret and every guess
pub const WORD_LENGTH: usize = 5;

/// A five-letter word, normalised to lowercase ASCII
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Why a string is not a playable word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// Letter count, not byte count
    InvalidLength(usize),
    /// First character that is not an ASCII letter
    NotALetter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NotALetter(ch) => write!(f, "'{ch}' is not a letter"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Validate and normalise a word
    ///
    /// Input is case-insensitive; the stored form is lowercase.
    ///
    /// # Errors
    /// [`WordError::NotALetter`] for the first character outside `a-z`/`A-Z`,
    /// otherwise [`WordError::InvalidLength`] unless there are exactly 5.
    ///
    /// # Examples
    /// ```
    /// use interactive_lab::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.display(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into();
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::NotALetter(bad));
        }

        let text = text.to_ascii_lowercase();
        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self { text, chars })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Uppercase form for tiles and messages
    #[must_use]
    pub fn display(&self) -> String {
        self.text.to_ascii_uppercase()
    }

    /// Lowercase letters as bytes
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        letter_counts(&self.chars)
    }
}

/// Occurrences of each letter
pub(crate) fn letter_counts(letters: &[u8]) -> FxHashMap<u8, u8> {
    let mut counts = FxHashMap::default();
    for &ch in letters {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
