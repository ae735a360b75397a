//! On-screen keyboard
//!
//! The fixed key layout and the projection of a [`LetterStatusMap`] onto it.
//! Physical and on-screen input both arrive here as [`Key`] values.

use crate::core::{LetterStatusMap, Verdict};

/// A discrete input event for the word game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// An uppercase letter A-Z
    Letter(u8),
    Enter,
    Backspace,
}

impl Key {
    /// Map a typed character to a key; non-letters are ignored
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.is_ascii_alphabetic()
            .then(|| Self::Letter(ch.to_ascii_uppercase() as u8))
    }

    /// Label drawn on the key cap
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(letter) => char::from(letter).to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "←".to_string(),
        }
    }
}

/// Key rows, top to bottom
pub const LAYOUT: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// All key rows with action keys flanking the bottom row
#[must_use]
pub fn rows() -> Vec<Vec<Key>> {
    LAYOUT
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let letters = row.bytes().map(Key::Letter);
            if i == LAYOUT.len() - 1 {
                std::iter::once(Key::Enter)
                    .chain(letters)
                    .chain(std::iter::once(Key::Backspace))
                    .collect()
            } else {
                letters.collect()
            }
        })
        .collect()
}

/// Status used to colour a key; action keys never carry one
#[must_use]
pub fn key_status(letters: &LetterStatusMap, key: Key) -> Option<Verdict> {
    match key {
        Key::Letter(letter) => letters.get(letter),
        Key::Enter | Key::Backspace => None,
    }
}

/// Project the whole layout onto the current letter statuses
#[must_use]
pub fn project(letters: &LetterStatusMap) -> Vec<Vec<(Key, Option<Verdict>)>> {
    rows()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|key| (key, key_status(letters, key)))
                .collect()
        })
        .collect()
}
