//! Word game errors

use super::Outcome;
use crate::core::{EvaluationError, WORD_LENGTH};
use std::fmt;

/// Reasons a submission is rejected
///
/// `IncompleteGuess` and `NotInWordList` are recoverable: the guess is kept
/// as-is for the player to fix. `Evaluation` only surfaces on a broken
/// length invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    IncompleteGuess { length: usize },
    NotInWordList(String),
    GameOver(Outcome),
    Evaluation(EvaluationError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess { .. } => {
                write!(f, "Word must be {WORD_LENGTH} letters long!")
            }
            Self::NotInWordList(word) => {
                write!(f, "{} is not in the word list!", word.to_ascii_uppercase())
            }
            Self::GameOver(outcome) => write!(f, "Game already {outcome}"),
            Self::Evaluation(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Evaluation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EvaluationError> for GameError {
    fn from(err: EvaluationError) -> Self {
        Self::Evaluation(err)
    }
}
