//! Core domain types for the word game
//!
//! This module contains the pure word, evaluation and letter-status types.
//! Nothing here touches I/O or randomness.

mod evaluation;
mod letters;
mod word;

pub use evaluation::{Evaluation, EvaluationError, Verdict, evaluate};
pub use letters::LetterStatusMap;
pub use word::{WORD_LENGTH, Word, WordError};
