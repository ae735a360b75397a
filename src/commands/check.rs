//! Guess checking command
//!
//! Scores a single guess against a chosen secret without starting a game.

use crate::core::{Evaluation, LetterStatusMap, Verdict, Word, evaluate};
use crate::wordlists::Dictionary;

/// Result of checking one guess
pub struct CheckResult {
    pub guess: Word,
    pub secret: Word,
    pub evaluation: Evaluation,
    pub letters: LetterStatusMap,
    /// Whether the guess would be accepted in a real game
    pub in_word_list: bool,
}

impl CheckResult {
    #[must_use]
    pub fn correct(&self) -> usize {
        self.evaluation.count(Verdict::Correct)
    }

    #[must_use]
    pub fn present(&self) -> usize {
        self.evaluation.count(Verdict::Present)
    }
}

/// Evaluate `guess` against `secret`
///
/// Neither word has to be in the dictionary; membership is only reported.
///
/// # Errors
///
/// Returns an error if either word is not 5 letters long, or contains
/// anything but ASCII letters.
pub fn check_guess(
    guess: &str,
    secret: &str,
    dictionary: &Dictionary,
) -> Result<CheckResult, String> {
    let evaluation = evaluate(guess, secret).map_err(|e| e.to_string())?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;

    let mut letters = LetterStatusMap::new();
    letters.record(&guess, &evaluation);
    let in_word_list = dictionary.contains(guess.text());

    Ok(CheckResult {
        guess,
        secret,
        evaluation,
        letters,
        in_word_list,
    })
}
