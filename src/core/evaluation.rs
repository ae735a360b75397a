//! Guess evaluation
//!
//! An evaluation holds one verdict per letter position:
//! - Correct: letter in the right position
//! - Present: letter in the secret, wrong position
//! - Absent: letter not in the secret (or every occurrence already claimed)

use super::word::{WORD_LENGTH, Word, letter_counts};
use rustc_hash::FxHashMap;
use std::fmt;

/// Per-position verdict for a submitted guess
///
/// Ordered by strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Emoji tile for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Raised when a guess and secret cannot be compared letter for letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// Lengths counted in characters
    LengthMismatch { guess: usize, secret: usize },
    /// First character on either side that is not an ASCII letter
    NotALetter(char),
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, secret } => write!(
                f,
                "Guess has {guess} letters but secret has {secret} (both must be {WORD_LENGTH})"
            ),
            Self::NotALetter(ch) => write!(f, "'{ch}' is not a letter"),
        }
    }
}

impl std::error::Error for EvaluationError {}

/// Verdicts for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([Verdict; WORD_LENGTH]);

impl Evaluation {
    /// All correct (the guess is the secret)
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Evaluate a validated guess against a validated secret
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches correct and remove them from the pool
    /// 2. Second pass: mark present from whatever remains in the pool
    ///
    /// # Examples
    /// ```
    /// use interactive_lab::core::{Evaluation, Verdict, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let evaluation = Evaluation::calculate(&guess, &secret);
    ///
    /// assert_eq!(evaluation.to_emoji(), "⬜🟩🟩🟨🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        Self(two_pass(guess.chars(), secret.chars(), secret.char_counts()))
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Verdicts in position order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert the evaluation to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

/// Evaluate raw guess letters against raw secret letters
///
/// Comparison is case-insensitive. Both inputs must be exactly
/// [`WORD_LENGTH`] ASCII letters long.
///
/// # Errors
/// Returns [`EvaluationError::LengthMismatch`] if either side has the wrong
/// number of characters, otherwise [`EvaluationError::NotALetter`] for the
/// first character outside `a-z`/`A-Z`.
///
/// # Examples
/// ```
/// use interactive_lab::core::{Verdict, evaluate};
///
/// let evaluation = evaluate("ERASE", "speed").unwrap();
/// assert_eq!(evaluation.count(Verdict::Present), 3);
/// assert!(evaluate("four", "crane").is_err());
/// ```
pub fn evaluate(guess: &str, secret: &str) -> Result<Evaluation, EvaluationError> {
    let (guess_len, secret_len) = (guess.chars().count(), secret.chars().count());
    if guess_len != WORD_LENGTH || secret_len != WORD_LENGTH {
        return Err(EvaluationError::LengthMismatch {
            guess: guess_len,
            secret: secret_len,
        });
    }
    if let Some(bad) = guess
        .chars()
        .chain(secret.chars())
        .find(|c| !c.is_ascii_alphabetic())
    {
        return Err(EvaluationError::NotALetter(bad));
    }

    // Five ASCII letters are five bytes
    let guess = guess.to_ascii_lowercase();
    let secret = secret.to_ascii_lowercase();
    let mismatch = || EvaluationError::LengthMismatch {
        guess: guess_len,
        secret: secret_len,
    };
    let guess_letters: &[u8; WORD_LENGTH] =
        guess.as_bytes().try_into().map_err(|_| mismatch())?;
    let secret_letters: &[u8; WORD_LENGTH] =
        secret.as_bytes().try_into().map_err(|_| mismatch())?;

    Ok(Evaluation(two_pass(
        guess_letters,
        secret_letters,
        letter_counts(secret_letters),
    )))
}

fn two_pass(
    guess: &[u8; WORD_LENGTH],
    secret: &[u8; WORD_LENGTH],
    mut available: FxHashMap<u8, u8>,
) -> [Verdict; WORD_LENGTH] {
    let mut result = [Verdict::Absent; WORD_LENGTH];

    // First pass: exact position matches consume their secret slot
    for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            result[i] = Verdict::Correct;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present only while unclaimed occurrences remain
    for (i, &g) in guess.iter().enumerate() {
        if result[i] == Verdict::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            result[i] = Verdict::Present;
            *count -= 1;
        }
    }

    result
}
