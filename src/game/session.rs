//! Word game session: secret, ledger, in-progress guess and outcome
//!
//! All state for one game lives in a [`Session`]. Every operation either
//! commits fully or leaves the session untouched.

use super::GameError;
use crate::core::{Evaluation, LetterStatusMap, WORD_LENGTH, Word, evaluate};
use crate::keyboard::Key;
use crate::wordlists::Dictionary;
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

/// Maximum number of submitted guesses per session
pub const MAX_GUESSES: usize = 6;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// One submitted guess and its verdicts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submitted {
    pub evaluation: Evaluation,
    pub outcome: Outcome,
    /// 1-based number of this guess
    pub turn: usize,
}

/// One game against one secret
#[derive(Debug, Clone)]
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    secret: Word,
    ledger: Vec<LedgerEntry>,
    current: String,
    letters: LetterStatusMap,
    outcome: Outcome,
}

impl<'a> Session<'a> {
    /// Start a session with a secret drawn from the dictionary
    pub fn new<R: Rng + ?Sized>(dictionary: &'a Dictionary, rng: &mut R) -> Self {
        let secret = dictionary.select_secret(rng).clone();
        Self::with_secret(dictionary, secret)
    }

    /// Start a session with a known secret
    #[must_use]
    pub fn with_secret(dictionary: &'a Dictionary, secret: Word) -> Self {
        info!(words = dictionary.len(), "word game session started");
        debug!(secret = %secret, "secret selected");
        Self {
            dictionary,
            secret,
            ledger: Vec::with_capacity(MAX_GUESSES),
            current: String::with_capacity(WORD_LENGTH),
            letters: LetterStatusMap::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Discard everything and start over with a fresh secret
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(self.dictionary, rng);
    }

    /// Append a letter to the in-progress guess
    ///
    /// Returns `false` (and changes nothing) when the game is over, the guess
    /// is already full, or `letter` is not an ASCII letter.
    pub fn append_letter(&mut self, letter: char) -> bool {
        if self.outcome.is_over()
            || self.current.len() >= WORD_LENGTH
            || !letter.is_ascii_alphabetic()
        {
            return false;
        }
        self.current.push(letter.to_ascii_lowercase());
        true
    }

    /// Remove the last letter of the in-progress guess
    ///
    /// Returns `false` if there was nothing to remove.
    pub fn remove_last_letter(&mut self) -> bool {
        if self.outcome.is_over() {
            return false;
        }
        self.current.pop().is_some()
    }

    /// Submit the in-progress guess
    ///
    /// # Errors
    /// - [`GameError::GameOver`] once the session is won or lost
    /// - [`GameError::IncompleteGuess`] if fewer than 5 letters are entered
    /// - [`GameError::NotInWordList`] if the word is not in the dictionary
    ///
    /// On error the session is unchanged.
    pub fn submit_guess(&mut self) -> Result<Submitted, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver(self.outcome));
        }
        if self.current.len() != WORD_LENGTH {
            return Err(GameError::IncompleteGuess {
                length: self.current.len(),
            });
        }
        if !self.dictionary.contains(&self.current) {
            debug!(guess = %self.current, "guess rejected: not in word list");
            return Err(GameError::NotInWordList(self.current.clone()));
        }
        let guess = Word::new(self.current.as_str())
            .map_err(|_| GameError::NotInWordList(self.current.clone()))?;
        let evaluation = evaluate(guess.text(), self.secret.text())?;

        self.letters.record(&guess, &evaluation);
        self.ledger.push(LedgerEntry { guess, evaluation });
        self.current.clear();

        self.outcome = if evaluation.is_perfect() {
            Outcome::Won
        } else if self.ledger.len() >= MAX_GUESSES {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        let turn = self.ledger.len();
        info!(turn, outcome = %self.outcome, "guess accepted");
        Ok(Submitted {
            evaluation,
            outcome: self.outcome,
            turn,
        })
    }

    /// Dispatch a keyboard event to the matching operation
    ///
    /// Letter and backspace keys never fail; only `Enter` can produce a
    /// submission or an error.
    ///
    /// # Errors
    /// Propagates [`Session::submit_guess`] errors for `Enter`.
    pub fn press(&mut self, key: Key) -> Result<Option<Submitted>, GameError> {
        match key {
            Key::Letter(letter) => {
                self.append_letter(char::from(letter));
                Ok(None)
            }
            Key::Backspace => {
                self.remove_last_letter();
                Ok(None)
            }
            Key::Enter => self.submit_guess().map(Some),
        }
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// In-progress guess, lowercase
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn letters(&self) -> &LetterStatusMap {
        &self.letters
    }

    /// The secret; callers decide when it may be revealed
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        MAX_GUESSES - self.ledger.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&[
            "crane", "trace", "slate", "audio", "speed", "erase", "lolly", "allow", "pilot",
            "music", "ghost",
        ]))
        .unwrap()
    }

    fn type_word(session: &mut Session, word: &str) {
        for ch in word.chars() {
            session.append_letter(ch);
        }
    }

    fn secret(word: &str) -> Word {
        Word::new(word).unwrap()
    }

    #[test]
    fn append_stops_at_word_length() {
        let dict = dictionary();
        let mut session = Session::with_secret(&dict, secret("crane"));
        type_word(&mut session, "slate");
        assert!(!session.append_letter('x'));
        assert_eq!(session.current_guess(), "slate");
    }

    #[test]
    fn append_rejects_non_letters() {
        let dict = dictionary();
        let mut session = Session::with_secret(&dict, secret("crane"));
        assert!(!session.append_letter('3'));
        assert!(session.append_letter('Q'));
        assert_eq!(session.current_guess(), "q");
    }

    #[test]
    fn remove_on_empty_guess_is_noop() {
        let dict = dictionary();
        let mut session = Session::with_secret(&dict, secret("crane"));
        assert!(!session.remove_last_letter());
        session.append_letter('a');
        assert!(session.remove_last_letter());
        assert_eq!(session.current_guess(), "");
    }

    #[test]
    fn incomplete_guess_is_rejected_without_mutation() {
        let dict = dictionary();
        let mut session = Session::with_secret(&dict, secret("crane"));
        type_word(&mut session, "cran");

        assert_eq!(
            session.submit_guess(),
            Err(GameError::IncompleteGuess { length: 4 })
        );
        assert!(session.ledger().is_empty());
        assert_eq!(session.current_guess(), "cran");
        assert!(session.letters().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected_without_mutation() {
        let dict = dictionary();
        let mut session = Session::with_secret(&dict, secret("crane"));
        type_word(&mut session, "zzzzz");

        assert_eq!(
            session.submit_guess(),
            Err(GameError::NotInWordList("zzzzz".to_string()))
        );
        assert!(session.ledger().is_empty());
        assert_eq!(session.current_guess(), "zzzzz");
        assert_eq!(session.outcome(), Outcome::InProgress);
    }

    #[test]
    fn accepted_guess_is_recorded_and_cleared() {
        let dict = dictionary();
        let mut session = Session::with_secret(&dict, secret("crane"));
        type_word(&mut session, "TRACE");

        let submitted = session.submit_guess().unwrap();
        assert_eq!(submitted.turn, 1);
        assert_eq!(submitted.outcome, Outcome::InProgress);
        assert_eq!(
            submitted.evaluation.verdicts(),
            &[
                Verdict::Absent,
                Verdict::Correct,
                Verdict::Correct,
                Verdict::Present,
                Verdict::Correct
            ]
        );
        assert_eq!(session.ledger().len(), 1);
        assert_eq!(session.ledger()[0].guess.text(), "trace");
        assert_eq!(session.current_guess(), "");
        assert_eq!(session.letters().get(b'c'), Some(Verdict::Present));
        assert_eq!(session.guesses_left(), 5);
    }

    #[test]
    fn guessing_the_secret_wins_and_freezes() {
        let dict = dictionary();
        let mut session = Session::with_secret(&dict, secret("crane"));
        type_word(&mut session, "slate");
        session.submit_guess().unwrap();
        type_word(&mut session, "crane");

        let submitted = session.submit_guess().unwrap();
        assert_eq!(submitted.outcome, Outcome::Won);
        assert_eq!(submitted.turn, 2);

        assert!(!session.append_letter('a'));
        assert_eq!(
            session.submit_guess(),
            Err(GameError::GameOver(Outcome::Won))
        );
        assert_eq!(session.ledger().len(), 2);
    }

    #[test]
    fn six_misses_lose_and_freeze() {
        let dict = dictionary();
        let mut session = Session::with_secret(&dict, secret("crane"));
        for word in ["slate", "audio", "speed", "erase", "lolly", "pilot"] {
            assert_eq!(session.outcome(), Outcome::InProgress);
            type_word(&mut session, word);
            session.submit_guess().unwrap();
        }

        assert_eq!(session.outcome(), Outcome::Lost);
        assert_eq!(session.ledger().len(), MAX_GUESSES);
        assert_eq!(
            session.submit_guess(),
            Err(GameError::GameOver(Outcome::Lost))
        );
        assert_eq!(session.ledger().len(), MAX_GUESSES);
    }

    #[test]
    fn winning_on_the_last_guess_is_a_win() {
        let dict = dictionary();
        let mut session = Session::with_secret(&dict, secret("crane"));
        for word in ["slate", "audio", "speed", "erase", "lolly", "crane"] {
            type_word(&mut session, word);
            session.submit_guess().unwrap();
        }
        assert_eq!(session.outcome(), Outcome::Won);
    }

    #[test]
    fn press_routes_keys() {
        let dict = dictionary();
        let mut session = Session::with_secret(&dict, secret("crane"));
        for key in [b'C', b'R', b'A', b'N', b'X'] {
            assert_eq!(session.press(Key::Letter(key)), Ok(None));
        }
        assert_eq!(session.press(Key::Backspace), Ok(None));
        assert_eq!(session.press(Key::Letter(b'E')), Ok(None));

        let submitted = session.press(Key::Enter).unwrap().unwrap();
        assert_eq!(submitted.outcome, Outcome::Won);
    }

    #[test]
    fn restart_resets_everything() {
        let dict = dictionary();
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = Session::new(&dict, &mut rng);
        type_word(&mut session, "slate");
        session.submit_guess().unwrap();
        session.append_letter('a');

        session.restart(&mut rng);
        assert!(session.ledger().is_empty());
        assert!(session.letters().is_empty());
        assert_eq!(session.current_guess(), "");
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert!(dict.contains(session.secret().text()));
    }

    #[test]
    fn independent_sessions_do_not_share_state() {
        let dict = dictionary();
        let mut first = Session::with_secret(&dict, secret("crane"));
        let second = Session::with_secret(&dict, secret("ghost"));
        type_word(&mut first, "crane");
        first.submit_guess().unwrap();

        assert_eq!(first.outcome(), Outcome::Won);
        assert_eq!(second.outcome(), Outcome::InProgress);
        assert!(second.ledger().is_empty());
    }
}
