//! Property-based invariant tests for guess evaluation and game sessions.
//!
//! Evaluation:
//! 1. A guess equal to the secret is all-correct.
//! 2. A guess sharing no letters with the secret is all-absent.
//! 3. Correct verdicts sit exactly where the letters match.
//! 4. No letter is credited more often than it occurs in the secret.
//! 5. Evaluation is deterministic and case-insensitive.
//! 6. Wrong lengths are rejected, never panic.
//!
//! Sessions (driven mostly by dictionary words, so games get won and lost):
//! 7. Ledger never exceeds six entries and the in-progress guess never
//!    exceeds five letters.
//! 8. A finished session is frozen.
//! 9. Rejected submissions leave the ledger untouched.
//! 10. Letter statuses never get weaker.
//! 11. Restart resets everything.

use interactive_lab::core::{Verdict, Word, evaluate};
use interactive_lab::game::{GameError, MAX_GUESSES, Outcome, Session, Submitted};
use interactive_lab::keyboard::Key;
use interactive_lab::wordlists::Dictionary;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ── Helpers ─────────────────────────────────────────────────────────────

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{5}"
}

fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(word_strategy(), 1..24)
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        6 => (b'A'..=b'Z').prop_map(Key::Letter),
        1 => Just(Key::Backspace),
        2 => Just(Key::Enter),
    ]
}

fn dictionary(words: &[String]) -> Dictionary {
    let words = words
        .iter()
        .map(|w| Word::new(w.as_str()).unwrap())
        .collect();
    Dictionary::new(words).unwrap()
}

fn occurrences(word: &str, letter: u8) -> usize {
    word.bytes().filter(|&b| b == letter).count()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Identical words are all-correct
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn identical_words_are_perfect(word in word_strategy()) {
        let evaluation = evaluate(&word, &word).unwrap();
        prop_assert!(evaluation.is_perfect(), "{} against itself: {:?}", word, evaluation);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Disjoint letters are all-absent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn disjoint_words_are_all_absent(guess in "[a-m]{5}", secret in "[n-z]{5}") {
        let evaluation = evaluate(&guess, &secret).unwrap();
        prop_assert_eq!(evaluation.count(Verdict::Absent), 5);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Correct exactly at matching positions
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn correct_iff_letters_match(guess in word_strategy(), secret in word_strategy()) {
        let evaluation = evaluate(&guess, &secret).unwrap();
        for (i, (g, s)) in guess.bytes().zip(secret.bytes()).enumerate() {
            prop_assert_eq!(
                evaluation.verdicts()[i] == Verdict::Correct,
                g == s,
                "position {} of {} vs {}",
                i, guess, secret
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Per-letter credit is bounded by the secret
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn credit_never_exceeds_occurrences(guess in "[a-e]{5}", secret in "[a-e]{5}") {
        let evaluation = evaluate(&guess, &secret).unwrap();
        for letter in b'a'..=b'e' {
            let credited = guess
                .bytes()
                .zip(evaluation.verdicts())
                .filter(|&(g, &v)| g == letter && v != Verdict::Absent)
                .count();
            let expected = occurrences(&guess, letter).min(occurrences(&secret, letter));
            prop_assert_eq!(
                credited, expected,
                "letter {} in {} vs {}",
                char::from(letter), guess, secret
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Deterministic and case-insensitive
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn evaluation_is_pure(guess in word_strategy(), secret in word_strategy()) {
        let first = evaluate(&guess, &secret).unwrap();
        let second = evaluate(&guess, &secret).unwrap();
        prop_assert_eq!(first, second);

        let shouted = evaluate(&guess.to_uppercase(), &secret.to_uppercase()).unwrap();
        prop_assert_eq!(first, shouted);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Wrong lengths are rejected
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn wrong_lengths_are_errors(guess in "[a-z]{0,9}", secret in word_strategy()) {
        let result = evaluate(&guess, &secret);
        prop_assert_eq!(result.is_ok(), guess.len() == 5);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7-10. Session invariants under mixed word and key input
// ═════════════════════════════════════════════════════════════════════════

/// One step of player input
#[derive(Debug, Clone)]
enum Action {
    /// Clear the row, type a dictionary word and press Enter
    Word(prop::sample::Index),
    /// A single raw key
    Key(Key),
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => any::<prop::sample::Index>().prop_map(Action::Word),
        1 => key_strategy().prop_map(Action::Key),
    ]
}

type Pressed = Result<Option<Submitted>, GameError>;

/// Press one key and check every per-keystroke invariant
fn press_checked(session: &mut Session, key: Key) -> Result<Pressed, TestCaseError> {
    let ledger_before = session.ledger().to_vec();
    let guess_before = session.current_guess().to_string();
    let letters_before: Vec<(u8, Option<Verdict>)> =
        (b'a'..=b'z').map(|l| (l, session.letters().get(l))).collect();
    let was_over = session.outcome().is_over();

    let result = session.press(key);

    // 7. Bounds
    prop_assert!(session.ledger().len() <= MAX_GUESSES);
    prop_assert!(session.current_guess().len() <= 5);

    // 8. Frozen once finished
    if was_over {
        prop_assert_eq!(session.ledger(), ledger_before.as_slice());
        prop_assert_eq!(session.current_guess(), guess_before.as_str());
        if key == Key::Enter {
            prop_assert!(matches!(result, Err(GameError::GameOver(_))));
        }
    }

    // 9. Rejections change nothing
    if result.is_err() {
        prop_assert_eq!(session.ledger(), ledger_before.as_slice());
        prop_assert_eq!(session.current_guess(), guess_before.as_str());
    }

    // 10. Monotone letter statuses
    for (letter, before) in letters_before {
        prop_assert!(
            session.letters().get(letter) >= before,
            "letter {} weakened from {:?}",
            char::from(letter), before
        );
    }

    // Outcome agrees with the ledger
    let won = session.ledger().last().is_some_and(|e| e.evaluation.is_perfect());
    let expected = if won {
        Outcome::Won
    } else if session.ledger().len() == MAX_GUESSES {
        Outcome::Lost
    } else {
        Outcome::InProgress
    };
    prop_assert_eq!(session.outcome(), expected);

    Ok(result)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn session_invariants_hold(
        words in proptest::collection::vec(word_strategy(), 1..8),
        secret in any::<prop::sample::Index>(),
        actions in proptest::collection::vec(action_strategy(), 0..40),
    ) {
        let dict = dictionary(&words);
        let secret = Word::new(secret.get(&words).as_str()).unwrap();
        let mut session = Session::with_secret(&dict, secret);

        for action in actions {
            match action {
                Action::Key(key) => {
                    press_checked(&mut session, key)?;
                }
                Action::Word(index) => {
                    let word = index.get(&words);
                    let was_over = session.outcome().is_over();
                    let turns_before = session.ledger().len();

                    for _ in 0..5 {
                        press_checked(&mut session, Key::Backspace)?;
                    }
                    for letter in word.bytes() {
                        press_checked(&mut session, Key::Letter(letter.to_ascii_uppercase()))?;
                    }
                    let result = press_checked(&mut session, Key::Enter)?;

                    // A dictionary word typed into a live game is always accepted
                    if !was_over {
                        prop_assert!(matches!(result, Ok(Some(_))), "{} rejected: {:?}", word, result);
                        prop_assert_eq!(session.ledger().len(), turns_before + 1);
                        prop_assert_eq!(session.ledger()[turns_before].guess.text(), word.as_str());
                        for letter in word.bytes() {
                            prop_assert!(session.letters().get(letter).is_some());
                        }
                    }
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 11. Restart resets everything
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn restart_resets_session(words in dictionary_strategy(), seed in any::<u64>()) {
        let dict = dictionary(&words);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new(&dict, &mut rng);

        let guess = words[words.len() - 1].clone();
        for ch in guess.chars() {
            session.append_letter(ch);
        }
        session.submit_guess().unwrap();
        session.append_letter('q');

        session.restart(&mut rng);
        prop_assert!(session.ledger().is_empty());
        prop_assert!(session.letters().is_empty());
        prop_assert_eq!(session.current_guess(), "");
        prop_assert_eq!(session.outcome(), Outcome::InProgress);
        prop_assert!(dict.contains(session.secret().text()));
    }
}
