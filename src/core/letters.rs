//! Best-known status per letter across all evaluations of a session

use super::{Evaluation, Verdict, Word};
use rustc_hash::FxHashMap;

/// Letter → strongest verdict seen so far
///
/// A letter's status only ever moves up the `Absent < Present < Correct`
/// order, so `Correct` is permanent once recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatusMap {
    statuses: FxHashMap<u8, Verdict>,
}

impl LetterStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the map
    pub fn record(&mut self, guess: &Word, evaluation: &Evaluation) {
        for (&letter, &verdict) in guess.chars().iter().zip(evaluation.verdicts()) {
            self.upgrade(letter, verdict);
        }
    }

    fn upgrade(&mut self, letter: u8, verdict: Verdict) {
        let slot = self
            .statuses
            .entry(letter.to_ascii_lowercase())
            .or_insert(verdict);
        if verdict > *slot {
            *slot = verdict;
        }
    }

    /// Status of a letter, case-insensitive; `None` if never guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Verdict> {
        self.statuses.get(&letter.to_ascii_lowercase()).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn clear(&mut self) {
        self.statuses.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(map: &mut LetterStatusMap, guess: &str, secret: &str) {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        map.record(&guess, &Evaluation::calculate(&guess, &secret));
    }

    #[test]
    fn empty_map_knows_nothing() {
        let map = LetterStatusMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get(b'a'), None);
    }

    #[test]
    fn records_each_letter_of_a_guess() {
        let mut map = LetterStatusMap::new();
        record(&mut map, "trace", "crane");

        assert_eq!(map.get(b't'), Some(Verdict::Absent));
        assert_eq!(map.get(b'r'), Some(Verdict::Correct));
        assert_eq!(map.get(b'c'), Some(Verdict::Present));
        assert_eq!(map.get(b'E'), Some(Verdict::Correct));
        assert_eq!(map.len(), 5);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut map = LetterStatusMap::new();
        record(&mut map, "crane", "crane");
        // Every letter of CRANE is now correct; a guess placing them badly
        // must not lower them
        record(&mut map, "nacre", "crane");

        for letter in *b"crane" {
            assert_eq!(map.get(letter), Some(Verdict::Correct));
        }
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut map = LetterStatusMap::new();
        record(&mut map, "react", "crane");
        assert_eq!(map.get(b'c'), Some(Verdict::Present));

        record(&mut map, "crane", "crane");
        assert_eq!(map.get(b'c'), Some(Verdict::Correct));
    }

    #[test]
    fn duplicate_letter_keeps_best_verdict_within_one_guess() {
        // LOLLY vs ALLOW yields L present, L correct, L absent
        let mut map = LetterStatusMap::new();
        record(&mut map, "lolly", "allow");
        assert_eq!(map.get(b'l'), Some(Verdict::Correct));
    }

    #[test]
    fn clear_resets() {
        let mut map = LetterStatusMap::new();
        record(&mut map, "trace", "crane");
        map.clear();
        assert!(map.is_empty());
    }
}
