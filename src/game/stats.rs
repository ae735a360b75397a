//! Running statistics across word game sessions

use super::{MAX_GUESSES, Outcome};

/// Games played, won and the guess distribution of wins
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index n counts wins in n guesses (index 0 unused)
    pub guess_distribution: [usize; MAX_GUESSES + 1],
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    /// Record a finished game; in-progress outcomes are ignored
    pub fn record(&mut self, outcome: Outcome, guesses: usize) {
        match outcome {
            Outcome::InProgress => return,
            Outcome::Won => {
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(guesses) {
                    *slot += 1;
                }
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            Outcome::Lost => self.current_streak = 0,
        }
        self.total_games += 1;
    }

    /// Win rate in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats() {
        let stats = Statistics::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn records_wins_losses_and_streaks() {
        let mut stats = Statistics::default();
        stats.record(Outcome::Won, 3);
        stats.record(Outcome::Won, 4);
        stats.record(Outcome::Lost, 6);
        stats.record(Outcome::Won, 3);
        stats.record(Outcome::InProgress, 2);

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[4], 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }
}
