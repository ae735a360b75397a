//! The word game: session controller, errors and statistics

mod error;
mod session;
mod stats;

pub use error::GameError;
pub use session::{LedgerEntry, MAX_GUESSES, Outcome, Session, Submitted};
pub use stats::Statistics;

/// Celebration line for a win in `turn` guesses
#[must_use]
pub fn celebration(turn: usize) -> &'static str {
    match turn {
        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
        3 => "✨ SPLENDID! Three guesses! ✨",
        4 => "👏 GREAT JOB! Four guesses! 👏",
        5 => "🎉 NICE WORK! Five guesses! 🎉",
        6 => "😅 PHEW! Got it in six! 😅",
        _ => "🎊 SOLVED! 🎊",
    }
}
