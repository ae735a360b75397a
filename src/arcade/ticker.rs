//! Fixed-step game loop driver
//!
//! Wall-clock time is folded into whole ticks of a fixed interval. Each tick
//! runs to completion before the next one starts.

use rand::Rng;
use std::time::Duration;

/// Interval between simulation ticks (~60 per second)
pub const TICK: Duration = Duration::from_millis(16);

/// Upper bound on ticks replayed after a stall
pub const MAX_CATCH_UP: u32 = 8;

/// A game state advanced one tick at a time
pub trait Simulation {
    /// Advance the state by exactly one tick
    fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R);

    /// Whether ticks currently have any effect
    fn is_running(&self) -> bool;
}

/// Accumulates elapsed time and hands out whole ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval: Duration,
    accumulated: Duration,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(TICK)
    }
}

impl FixedStep {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Add elapsed time and return how many ticks are due
    ///
    /// At most [`MAX_CATCH_UP`] ticks are returned; any backlog beyond that
    /// is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.interval && due < MAX_CATCH_UP {
            self.accumulated -= self.interval;
            due += 1;
        }
        if due == MAX_CATCH_UP && self.accumulated >= self.interval {
            tracing::debug!(backlog = ?self.accumulated, "dropping tick backlog");
            self.accumulated = Duration::ZERO;
        }
        due
    }

    /// Time left until the next tick is due
    #[must_use]
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

/// Run `ticks` ticks of a simulation, stopping early if it ends
pub fn drive<S: Simulation, R: Rng + ?Sized>(simulation: &mut S, ticks: u32, rng: &mut R) {
    for _ in 0..ticks {
        if !simulation.is_running() {
            break;
        }
        simulation.tick(rng);
    }
}
