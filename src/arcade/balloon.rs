//! Balloon Frenzy
//!
//! Balloons rise from the bottom of an 800×600 field. Popping scores by kind;
//! clicking empty space breaks the combo. Timed mode ends after 60 seconds.

use super::ticker::{Simulation, TICK};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info};

pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;

/// Chance per tick that a new balloon appears
pub const SPAWN_CHANCE: f64 = 0.05;

/// Length of a timed round in seconds
pub const TIMED_ROUND_SECS: u32 = 60;

/// Half-width of the square a bomb clears
pub const BLAST_RADIUS: f64 = 100.0;

const STANDARD_SIZE: f64 = 50.0;
const GOLDEN_SIZE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalloonKind {
    Standard,
    Golden,
    Black,
    Timer,
    Bomb,
}

/// Spawn table: standard balloons are three times as common as each special
const KIND_TABLE: [BalloonKind; 7] = [
    BalloonKind::Standard,
    BalloonKind::Standard,
    BalloonKind::Standard,
    BalloonKind::Golden,
    BalloonKind::Black,
    BalloonKind::Timer,
    BalloonKind::Bomb,
];

impl BalloonKind {
    #[must_use]
    pub const fn size(self) -> f64 {
        match self {
            Self::Golden => GOLDEN_SIZE,
            _ => STANDARD_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Balloon {
    pub id: u64,
    /// Left edge
    pub x: f64,
    /// Top edge; grows downward
    pub y: f64,
    pub speed: f64,
    pub kind: BalloonKind,
    pub size: f64,
}

impl Balloon {
    /// Hit test against the balloon's bounding square
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.x..=self.x + self.size).contains(&x) && (self.y..=self.y + self.size).contains(&y)
    }

    fn in_blast_of(&self, bomb: &Self) -> bool {
        (self.x - bomb.x).abs() < BLAST_RADIUS && (self.y - bomb.y).abs() < BLAST_RADIUS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Classic,
    Timed,
}

/// What a pop did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pop {
    pub kind: BalloonKind,
    pub points: i64,
    /// Balloons removed, including the popped one
    pub destroyed: usize,
}

impl Pop {
    /// Short notification for the pop
    #[must_use]
    pub fn message(&self) -> String {
        match self.kind {
            BalloonKind::Standard => "+1".to_string(),
            BalloonKind::Golden => "Bonus! +5 points!".to_string(),
            BalloonKind::Black => "Oops! -3 points!".to_string(),
            BalloonKind::Timer => "Time Slow! Balloons slowed down!".to_string(),
            BalloonKind::Bomb => format!("Boom! Chain reaction! +{} points!", self.points),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BalloonGame {
    mode: Mode,
    balloons: Vec<Balloon>,
    score: i64,
    combo: u32,
    time_left: u32,
    since_second: Duration,
    running: bool,
    next_id: u64,
}

impl BalloonGame {
    /// Start a fresh round
    #[must_use]
    pub fn start(mode: Mode) -> Self {
        info!(?mode, "balloon frenzy started");
        Self {
            mode,
            balloons: Vec::new(),
            score: 0,
            combo: 0,
            time_left: TIMED_ROUND_SECS,
            since_second: Duration::ZERO,
            running: true,
            next_id: 0,
        }
    }

    /// Release a balloon at a random position along the bottom edge
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u64 {
        let kind = KIND_TABLE[rng.random_range(0..KIND_TABLE.len())];
        let x = rng.random_range(0.0..FIELD_WIDTH - STANDARD_SIZE);
        let speed = 2.0 + rng.random_range(0.0..2.0);
        self.spawn_at(kind, x, FIELD_HEIGHT, speed)
    }

    /// Release a balloon at an exact position
    pub fn spawn_at(&mut self, kind: BalloonKind, x: f64, y: f64, speed: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.balloons.push(Balloon {
            id,
            x,
            y,
            speed,
            kind,
            size: kind.size(),
        });
        id
    }

    /// Pop a balloon by id; `None` if it is gone or the round is over
    pub fn pop(&mut self, id: u64) -> Option<Pop> {
        if !self.running {
            return None;
        }
        let index = self.balloons.iter().position(|b| b.id == id)?;
        let balloon = self.balloons.remove(index);

        let (points, destroyed) = match balloon.kind {
            BalloonKind::Standard => (1, 1),
            BalloonKind::Golden => (5, 1),
            BalloonKind::Black => (-3, 1),
            BalloonKind::Timer => {
                for other in &mut self.balloons {
                    other.speed *= 0.5;
                }
                (0, 1)
            }
            BalloonKind::Bomb => {
                let before = self.balloons.len();
                self.balloons.retain(|b| !b.in_blast_of(&balloon));
                let destroyed = before - self.balloons.len() + 1;
                (destroyed as i64, destroyed)
            }
        };

        self.score += points;
        self.combo += 1;
        debug!(kind = ?balloon.kind, points, combo = self.combo, "balloon popped");
        Some(Pop {
            kind: balloon.kind,
            points,
            destroyed,
        })
    }

    /// Click at a field position: pops the topmost balloon under it, or
    /// breaks the combo on a miss
    pub fn click(&mut self, x: f64, y: f64) -> Option<Pop> {
        if !self.running {
            return None;
        }
        let hit = self
            .balloons
            .iter()
            .rev()
            .find(|b| b.contains(x, y))
            .map(|b| b.id);
        match hit {
            Some(id) => self.pop(id),
            None => {
                self.combo = 0;
                None
            }
        }
    }

    /// End the round early
    pub fn end(&mut self) {
        if self.running {
            self.running = false;
            info!(score = self.score, "balloon frenzy ended");
        }
    }

    fn advance_clock(&mut self) {
        if self.mode != Mode::Timed {
            return;
        }
        self.since_second += TICK;
        while self.since_second >= Duration::from_secs(1) && self.running {
            self.since_second -= Duration::from_secs(1);
            self.time_left = self.time_left.saturating_sub(1);
            if self.time_left == 0 {
                self.end();
            }
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn balloons(&self) -> &[Balloon] {
        &self.balloons
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// Seconds left in a timed round
    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }
}

impl Simulation for BalloonGame {
    fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.running {
            return;
        }
        for balloon in &mut self.balloons {
            balloon.y -= balloon.speed;
        }
        self.balloons.retain(|b| b.y + b.size > 0.0);

        if rng.random_bool(SPAWN_CHANCE) {
            self.spawn(rng);
        }
        self.advance_clock();
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
