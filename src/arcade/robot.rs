//! Runaway Robot
//!
//! Steer a robot around an 800×600 field, collect coins and stay clear of
//! ghosts that replay the robot's own path.

use super::ticker::Simulation;
use rand::Rng;
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, info};

pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;
pub const ROBOT_RADIUS: f64 = 20.0;
pub const COIN_RADIUS: f64 = 10.0;

const BASE_SPEED: f64 = 5.0;
const BOOSTED_SPEED: f64 = 8.0;
const COIN_SPAWN_CHANCE: f64 = 0.02;
const MAX_COINS: usize = 5;
const COIN_POINTS: u64 = 10;
const TICKS_PER_SECOND: u64 = 60;
const GHOST_INTERVAL_TICKS: u64 = 5 * TICKS_PER_SECOND;
const GHOST_DELAY_TICKS: usize = 90;
/// Ticks after spawning before a ghost can collide
const GHOST_GRACE_TICKS: u64 = 30;
const MAX_GHOSTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const START: Self = Self { x: 400.0, y: 300.0 };

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(ROBOT_RADIUS, FIELD_WIDTH - ROBOT_RADIUS),
            y: self.y.clamp(ROBOT_RADIUS, FIELD_HEIGHT - ROBOT_RADIUS),
        }
    }
}

/// Direction inputs currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Heading {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Heading {
    /// Unit velocity per axis, each in {-1, 0, 1}
    #[must_use]
    pub fn velocity(self) -> (i8, i8) {
        let axis = |neg: bool, pos: bool| i8::from(pos) - i8::from(neg);
        (axis(self.left, self.right), axis(self.up, self.down))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Upgrades {
    pub shield: bool,
    pub speed_boost: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Jungle,
    Neon,
    Space,
}

impl Environment {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Jungle => Self::Neon,
            Self::Neon => Self::Space,
            Self::Space => Self::Jungle,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jungle => write!(f, "jungle"),
            Self::Neon => write!(f, "neon"),
            Self::Space => write!(f, "space"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotState {
    Menu,
    Playing,
    Paused,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ghost {
    pub position: Position,
    /// How many ticks behind the robot this ghost replays
    pub delay: usize,
    spawned_at: u64,
}

#[derive(Debug, Clone)]
pub struct RobotGame {
    state: RobotState,
    position: Position,
    heading: Heading,
    upgrades: Upgrades,
    coins: Vec<Position>,
    ghosts: Vec<Ghost>,
    trail: VecDeque<Position>,
    score: u64,
    coins_collected: u32,
    environment: Environment,
    ticks: u64,
}

impl Default for RobotGame {
    fn default() -> Self {
        Self::new()
    }
}

impl RobotGame {
    /// A game sitting at the menu
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RobotState::Menu,
            position: Position::START,
            heading: Heading::default(),
            upgrades: Upgrades::default(),
            coins: Vec::new(),
            ghosts: Vec::new(),
            trail: VecDeque::new(),
            score: 0,
            coins_collected: 0,
            environment: Environment::Jungle,
            ticks: 0,
        }
    }

    /// Reset everything except the environment and start playing
    pub fn start(&mut self) {
        let environment = self.environment;
        *self = Self {
            environment,
            state: RobotState::Playing,
            ..Self::new()
        };
        info!(%environment, "runaway robot started");
    }

    pub fn pause(&mut self) {
        if self.state == RobotState::Playing {
            self.state = RobotState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == RobotState::Paused {
            self.state = RobotState::Playing;
        }
    }

    /// Leave to the menu, discarding the current run
    pub fn quit_to_menu(&mut self) {
        self.state = RobotState::Menu;
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    pub fn cycle_environment(&mut self) {
        self.environment = self.environment.next();
    }

    /// Place a coin directly
    pub fn place_coin(&mut self, position: Position) {
        self.coins.push(position);
    }

    fn speed(&self) -> f64 {
        if self.upgrades.speed_boost {
            BOOSTED_SPEED
        } else {
            BASE_SPEED
        }
    }

    fn step_robot(&mut self) {
        let (dx, dy) = self.heading.velocity();
        let speed = self.speed();
        self.position = Position {
            x: self.position.x + f64::from(dx) * speed,
            y: self.position.y + f64::from(dy) * speed,
        }
        .clamped();

        self.trail.push_back(self.position);
        while self.trail.len() > MAX_GHOSTS * GHOST_DELAY_TICKS + 1 {
            self.trail.pop_front();
        }
    }

    fn collect_coins(&mut self) {
        let robot = self.position;
        let before = self.coins.len();
        self.coins
            .retain(|&coin| coin.distance(robot) >= ROBOT_RADIUS + COIN_RADIUS);

        for _ in self.coins.len()..before {
            self.coins_collected += 1;
            self.score += COIN_POINTS;
            if self.coins_collected % 5 == 0 {
                self.upgrades.speed_boost = true;
            }
            if self.coins_collected % 10 == 0 {
                self.upgrades.shield = true;
            }
            debug!(coins = self.coins_collected, "coin collected");
        }
    }

    fn spawn_coin<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.coins.len() < MAX_COINS && rng.random_bool(COIN_SPAWN_CHANCE) {
            self.coins.push(Position {
                x: rng.random_range(COIN_RADIUS..FIELD_WIDTH - COIN_RADIUS),
                y: rng.random_range(COIN_RADIUS..FIELD_HEIGHT - COIN_RADIUS),
            });
        }
    }

    fn trail_position(&self, delay: usize) -> Position {
        let newest = self.trail.len().saturating_sub(1);
        self.trail
            .get(newest.saturating_sub(delay))
            .copied()
            .unwrap_or(Position::START)
    }

    fn move_ghosts(&mut self) {
        if self.ticks % GHOST_INTERVAL_TICKS == 0 && self.ghosts.len() < MAX_GHOSTS {
            let delay = GHOST_DELAY_TICKS * (self.ghosts.len() + 1);
            self.ghosts.push(Ghost {
                position: self.trail_position(delay),
                delay,
                spawned_at: self.ticks,
            });
            debug!(ghosts = self.ghosts.len(), "ghost spawned");
        }
        let positions: Vec<Position> = self
            .ghosts
            .iter()
            .map(|ghost| self.trail_position(ghost.delay))
            .collect();
        for (ghost, position) in self.ghosts.iter_mut().zip(positions) {
            ghost.position = position;
        }
    }

    fn check_collisions(&mut self) {
        let robot = self.position;
        let ticks = self.ticks;
        let hit = self.ghosts.iter().position(|ghost| {
            ticks - ghost.spawned_at >= GHOST_GRACE_TICKS
                && ghost.position.distance(robot) < 2.0 * ROBOT_RADIUS
        });

        if let Some(index) = hit {
            if self.upgrades.shield {
                self.upgrades.shield = false;
                self.ghosts.remove(index);
                debug!("shield absorbed a ghost");
            } else {
                self.state = RobotState::GameOver;
                info!(score = self.score, coins = self.coins_collected, "runaway robot over");
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> RobotState {
        self.state
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    #[must_use]
    pub fn upgrades(&self) -> Upgrades {
        self.upgrades
    }

    #[must_use]
    pub fn coins(&self) -> &[Position] {
        &self.coins
    }

    #[must_use]
    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn coins_collected(&self) -> u32 {
        self.coins_collected
    }

    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }
}

impl Simulation for RobotGame {
    fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.state != RobotState::Playing {
            return;
        }
        self.ticks += 1;
        self.step_robot();
        self.collect_coins();
        self.spawn_coin(rng);
        self.move_ghosts();
        self.check_collisions();
        if self.ticks % TICKS_PER_SECOND == 0 && self.state == RobotState::Playing {
            self.score += 1;
        }
    }

    fn is_running(&self) -> bool {
        self.state == RobotState::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn playing() -> RobotGame {
        let mut game = RobotGame::new();
        game.start();
        game
    }

    fn run(game: &mut RobotGame, ticks: u64) {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..ticks {
            game.tick(&mut rng);
        }
    }

    fn right() -> Heading {
        Heading {
            right: true,
            ..Heading::default()
        }
    }

    #[test]
    fn heading_maps_to_unit_velocity() {
        assert_eq!(Heading::default().velocity(), (0, 0));
        assert_eq!(right().velocity(), (1, 0));
        let both = Heading {
            left: true,
            right: true,
            up: true,
            down: false,
        };
        assert_eq!(both.velocity(), (0, -1));
    }

    #[test]
    fn robot_moves_at_base_speed() {
        let mut game = playing();
        game.set_heading(right());
        run(&mut game, 3);
        assert!((game.position().x - 415.0).abs() < f64::EPSILON);
        assert!((game.position().y - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn robot_is_clamped_to_the_field() {
        let mut game = playing();
        game.set_heading(Heading {
            up: true,
            left: true,
            ..Heading::default()
        });
        run(&mut game, 200);
        assert_eq!(game.position(), Position { x: 20.0, y: 20.0 });
    }

    #[test]
    fn menu_and_paused_games_do_not_move() {
        let mut game = RobotGame::new();
        game.set_heading(right());
        run(&mut game, 10);
        assert_eq!(game.position(), Position::START);

        game.start();
        game.set_heading(right());
        game.pause();
        run(&mut game, 10);
        assert_eq!(game.position(), Position::START);
        game.resume();
        assert!(game.is_running());
    }

    #[test]
    fn coins_are_collected_on_contact() {
        let mut game = playing();
        game.place_coin(Position { x: 425.0, y: 300.0 });
        game.place_coin(Position { x: 700.0, y: 100.0 });
        run(&mut game, 1);

        assert_eq!(game.coins_collected(), 1);
        assert_eq!(game.score(), COIN_POINTS);
        assert!(game.coins().contains(&Position { x: 700.0, y: 100.0 }));
        assert!(!game.coins().contains(&Position { x: 425.0, y: 300.0 }));
    }

    #[test]
    fn coin_milestones_grant_upgrades() {
        let mut game = playing();
        for _ in 0..5 {
            game.place_coin(Position::START);
        }
        run(&mut game, 1);
        assert!(game.upgrades().speed_boost);
        assert!(!game.upgrades().shield);

        for _ in 0..5 {
            game.place_coin(game.position());
        }
        run(&mut game, 1);
        assert!(game.upgrades().shield);
        assert_eq!(game.coins_collected(), 10);
    }

    #[test]
    fn standing_still_gets_caught_by_a_ghost() {
        let mut game = playing();
        run(&mut game, GHOST_INTERVAL_TICKS + GHOST_GRACE_TICKS + 1);
        assert_eq!(game.state(), RobotState::GameOver);
        assert_eq!(game.ghosts().len(), 1);
    }

    #[test]
    fn shield_absorbs_one_ghost() {
        let mut game = playing();
        for _ in 0..10 {
            game.place_coin(Position::START);
        }
        run(&mut game, GHOST_INTERVAL_TICKS + GHOST_GRACE_TICKS + 1);
        assert_eq!(game.state(), RobotState::Playing);
        assert!(!game.upgrades().shield);
        assert!(game.ghosts().is_empty());
    }

    #[test]
    fn survival_scores_a_point_per_second() {
        let mut game = playing();
        run(&mut game, 2 * TICKS_PER_SECOND);
        assert_eq!(game.score(), 2);
    }

    #[test]
    fn restart_keeps_environment() {
        let mut game = playing();
        game.cycle_environment();
        game.set_heading(right());
        run(&mut game, 5);
        game.start();
        assert_eq!(game.environment(), Environment::Neon);
        assert_eq!(game.position(), Position::START);
        assert_eq!(game.heading(), Heading::default());
    }

    #[test]
    fn environments_cycle() {
        let env = Environment::Jungle;
        assert_eq!(env.next().next().next(), env);
    }
}
