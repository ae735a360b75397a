//! Tick-driven arcade games and their high scores

pub mod balloon;
pub mod robot;
pub mod scores;
pub mod ticker;

pub use balloon::{BalloonGame, BalloonKind, Mode, Pop};
pub use robot::{Environment, Heading, RobotGame, RobotState};
pub use scores::{HighScores, ScoreError};
pub use ticker::{FixedStep, Simulation, TICK, drive};
