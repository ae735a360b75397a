//! Small non-game toys from the lab

pub mod counter;
pub mod dots;
pub mod gradient;

pub use counter::Counter;
pub use dots::DotCanvas;
pub use gradient::{Gradient, Rgb};
