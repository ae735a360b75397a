//! Interactive TUI: the lab menu and every lab screen

pub mod app;
pub mod layout;
pub mod rendering;

pub use app::{App, Screen, run_tui};
