//! Interactive Lab
//!
//! A word-guessing game engine plus a handful of small arcade games and toys,
//! playable in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use interactive_lab::core::{Verdict, evaluate};
//!
//! let evaluation = evaluate("trace", "crane").unwrap();
//! assert_eq!(evaluation.to_emoji(), "⬜🟩🟩🟨🟩");
//! assert_eq!(evaluation.count(Verdict::Correct), 3);
//! ```

// Core domain types: words, verdicts, letter statuses
pub mod core;

// Word lists and the dictionary
pub mod wordlists;

// Word game session, errors and statistics
pub mod game;

// On-screen keyboard layout
pub mod keyboard;

// Tick-driven arcade games and high scores
pub mod arcade;

// Gradient generator and dot canvas
pub mod toys;

// Runtime configuration and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
