//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_evaluation, print_gradient, print_keyboard, print_scores,
    print_statistics,
};
