//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_guess_result, print_keyboard, print_round_end, print_score_result, print_statistics,
};
