//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_candidates, print_guess_error, print_guesses, print_likeness, print_suggestions,
};
