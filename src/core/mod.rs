//! Core domain types for terminal hacking
//!
//! Words, guesses and the likeness score. Everything here is pure: no I/O,
//! no shared state.

mod guess;
mod likeness;
mod word;

pub use guess::{Guess, GuessError};
pub use likeness::likeness;
pub use word::{Word, WordError};
