//! Fallout Hacking Solver
//!
//! Narrows down the password of a Fallout terminal from the likeness scores
//! reported for wrong guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use hacking_solver::dictionary::Dictionary;
//! use hacking_solver::solver::Session;
//!
//! let dictionary = Dictionary::embedded();
//!
//! // Guess a word, then record the likeness the terminal reports
//! let session = Session::new().submit("ARCHITECTS 3");
//! for word in session.candidates(&dictionary) {
//!     println!("{word}");
//! }
//! ```

// Core domain types
pub mod core;

// Candidate filtering
pub mod solver;

// Word lists
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
