//! Candidate filtering and session handling
//!
//! This module narrows the dictionary down using recorded guesses.

mod filter;
mod session;
mod suggest;

pub use filter::filter_candidates;
pub use session::Session;
pub use suggest::{autocomplete, suggestions};
