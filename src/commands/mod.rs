//! Command implementations

pub mod filter;
pub mod simple;

pub use filter::{FilterError, FilterResult, filter_words};
pub use simple::{ReplCommand, run_simple};
