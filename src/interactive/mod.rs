//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Theme, run_tui};
