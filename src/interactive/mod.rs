//! Interactive TUI: watch the solver play one turn at a time

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
