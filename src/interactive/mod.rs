//! Interactive TUI mode
//!
//! Full-screen rendition of the game built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
