//! Terminal output formatting
//!
//! Display utilities for the line-based game.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_error, print_farewell, print_loss, print_outcome, print_welcome, print_win,
};
