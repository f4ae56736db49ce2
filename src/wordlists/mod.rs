//! Word list for Jumper
//!
//! Provides the embedded candidate words and a random source that draws from them.

mod embedded;
mod source;

pub use embedded::{CANDIDATES, CANDIDATES_COUNT};
pub use source::{WordSource, words_from_slice};
