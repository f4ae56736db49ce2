//! Core domain types for Jumper
//!
//! This module contains the fundamental game values: letters, the secret word,
//! the guess history and the parachute miss counter. Nothing here performs I/O.

mod guesses;
mod letter;
mod parachute;
mod word;

pub use guesses::GuessTracker;
pub use letter::{Letter, LetterError};
pub use parachute::{MAX_MISSES, Parachute};
pub use word::{SecretWord, WordError};
