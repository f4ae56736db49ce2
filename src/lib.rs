//! Jumper
//!
//! A terminal word-guessing game: uncover the secret word one letter at a
//! time before every line of the parachute has been cut.
//!
//! # Quick Start
//!
//! ```rust
//! use jumper::core::SecretWord;
//! use jumper::engine::{Director, GameState};
//! use jumper::wordlists::WordSource;
//!
//! let word = SecretWord::new("hello").unwrap();
//! let mut director = Director::with_word(WordSource::seeded(42), word);
//!
//! for guess in ["h", "e", "l", "o"] {
//!     director.submit_guess(guess).unwrap();
//! }
//! assert_eq!(director.state(), GameState::Won);
//! assert_eq!(director.session().word_line(), "h e l l o");
//! ```

// Core domain types
pub mod core;

// Session and director state machine
pub mod engine;

// Candidate words
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
