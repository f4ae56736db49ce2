//! Single-letter guesses
//!
//! Raw user input is normalized here before it reaches the game state.

use std::fmt;

/// A single lowercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for input that is not a single letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    Empty,
    TooLong(usize),
    NotALetter(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter a letter"),
            Self::TooLong(len) => {
                write!(f, "Guess must be exactly one letter, got {len} characters")
            }
            Self::NotALetter(ch) => write!(f, "'{ch}' is not a letter from a to z"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Parse a guess from raw input
    ///
    /// Surrounding whitespace is ignored and uppercase letters are folded to
    /// lowercase.
    ///
    /// # Errors
    /// Returns `LetterError` if the trimmed input is empty, longer than one
    /// character, or not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use jumper::core::Letter;
    ///
    /// let letter = Letter::parse(" E\n").unwrap();
    /// assert_eq!(letter.as_char(), 'e');
    ///
    /// assert!(Letter::parse("ab").is_err());
    /// assert!(Letter::parse("7").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();

        let Some(ch) = chars.next() else {
            return Err(LetterError::Empty);
        };

        if chars.next().is_some() {
            return Err(LetterError::TooLong(trimmed.chars().count()));
        }

        Self::from_char(ch)
    }

    /// Build a letter from a single character
    ///
    /// # Errors
    /// Returns `LetterError::NotALetter` for anything outside `a-z`/`A-Z`.
    pub fn from_char(ch: char) -> Result<Self, LetterError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_lowercase() as u8))
        } else {
            Err(LetterError::NotALetter(ch))
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
