//! Secret word representation
//!
//! A `SecretWord` stores the word to guess along with its set of distinct
//! letters for fast hit/miss checks.

use super::Letter;
use rustc_hash::FxHashSet;
use std::fmt;

/// The word the player has to uncover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: Vec<Letter>,
    distinct: FxHashSet<Letter>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Secret word must not be empty"),
            Self::InvalidCharacter(ch) => {
                write!(f, "Secret word contains invalid character '{ch}'")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use jumper::core::SecretWord;
    ///
    /// let word = SecretWord::new("Hello").unwrap();
    /// assert_eq!(word.text(), "hello");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("tr33s").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let raw: String = text.into();

        if raw.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = raw
            .chars()
            .map(|ch| Letter::from_char(ch).map_err(|_| WordError::InvalidCharacter(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        let text = letters.iter().map(|letter| letter.as_char()).collect();

        let distinct = letters.iter().copied().collect();

        Ok(Self {
            text,
            letters,
            distinct,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as its ordered letters
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Iterate over the word's characters in order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().map(|letter| letter.as_char())
    }

    /// Number of letter positions in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.distinct.contains(&letter)
    }

    /// The set of distinct letters that must be guessed to win
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> &FxHashSet<Letter> {
        &self.distinct
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
