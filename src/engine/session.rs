//! A single play-through: one secret word, its guesses and its parachute

use crate::core::{GuessTracker, Letter, Parachute, SecretWord};

/// Placeholder shown for letters that have not been guessed yet
pub const PLACEHOLDER: char = '_';

/// Result of applying one guess to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter appears in the secret word
    Hit,
    /// The letter is not in the word; one canopy line was cut
    Miss,
    /// The letter was already guessed; nothing changed
    Repeated,
}

/// Secret word, guess history and miss counter for one game
#[derive(Debug, Clone)]
pub struct Session {
    word: SecretWord,
    guesses: GuessTracker,
    parachute: Parachute,
}

impl Session {
    #[must_use]
    pub const fn new(word: SecretWord) -> Self {
        Self {
            word,
            guesses: GuessTracker::new(),
            parachute: Parachute::new(),
        }
    }

    /// Apply a guess, cutting a canopy line on a miss
    ///
    /// Guesses after the session is decided are ignored and reported as
    /// `Repeated` so the miss count can never exceed the maximum.
    pub fn apply(&mut self, letter: Letter) -> GuessOutcome {
        if self.is_over() || !self.guesses.submit(letter) {
            return GuessOutcome::Repeated;
        }

        if self.word.contains(letter) {
            GuessOutcome::Hit
        } else {
            self.parachute.register_miss();
            GuessOutcome::Miss
        }
    }

    /// True when every letter of the word has been guessed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.word
            .distinct_letters()
            .iter()
            .all(|&letter| self.guesses.contains(letter))
    }

    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.parachute.is_cut_away()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Start over with a new word, clearing guesses and misses
    pub fn reset(&mut self, word: SecretWord) {
        self.word = word;
        self.guesses.reset();
        self.parachute.reset();
    }

    /// The word with unguessed positions blanked, e.g. `"h _ l l _"`
    #[must_use]
    pub fn word_line(&self) -> String {
        let mut line = String::with_capacity(self.word.len() * 2);
        for (i, letter) in self.word.letters().iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            if self.guesses.contains(*letter) {
                line.push(letter.as_char());
            } else {
                line.push(PLACEHOLDER);
            }
        }
        line
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &SecretWord {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &GuessTracker {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn parachute(&self) -> &Parachute {
        &self.parachute
    }

    /// Guessed letters that are not in the word, in guess order
    #[must_use]
    pub fn wrong_letters(&self) -> Vec<Letter> {
        self.guesses
            .guesses()
            .iter()
            .copied()
            .filter(|&letter| !self.word.contains(letter))
            .collect()
    }
}
