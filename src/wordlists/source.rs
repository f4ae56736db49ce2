//! Random secret word selection

use super::CANDIDATES;
use crate::core::SecretWord;
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Draws secret words uniformly from the embedded candidate list
pub struct WordSource {
    words: Vec<SecretWord>,
    rng: StdRng,
}

impl WordSource {
    /// Create a source seeded from operating system entropy
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a source with a reproducible draw sequence
    ///
    /// # Examples
    /// ```
    /// use jumper::wordlists::WordSource;
    ///
    /// let mut a = WordSource::seeded(7);
    /// let mut b = WordSource::seeded(7);
    /// assert_eq!(a.draw(), b.draw());
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            words: words_from_slice(CANDIDATES),
            rng,
        }
    }

    /// Pick the next secret word
    ///
    /// # Panics
    /// Will not panic - the embedded candidate list is non-empty and every
    /// entry is a valid word (checked by the word list tests).
    pub fn draw(&mut self) -> SecretWord {
        let index = self.rng.random_range(0..self.words.len());
        debug!("Drew candidate #{index} of {}", self.words.len());
        self.words[index].clone()
    }
}

impl Default for WordSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert embedded string slice to `SecretWord` vector, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice
        .iter()
        .filter_map(|&s| SecretWord::new(s).ok())
        .collect()
}
