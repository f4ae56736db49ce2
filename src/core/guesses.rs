//! Guess history for a single session

use super::Letter;

/// Ordered history of the distinct letters guessed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessTracker {
    guesses: Vec<Letter>,
}

impl GuessTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            guesses: Vec::new(),
        }
    }

    /// Record a guess
    ///
    /// Returns `false` and leaves the history untouched if the letter was
    /// already guessed.
    pub fn submit(&mut self, letter: Letter) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.guesses.push(letter);
        true
    }

    /// Letters in the order they were guessed
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Letter] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.guesses.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    pub fn reset(&mut self) {
        self.guesses.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn submit_keeps_order() {
        let mut tracker = GuessTracker::new();
        assert!(tracker.submit(letter('t')));
        assert!(tracker.submit(letter('a')));
        assert!(tracker.submit(letter('e')));

        assert_eq!(tracker.guesses(), &[letter('t'), letter('a'), letter('e')]);
        assert_eq!(tracker.len(), 3);
    }

    #[test]
    fn submit_rejects_repeats() {
        let mut tracker = GuessTracker::new();
        assert!(tracker.submit(letter('x')));
        assert!(!tracker.submit(letter('x')));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn contains_checks_history() {
        let mut tracker = GuessTracker::new();
        tracker.submit(letter('m'));
        assert!(tracker.contains(letter('m')));
        assert!(!tracker.contains(letter('n')));
    }

    #[test]
    fn reset_clears_history() {
        let mut tracker = GuessTracker::new();
        tracker.submit(letter('a'));
        tracker.submit(letter('b'));
        tracker.reset();

        assert!(tracker.is_empty());
        assert_eq!(tracker.guesses(), &[]);
        assert!(tracker.submit(letter('a')));
    }
}
