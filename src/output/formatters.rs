//! Formatting utilities for terminal output

use crate::core::{Letter, Parachute};

/// Join letters as a comma separated list, e.g. `"a, q, z"`
#[must_use]
pub fn letter_list(letters: &[Letter]) -> String {
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Short status text for the parachute, e.g. `"3 of 5 lines left"`
#[must_use]
pub fn lines_left(parachute: &Parachute) -> String {
    let remaining = parachute.remaining();
    let total = parachute.count() + remaining;
    let noun = if remaining == 1 { "line" } else { "lines" };
    format!("{remaining} of {total} {noun} left")
}

/// Create a bar of filled and empty cells
#[must_use]
pub fn create_progress_bar(filled: usize, width: usize) -> String {
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(input: &str) -> Vec<Letter> {
        input.chars().map(|ch| Letter::from_char(ch).unwrap()).collect()
    }

    #[test]
    fn letter_list_empty() {
        assert_eq!(letter_list(&[]), "");
    }

    #[test]
    fn letter_list_joins() {
        assert_eq!(letter_list(&letters("aqz")), "a, q, z");
    }

    #[test]
    fn lines_left_plural() {
        let parachute = Parachute::new();
        assert_eq!(lines_left(&parachute), "5 of 5 lines left");
    }

    #[test]
    fn lines_left_singular() {
        let mut parachute = Parachute::new();
        for _ in 0..4 {
            parachute.register_miss();
        }
        assert_eq!(lines_left(&parachute), "1 of 5 line left");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 5), "░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(5, 5), "█████");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(9, 3), "███");
    }
}
