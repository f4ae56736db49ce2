//! Parachute miss counter
//!
//! Every wrong guess cuts one line of the canopy. When all lines are cut the
//! jumper falls and the session is lost.

/// Number of misses allowed before the session is lost
pub const MAX_MISSES: usize = 5;

/// Canopy lines, top to bottom; one is removed per miss
const CANOPY: [&str; MAX_MISSES] = [
    "  _____  ",
    " /_____\\ ",
    " \\     / ",
    "  \\   /  ",
    "   \\ /   ",
];

const JUMPER_BODY: [&str; 2] = ["   /|\\   ", "   / \\   "];
const GROUND: &str = "^^^^^^^^^";

/// Tracks incorrect guesses, capped at [`MAX_MISSES`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parachute {
    misses: usize,
}

impl Parachute {
    #[must_use]
    pub const fn new() -> Self {
        Self { misses: 0 }
    }

    /// Cut one canopy line; saturates at [`MAX_MISSES`]
    pub fn register_miss(&mut self) {
        if self.misses < MAX_MISSES {
            self.misses += 1;
        }
    }

    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.misses
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        MAX_MISSES - self.misses
    }

    /// True once every canopy line has been cut
    #[inline]
    #[must_use]
    pub const fn is_cut_away(&self) -> bool {
        self.misses >= MAX_MISSES
    }

    pub fn reset(&mut self) {
        self.misses = 0;
    }

    /// Lines of the parachute drawing for the current miss count
    #[must_use]
    pub fn render_lines(&self) -> Vec<&'static str> {
        let head = if self.is_cut_away() {
            "    x    "
        } else {
            "    O    "
        };

        CANOPY[self.misses..]
            .iter()
            .copied()
            .chain(std::iter::once(head))
            .chain(JUMPER_BODY)
            .chain(["", GROUND])
            .collect()
    }

    /// The parachute drawing as a single newline-separated string
    ///
    /// # Examples
    /// ```
    /// use jumper::core::Parachute;
    ///
    /// let mut parachute = Parachute::new();
    /// let full = parachute.render();
    /// parachute.register_miss();
    /// assert_eq!(parachute.render().lines().count(), full.lines().count() - 1);
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.render_lines().join("\n")
    }
}
