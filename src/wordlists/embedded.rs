//! Embedded word list
//!
//! The candidate secret words compiled into the binary.

/// Candidate secret words, all five lowercase letters
pub const CANDIDATES: &[&str] = &[
    "final", "price", "hello", "bikes", "trees", "moist", "shard", "enter",
];

/// Number of words in `CANDIDATES`
pub const CANDIDATES_COUNT: usize = CANDIDATES.len();
