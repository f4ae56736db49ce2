//! Game engine
//!
//! The session aggregate and the director state machine that drives it.
//! Front ends feed raw input in and read state back out; no I/O happens here.

mod director;
mod session;

pub use director::{Director, DirectorError, GameState, Statistics};
pub use session::{GuessOutcome, PLACEHOLDER, Session};
