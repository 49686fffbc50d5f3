//! The Hi-Lo guessing engine
//!
//! The engine owns the candidate range and all decision logic; everything
//! that talks to a user lives in `commands` and `output`.

mod engine;
mod guesser;

pub use engine::RangeGuesser;
pub use guesser::{GameError, Guesser, MAX_BOUND};
