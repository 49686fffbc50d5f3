//! Guessing interface and error taxonomy
//!
//! Defines the `Guesser` trait that the interaction loop and the automated
//! drivers program against, plus the errors its operations can signal.

use crate::core::Span;
use std::fmt;

/// Upper-bound ceiling: no candidate range may reach this value.
pub const MAX_BOUND: i32 = 1_000_000_000;

/// Errors signaled by a [`Guesser`]
///
/// All three are precondition violations detected before any state change,
/// so a failed call leaves the guesser exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Requested bounds are empty, negative, or at/above [`MAX_BOUND`]
    InvalidRange { min: i32, max: i32 },
    /// A question or answer was requested after the range collapsed
    AlreadySolved,
    /// The secret was requested before the range collapsed
    NotSolved,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                if min > max {
                    write!(f, "range {min}..={max} is empty")
                } else if *min < 0 {
                    write!(f, "lower bound {min} cannot be negative")
                } else {
                    write!(f, "upper bound {max} must be less than {MAX_BOUND}")
                }
            }
            Self::AlreadySolved => write!(f, "problem has been solved already"),
            Self::NotSolved => write!(f, "problem not solved yet"),
        }
    }
}

impl std::error::Error for GameError {}

/// A game that narrows a secret number by yes/no questions
///
/// Only `yes` and `no` have side effects; the other operations can be called
/// repeatedly and produce the same values until an answer is applied.
pub trait Guesser {
    /// The current question, as the interval the user is asked about
    ///
    /// # Errors
    /// Returns [`GameError::AlreadySolved`] if the problem is already solved.
    fn choices(&self) -> Result<Span, GameError>;

    /// Whether the candidate range has collapsed to a single value
    ///
    /// A problem may be solved without any interaction if the initial range
    /// held only one value.
    fn solved(&self) -> bool;

    /// Affirmative answer: the secret lies within the proposed interval
    ///
    /// # Errors
    /// Returns [`GameError::AlreadySolved`] if the problem is already solved.
    fn yes(&mut self) -> Result<(), GameError>;

    /// Negative answer: the secret lies outside the proposed interval
    ///
    /// # Errors
    /// Returns [`GameError::AlreadySolved`] if the problem is already solved.
    fn no(&mut self) -> Result<(), GameError>;

    /// Progress towards the solution, in `[0.0, 1.0]`
    ///
    /// Exactly `1.0` when solved, exactly `0.0` on a fresh multi-value range,
    /// and strictly increasing after every applied answer.
    fn progress(&self) -> f64;

    /// The secret number
    ///
    /// # Errors
    /// Returns [`GameError::NotSolved`] if called before the problem is solved.
    fn secret(&self) -> Result<i32, GameError>;
}
