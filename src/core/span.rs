//! Inclusive integer interval
//!
//! A `Span` is the value handed back by the engine as a question: "is your
//! secret number within this interval?". It is a plain pair of inclusive
//! bounds with just the operations the game needs.

use std::fmt;

/// An inclusive integer interval `[min, max]`
///
/// Always non-empty: construction requires `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    min: i32,
    max: i32,
}

impl Span {
    /// Create a span from inclusive bounds
    ///
    /// # Panics
    /// Debug-panics if `min > max`; callers only build spans from an
    /// already-validated candidate range.
    #[must_use]
    pub(crate) fn new(min: i32, max: i32) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// Inclusive lower bound
    #[inline]
    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Inclusive upper bound
    #[inline]
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Number of values in the interval (`max - min + 1`)
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u32 {
        (self.max - self.min) as u32 + 1
    }

    /// Whether `value` lies within the interval
    #[inline]
    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Whether the interval holds exactly one value
    #[inline]
    #[must_use]
    pub const fn is_singleton(&self) -> bool {
        self.min == self.max
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
