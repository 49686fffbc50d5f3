//! The Hi-Lo decision engine
//!
//! Tracks the shrinking candidate range and narrows it by dichotomy: each
//! question proposes the lower half (midpoint included), an affirmative
//! answer keeps it, a negative answer keeps the upper half without the
//! midpoint.

use super::guesser::{GameError, Guesser, MAX_BOUND};
use crate::core::Span;

/// Binary-search guesser over an inclusive integer range
///
/// Holds the candidate range `[low, high]` still consistent with every
/// answer given so far, plus the original range size for the progress
/// computation. `low <= high` holds at all times.
#[derive(Debug, Clone)]
pub struct RangeGuesser {
    low: i32,
    high: i32,
    size: u32,
}

impl RangeGuesser {
    /// Create a guesser over the inclusive range `min..=max`
    ///
    /// # Errors
    /// Returns [`GameError::InvalidRange`] if the range is empty, `min` is
    /// negative, or `max` is at or above `1_000_000_000`.
    ///
    /// # Examples
    /// ```
    /// use hilo::game::RangeGuesser;
    ///
    /// assert!(RangeGuesser::new(1, 100).is_ok());
    /// assert!(RangeGuesser::new(5, 4).is_err());
    /// ```
    pub const fn new(min: i32, max: i32) -> Result<Self, GameError> {
        if min > max || min < 0 || max >= MAX_BOUND {
            return Err(GameError::InvalidRange { min, max });
        }

        Ok(Self {
            low: min,
            high: max,
            size: (max - min) as u32 + 1,
        })
    }

    /// Create a guesser over the range `1..=max`
    ///
    /// # Errors
    /// Returns [`GameError::InvalidRange`] if `max` is less than 1 or at or
    /// above `1_000_000_000`.
    pub const fn upto(max: i32) -> Result<Self, GameError> {
        Self::new(1, max)
    }

    /// Original size of the candidate range
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    // The ceiling keeps low + high below i32::MAX, so the sum cannot overflow.
    const fn midpoint(&self) -> i32 {
        (self.low + self.high) / 2
    }
}

impl Guesser for RangeGuesser {
    fn choices(&self) -> Result<Span, GameError> {
        if self.solved() {
            return Err(GameError::AlreadySolved);
        }
        debug_assert!(self.low <= self.midpoint());
        Ok(Span::new(self.low, self.midpoint()))
    }

    fn solved(&self) -> bool {
        self.low == self.high
    }

    fn yes(&mut self) -> Result<(), GameError> {
        if self.solved() {
            return Err(GameError::AlreadySolved);
        }
        self.high = self.midpoint();
        debug_assert!(self.low <= self.high);
        Ok(())
    }

    fn no(&mut self) -> Result<(), GameError> {
        if self.solved() {
            return Err(GameError::AlreadySolved);
        }
        self.low = self.midpoint() + 1;
        debug_assert!(self.low <= self.high);
        Ok(())
    }

    fn progress(&self) -> f64 {
        if self.solved() {
            return 1.0;
        }
        let remaining = f64::from((self.high - self.low) as u32 + 1);
        1.0 - remaining.ln() / f64::from(self.size).ln()
    }

    fn secret(&self) -> Result<i32, GameError> {
        if !self.solved() {
            return Err(GameError::NotSolved);
        }
        Ok(self.low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Answer each question truthfully for `target` until solved,
    /// returning the number of answers given.
    fn drive_to<G: Guesser>(game: &mut G, target: i32) -> u32 {
        let mut rounds = 0;
        while !game.solved() {
            let span = game.choices().unwrap();
            if span.contains(target) {
                game.yes().unwrap();
            } else {
                game.no().unwrap();
            }
            rounds += 1;
        }
        rounds
    }

    fn finds<G: Guesser>(game: &mut G, target: i32) {
        drive_to(game, target);
        assert_eq!(game.secret().unwrap(), target);
        assert_eq!(game.progress(), 1.0);
    }

    #[test]
    fn new_accepts_valid_ranges() {
        assert!(RangeGuesser::new(1, 100).is_ok());
        assert!(RangeGuesser::new(0, 0).is_ok());
        assert!(RangeGuesser::new(0, 999_999_999).is_ok());
    }

    #[test]
    fn new_rejects_empty_range() {
        assert!(matches!(
            RangeGuesser::new(5, 4),
            Err(GameError::InvalidRange { min: 5, max: 4 })
        ));
    }

    #[test]
    fn new_rejects_negative_min() {
        assert!(matches!(
            RangeGuesser::new(-5, 5),
            Err(GameError::InvalidRange { .. })
        ));
    }

    #[test]
    fn new_rejects_max_at_ceiling() {
        assert!(matches!(
            RangeGuesser::new(1000, 1_000_000_000),
            Err(GameError::InvalidRange { .. })
        ));
    }

    #[test]
    fn solved_iff_singleton() {
        assert!(!RangeGuesser::new(1, 100).unwrap().solved());
        assert!(RangeGuesser::new(42, 42).unwrap().solved());
    }

    #[test]
    fn singleton_is_immediately_solved() {
        let game = RangeGuesser::new(3, 3).unwrap();
        assert!(game.solved());
        assert_eq!(game.secret().unwrap(), 3);
        assert_eq!(game.progress(), 1.0);
    }

    #[test]
    fn choices_is_idempotent() {
        let game = RangeGuesser::new(1, 100).unwrap();
        let first = game.choices().unwrap();
        for _ in 0..10 {
            assert_eq!(game.choices().unwrap(), first);
        }
    }

    #[test]
    fn choices_proposes_lower_half() {
        let game = RangeGuesser::new(1, 100).unwrap();
        let span = game.choices().unwrap();
        assert_eq!(span.min(), 1);
        assert_eq!(span.max(), 50);
    }

    #[test]
    fn solved_game_rejects_questions_and_answers() {
        let mut game = RangeGuesser::new(7, 7).unwrap();
        assert_eq!(game.choices().unwrap_err(), GameError::AlreadySolved);
        assert_eq!(game.yes().unwrap_err(), GameError::AlreadySolved);
        assert_eq!(game.no().unwrap_err(), GameError::AlreadySolved);
    }

    #[test]
    fn unsolved_game_withholds_secret() {
        let game = RangeGuesser::new(1, 100).unwrap();
        assert_eq!(game.secret().unwrap_err(), GameError::NotSolved);
    }

    #[test]
    fn failed_answer_leaves_state_intact() {
        let mut game = RangeGuesser::new(9, 9).unwrap();
        assert!(game.yes().is_err());
        assert_eq!(game.secret().unwrap(), 9);
    }

    #[test]
    fn all_yes_terminates_at_lower_bound() {
        let mut game = RangeGuesser::new(1, 10_000).unwrap();
        while !game.solved() {
            game.yes().unwrap();
        }
        assert_eq!(game.secret().unwrap(), 1);
        assert_eq!(game.progress(), 1.0);
    }

    #[test]
    fn all_no_terminates_at_upper_bound() {
        let mut game = RangeGuesser::new(1, 10_000).unwrap();
        while !game.solved() {
            game.no().unwrap();
        }
        assert_eq!(game.secret().unwrap(), 10_000);
        assert_eq!(game.progress(), 1.0);
    }

    #[test]
    fn finds_target_small_range() {
        finds(&mut RangeGuesser::new(1, 10).unwrap(), 5);
    }

    #[test]
    fn finds_target_mid_range() {
        finds(&mut RangeGuesser::new(1, 100).unwrap(), 42);
    }

    #[test]
    fn finds_target_at_boundaries() {
        finds(&mut RangeGuesser::new(1, 10_000).unwrap(), 1);
        finds(&mut RangeGuesser::new(1, 10_000).unwrap(), 10_000);
    }

    #[test]
    fn finds_target_in_maximal_range() {
        finds(&mut RangeGuesser::new(0, 999_999_999).unwrap(), 54_321);
    }

    #[test]
    fn finds_both_values_of_a_pair() {
        finds(&mut RangeGuesser::new(11, 12).unwrap(), 11);
        finds(&mut RangeGuesser::new(11, 12).unwrap(), 12);
    }

    #[test]
    fn finds_every_target_exhaustively() {
        for target in 1..=64 {
            finds(&mut RangeGuesser::new(1, 64).unwrap(), target);
        }
    }

    #[test]
    fn round_count_is_logarithmic() {
        let rounds = drive_to(&mut RangeGuesser::new(1, 1024).unwrap(), 700);
        assert!(rounds <= 10);
    }

    #[test]
    fn progress_starts_at_zero() {
        assert_eq!(RangeGuesser::new(1, 100).unwrap().progress(), 0.0);
        assert_eq!(RangeGuesser::new(0, 999_999_999).unwrap().progress(), 0.0);
    }

    #[test]
    fn progress_strictly_increases() {
        // A mixed answer sequence over 1..=1000.
        let mut game = RangeGuesser::new(1, 1000).unwrap();
        let mut last = game.progress();
        let mut flip = false;
        while !game.solved() {
            if flip {
                game.yes().unwrap();
            } else {
                game.no().unwrap();
            }
            flip = !flip;
            let current = game.progress();
            assert!(current > last, "progress must strictly increase");
            last = current;
        }
        assert_eq!(game.progress(), 1.0);
    }

    #[test]
    fn progress_stays_within_unit_interval() {
        let mut game = RangeGuesser::new(1, 1000).unwrap();
        while !game.solved() {
            let p = game.progress();
            assert!((0.0..=1.0).contains(&p));
            game.yes().unwrap();
        }
    }

    #[test]
    fn upto_matches_explicit_range() {
        for max in [1, 2, 10, 100, 999_999_999] {
            let a = RangeGuesser::upto(max).unwrap();
            let b = RangeGuesser::new(1, max).unwrap();
            assert_eq!(a.size(), b.size());
            assert_eq!(a.solved(), b.solved());
            if !a.solved() {
                assert_eq!(a.choices().unwrap(), b.choices().unwrap());
            }
        }
    }

    #[test]
    fn upto_rejects_non_positive_max() {
        assert!(matches!(
            RangeGuesser::upto(0),
            Err(GameError::InvalidRange { .. })
        ));
        assert!(RangeGuesser::upto(1_000_000_000).is_err());
    }

    #[test]
    fn size_is_fixed_at_construction() {
        let mut game = RangeGuesser::new(1, 100).unwrap();
        assert_eq!(game.size(), 100);
        game.yes().unwrap();
        game.no().unwrap();
        assert_eq!(game.size(), 100);
    }
}
