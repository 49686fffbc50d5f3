//! Hi-Lo Solver
//!
//! The computer guesses your secret number by dichotomy: each round it
//! proposes half of the remaining candidate range and narrows it from your
//! yes/no answer.
//!
//! # Quick Start
//!
//! ```rust
//! use hilo::game::{Guesser, RangeGuesser};
//!
//! let mut game = RangeGuesser::upto(100).unwrap();
//!
//! // Secret number is 42: answer each question truthfully.
//! while !game.solved() {
//!     if game.choices().unwrap().contains(42) {
//!         game.yes().unwrap();
//!     } else {
//!         game.no().unwrap();
//!     }
//! }
//! assert_eq!(game.secret().unwrap(), 42);
//! ```

// Core domain types
pub mod core;

// The guessing engine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
