//! Core domain types for Hi-Lo
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod span;

pub use span::Span;
