//! Range analysis command
//!
//! Reports how hard a candidate range is: its size, the worst-case number
//! of questions, and the expected number of questions.

use crate::game::{GameError, RangeGuesser};

/// Result of analyzing a candidate range
pub struct AnalysisResult {
    pub min: i32,
    pub max: i32,
    pub size: u32,
    pub worst_case_rounds: u32,
    pub expected_rounds: f64,
}

/// Analyze the candidate range `min..=max`
///
/// Dichotomy halves the range each round, so the worst case is
/// `ceil(log2(size))` questions and the expectation is close to
/// `log2(size)`.
///
/// # Errors
///
/// Returns [`GameError::InvalidRange`] for an empty, negative, or
/// over-ceiling range.
pub fn analyze_range(min: i32, max: i32) -> Result<AnalysisResult, GameError> {
    let game = RangeGuesser::new(min, max)?;
    let size = game.size();

    let expected_rounds = f64::from(size).log2();
    let worst_case_rounds = expected_rounds.ceil() as u32;

    Ok(AnalysisResult {
        min,
        max,
        size,
        worst_case_rounds,
        expected_rounds,
    })
}
