//! Target solving command
//!
//! Plays the engine against a known target, answering each question
//! truthfully, and records the question path.

use crate::core::Span;
use crate::game::{Guesser, RangeGuesser};

/// Configuration for solving a target
pub struct SolveConfig {
    pub target: i32,
    pub min: i32,
    pub max: i32,
}

/// Result of solving a target
pub struct SolveResult {
    pub target: i32,
    pub secret: i32,
    pub steps: Vec<QuestionStep>,
}

/// A single question/answer round in the solution
pub struct QuestionStep {
    pub asked: Span,
    pub answer: bool,
    pub remaining: u32,
    pub progress: f64,
}

/// Solve for a specific target by answering every question truthfully
///
/// # Errors
///
/// Returns an error if:
/// - The requested range is invalid (empty, negative, or beyond the ceiling)
/// - The target lies outside the requested range
pub fn solve_target(config: &SolveConfig) -> Result<SolveResult, String> {
    let mut game =
        RangeGuesser::new(config.min, config.max).map_err(|e| format!("Invalid range: {e}"))?;

    if config.target < config.min || config.target > config.max {
        return Err(format!(
            "Target {} is outside the range {}..={}",
            config.target, config.min, config.max
        ));
    }

    let mut steps: Vec<QuestionStep> = Vec::new();
    let mut remaining = game.size();

    while !game.solved() {
        let asked = game.choices().map_err(|e| e.to_string())?;
        let answer = asked.contains(config.target);

        if answer {
            game.yes().map_err(|e| e.to_string())?;
            remaining = asked.size();
        } else {
            game.no().map_err(|e| e.to_string())?;
            remaining -= asked.size();
        }

        steps.push(QuestionStep {
            asked,
            answer,
            remaining,
            progress: game.progress(),
        });
    }

    let secret = game.secret().map_err(|e| e.to_string())?;

    Ok(SolveResult {
        target: config.target,
        secret,
        steps,
    })
}
