//! Formatting utilities for terminal output

use crate::core::Span;

/// Render a question interval as the text shown to the user
#[must_use]
pub fn format_question(span: Span) -> String {
    if span.is_singleton() {
        format!("Is your number {} ?", span.min())
    } else {
        format!("Is your number between {} and {} ?", span.min(), span.max())
    }
}

/// Format a progress value in `[0.0, 1.0]` as a rounded percentage
#[must_use]
pub fn format_percent(progress: f64) -> String {
    format!("{:.0}%", progress * 100.0)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
