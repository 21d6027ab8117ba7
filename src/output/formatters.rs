//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Format feedback as key pegs
///
/// One `●` per exact match, one `○` per misplaced colour, `·` for the
/// remaining positions.
#[must_use]
pub fn feedback_pegs(feedback: Feedback, pegs: usize) -> String {
    let exact = usize::from(feedback.exact());
    let misplaced = usize::from(feedback.misplaced());
    let empty = pegs.saturating_sub(exact + misplaced);

    format!("{}{}{}", "●".repeat(exact), "○".repeat(misplaced), "·".repeat(empty))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Information still missing, in bits, with `remaining` candidates left
#[must_use]
pub fn bits_remaining(remaining: usize) -> f64 {
    if remaining <= 1 {
        0.0
    } else {
        (remaining as f64).log2()
    }
}
