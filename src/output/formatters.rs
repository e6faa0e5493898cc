//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Exact => '🟩',
            Mark::Misplaced => '🟨',
            Mark::Absent => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
