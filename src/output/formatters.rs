//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::Colorize;

/// Format feedback as colored console symbols (✓ - x)
#[must_use]
pub fn feedback_symbols(feedback: &Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|&mark| {
            let symbol = mark.symbol().to_string();
            match mark {
                Mark::Match => symbol.green().bold().to_string(),
                Mark::Present => symbol.yellow().bold().to_string(),
                Mark::Absent => symbol.bright_black().to_string(),
            }
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
