//! Formatting utilities for terminal output

use crate::core::{GuessOutcome, WordState};

/// Format remaining lives as hearts
#[must_use]
pub fn lives_bar(remaining: usize, max: usize) -> String {
    let remaining = remaining.min(max);
    format!("{}{}", "♥".repeat(remaining), "♡".repeat(max - remaining))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Comma-separated letters, or "none"
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    if letters.is_empty() {
        return "none".to_string();
    }

    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Board rendering: the wire form with revealed letters in upper case
#[must_use]
pub fn spaced_state(state: &WordState) -> String {
    state.to_wire().to_uppercase()
}

#[must_use]
pub const fn outcome_symbol(outcome: GuessOutcome) -> &'static str {
    match outcome {
        GuessOutcome::Correct => "✓",
        GuessOutcome::Incorrect => "✗",
        GuessOutcome::Repeated => "↺",
    }
}
