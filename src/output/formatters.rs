//! Formatting utilities for terminal output

use crate::core::CharStatus;
use colored::Colorize;

/// Format a feedback row as emoji blocks
///
/// Green = exact, yellow = wrong position, white = absent.
#[must_use]
pub fn status_blocks(statuses: &[CharStatus]) -> String {
    statuses
        .iter()
        .map(|status| match status {
            CharStatus::Exact => '🟩',
            CharStatus::WrongPosition => '🟨',
            CharStatus::Absent => '⬜',
        })
        .collect()
}

/// Render a guess with each character colored by its feedback status
///
/// Characters beyond the scored prefix (an over-long guess with
/// verification off) render dimmed.
#[must_use]
pub fn colorize_guess(guess: &str, statuses: &[CharStatus]) -> String {
    guess
        .chars()
        .enumerate()
        .map(|(i, ch)| match statuses.get(i) {
            Some(CharStatus::Exact) => ch.to_string().bright_green().bold().to_string(),
            Some(CharStatus::WrongPosition) => ch.to_string().bright_yellow().bold().to_string(),
            Some(CharStatus::Absent) => ch.to_string().bright_black().to_string(),
            None => ch.to_string().dimmed().to_string(),
        })
        .collect()
}
