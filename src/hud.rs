//! Score and lives text for the display collaborator.

/// Formats the score as a fixed-width, zero-padded decimal.
pub fn format_score(score: u32) -> String {
    format!("SCORE {score:05}")
}

/// Formats the remaining lives.
pub fn format_lives(lives: u32) -> String {
    format!("LIVES {lives}")
}
