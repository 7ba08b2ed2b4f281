// src/utils/format.rs
use chrono::{DateTime, TimeZone};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

const STAR: &str = "⭐";

// Format a history timestamp for display
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}

// One glyph per point
pub fn score_stars(score: u8) -> String {
    STAR.repeat(usize::from(score))
}

pub fn strength_heading(score: u8) -> String {
    if score > 0 {
        format!("Strength: {}", score_stars(score))
    } else {
        "Strength: 🚫 No password".to_string()
    }
}

/// Fixed-width bar filled in proportion to `score / max`.
pub fn score_bar(score: u8, max: u8, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (usize::from(score.min(max)) * width + usize::from(max) / 2) / usize::from(max)
    };
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

// Hide every character of a stored password
pub fn mask_password(password: &str) -> String {
    "*".repeat(password.chars().count())
}
