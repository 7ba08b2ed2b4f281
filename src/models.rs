// src/models.rs
use chrono::{DateTime, Local};
use serde::{Serialize, Deserialize};

// Highest score the strength analyzer can award
pub const MAX_SCORE: u8 = 5;

/// A recorded past analysis. Fields are read-only once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    password: String,
    timestamp: DateTime<Local>,
    score: u8,
}

impl AnalysisResult {
    pub fn new(password: &str, timestamp: DateTime<Local>, score: u8) -> Self {
        Self {
            password: password.to_string(),
            timestamp,
            score: score.min(MAX_SCORE),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn score(&self) -> u8 {
        self.score
    }
}

/// Outcome of a strength check: a 0-5 score plus one suggestion per failed heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub score: u8,
    pub feedback: Vec<String>,
}

impl StrengthReport {
    pub fn max_score(&self) -> u8 {
        MAX_SCORE
    }

    // Proportion used by the progress indicator
    pub fn fraction(&self) -> f64 {
        f64::from(self.score) / f64::from(MAX_SCORE)
    }

    pub fn is_perfect(&self) -> bool {
        self.score == MAX_SCORE && self.feedback.is_empty()
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_numbers: false,
            include_symbols: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_result_score_is_capped() {
        let result = AnalysisResult::new("hunter2", Local::now(), 9);
        assert_eq!(result.score(), MAX_SCORE);
        assert_eq!(result.password(), "hunter2");
    }

    #[test]
    fn report_fraction_tracks_score() {
        let report = StrengthReport { score: 2, feedback: vec!["Add numbers".to_string()] };
        assert!((report.fraction() - 0.4).abs() < f64::EPSILON);
        assert!(!report.is_perfect());
        assert_eq!(report.max_score(), 5);
    }

    #[test]
    fn default_options_match_interactive_defaults() {
        let options = PasswordGenerationOptions::default();
        assert_eq!(options.length, 12);
        assert!(!options.include_numbers);
        assert!(!options.include_symbols);
    }
}
