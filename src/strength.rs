// src/strength.rs
use std::collections::HashSet;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::models::{StrengthReport, MAX_SCORE};

pub const EMPTY_PROMPT: &str = "Enter a password to check";
pub const TIP_LENGTH: &str = "Consider longer password (12+ chars)";
pub const TIP_CASE: &str = "Mix uppercase and lowercase";
pub const TIP_DIGITS: &str = "Add numbers";
pub const TIP_SPECIAL: &str = "Add special characters";
pub const TIP_UNIQUE: &str = "More unique characters";

const MIN_LENGTH: usize = 12;

/// Score a password against five heuristics.
///
/// Each heuristic adds one point when it passes or appends its suggestion
/// when it fails, always in the same order: length, case mix, digits,
/// special characters, character uniqueness. An empty password scores 0
/// with a single prompt message.
pub fn analyze(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport {
            score: 0,
            feedback: vec![EMPTY_PROMPT.to_string()],
        };
    }

    let mut score: u8 = 0;
    let mut feedback = Vec::new();

    let length = password.chars().count();

    // Length check
    if length >= MIN_LENGTH {
        score += 1;
    } else {
        feedback.push(TIP_LENGTH.to_string());
    }

    // Complexity checks
    let has_upper = password.chars().any(char::is_uppercase);
    let has_lower = password.chars().any(char::is_lowercase);
    let has_digit = password.chars().any(is_decimal_digit);
    let has_special = password.chars().any(|c| c.is_ascii_punctuation());

    if has_upper && has_lower {
        score += 1;
    } else {
        feedback.push(TIP_CASE.to_string());
    }

    if has_digit {
        score += 1;
    } else {
        feedback.push(TIP_DIGITS.to_string());
    }

    if has_special {
        score += 1;
    } else {
        feedback.push(TIP_SPECIAL.to_string());
    }

    // distinct / length >= 0.7, kept in integers
    let distinct = password.chars().collect::<HashSet<_>>().len();
    if distinct * 10 >= length * 7 {
        score += 1;
    } else {
        feedback.push(TIP_UNIQUE.to_string());
    }

    StrengthReport {
        score: score.min(MAX_SCORE),
        feedback,
    }
}

// Decimal digits in any script; numerals such as Roman or fractions do not count
fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_prompts_for_input() {
        let report = analyze("");
        assert_eq!(report.score, 0);
        assert_eq!(report.feedback, vec!["Enter a password to check".to_string()]);
    }

    #[test]
    fn strong_password_scores_five() {
        let report = analyze("Tr0ub4dor&3xyz!");
        assert_eq!(report.score, 5);
        assert!(report.feedback.is_empty());
        assert!(report.is_perfect());
    }

    #[test]
    fn repeated_lowercase_only_passes_length() {
        let report = analyze("aaaaaaaaaaaa");
        assert_eq!(report.score, 1);
        assert_eq!(
            report.feedback,
            vec![TIP_CASE, TIP_DIGITS, TIP_SPECIAL, TIP_UNIQUE]
        );
    }

    #[test]
    fn repeating_pattern_fails_only_uniqueness() {
        let report = analyze("Ab1!Ab1!Ab1!");
        assert_eq!(report.score, 4);
        assert_eq!(report.feedback, vec!["More unique characters".to_string()]);
    }

    #[test]
    fn short_password_keeps_check_order() {
        let report = analyze("abc");
        assert_eq!(report.score, 1);
        assert_eq!(report.feedback, vec![TIP_LENGTH, TIP_CASE, TIP_DIGITS, TIP_SPECIAL]);
    }

    #[test]
    fn uniqueness_threshold_is_inclusive() {
        // 7 distinct out of 10
        let report = analyze("abcdefgaaa");
        assert!(!report.feedback.contains(&TIP_UNIQUE.to_string()));

        // 6 distinct out of 10
        let report = analyze("abcdefaaaa");
        assert!(report.feedback.contains(&TIP_UNIQUE.to_string()));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 11 characters, well over 12 bytes
        let report = analyze("ééééééééééé");
        assert!(report.feedback.contains(&TIP_LENGTH.to_string()));
    }

    #[test]
    fn non_ascii_letters_count_for_case_mix() {
        let report = analyze("Ωмега");
        assert!(!report.feedback.contains(&TIP_CASE.to_string()));
    }

    #[test]
    fn only_decimal_digits_count_as_numbers() {
        for numeral in ["Ⅻ", "½"] {
            assert!(analyze(numeral).feedback.contains(&TIP_DIGITS.to_string()), "{}", numeral);
        }
        assert!(!analyze("٣").feedback.contains(&TIP_DIGITS.to_string()));
        assert!(!analyze("7").feedback.contains(&TIP_DIGITS.to_string()));
    }

    #[test]
    fn analysis_is_deterministic() {
        assert_eq!(analyze("S0me-Passw0rd"), analyze("S0me-Passw0rd"));
    }
}
