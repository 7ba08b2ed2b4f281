// src/cli/handlers.rs
use console::style;
use serde_json::json;

use crate::cli::Result;
use crate::core::config::Config;
use crate::core::history::HistoryStore;
use crate::generators::PasswordGenerator;
use crate::models::{PasswordGenerationOptions, StrengthReport};
use crate::strength;
use crate::utils::{format_timestamp, mask_password, score_bar, score_stars, strength_heading};

const BAR_WIDTH: usize = 20;

// Handlers shared by the one-shot commands and the interactive menu
pub fn handle_check(password: &str, as_json: bool) -> Result<(StrengthReport, String)> {
    let report = strength::analyze(password);
    log::info!(
        "Analyzed password of {} characters: score {}",
        password.chars().count(),
        report.score
    );

    let output = if as_json {
        serde_json::to_string_pretty(&report)?
    } else {
        render_report(&report)
    };

    Ok((report, output))
}

pub fn handle_generate(
    generator: &PasswordGenerator,
    config: &Config,
    options: &PasswordGenerationOptions,
    as_json: bool,
) -> Result<String> {
    PasswordGenerator::validate_length(
        options.length,
        config.min_password_length,
        config.max_password_length,
    )?;

    let generated = generator.generate_password(options);

    if as_json {
        let value = json!({
            "password": generated,
            "length": options.length,
            "include_numbers": options.include_numbers,
            "include_symbols": options.include_symbols,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    Ok(format!("Generated password: {}", generated))
}

pub fn render_report(report: &StrengthReport) -> String {
    let mut lines = vec![
        format!(
            "{} {}/{} ({:.0}%)",
            score_bar(report.score, report.max_score(), BAR_WIDTH),
            report.score,
            report.max_score(),
            report.fraction() * 100.0
        ),
        style(strength_heading(report.score)).bold().to_string(),
    ];

    if report.is_perfect() {
        lines.push(style("No suggestions, this password passes every check").green().to_string());
    } else if !report.feedback.is_empty() {
        lines.push(style("Improvement Suggestions:").yellow().to_string());
        lines.extend(report.feedback.iter().map(|item| format!("- {}", item)));
    }

    lines.join("\n")
}

pub fn render_history(history: &HistoryStore, limit: usize, show_passwords: bool) -> String {
    let recent = history.recent(limit);
    if recent.is_empty() {
        return "No history yet".to_string();
    }

    let mut lines = vec![style("Analysis History").bold().to_string()];
    for entry in recent {
        let password = if show_passwords {
            entry.password().to_string()
        } else {
            mask_password(entry.password())
        };
        lines.push(format!(
            "{:<32} {}  Score: {}",
            password,
            format_timestamp(&entry.timestamp()),
            score_stars(entry.score())
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisResult;
    use chrono::{Local, TimeZone};

    #[test]
    fn check_renders_feedback_lines() {
        let (report, output) = handle_check("aaaaaaaaaaaa", false).unwrap();
        assert_eq!(report.score, 1);
        assert!(output.contains("- Mix uppercase and lowercase"));
        assert!(output.contains("- More unique characters"));
        assert!(output.contains("1/5 (20%)"));
    }

    #[test]
    fn perfect_check_has_no_suggestions() {
        let (report, output) = handle_check("Tr0ub4dor&3xyz!", false).unwrap();
        assert_eq!(report.score, 5);
        assert!(output.contains("passes every check"));
        assert!(!output.contains("- "));
    }

    #[test]
    fn check_json_is_parseable() {
        let (_, output) = handle_check("", true).unwrap();
        let parsed: StrengthReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.score, 0);
        assert_eq!(parsed.feedback, vec!["Enter a password to check".to_string()]);
    }

    #[test]
    fn generate_rejects_out_of_range_length() {
        let options = PasswordGenerationOptions { length: 2, ..Default::default() };
        let result = handle_generate(&PasswordGenerator::new(), &Config::default(), &options, false);
        assert!(result.is_err());
    }

    #[test]
    fn generate_json_reports_password() {
        let options = PasswordGenerationOptions { length: 16, include_numbers: true, include_symbols: false };
        let output = handle_generate(&PasswordGenerator::new(), &Config::default(), &options, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["password"].as_str().map(str::len), Some(16));
        assert_eq!(value["include_numbers"], true);
    }

    #[test]
    fn history_masks_passwords_by_default() {
        let mut history = HistoryStore::new();
        let time = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        history.append(AnalysisResult::new("secret", time, 2));

        let masked = render_history(&history, 5, false);
        assert!(masked.contains("******"));
        assert!(!masked.contains("secret"));
        assert!(masked.contains("2024-01-02 03:04"));

        let raw = render_history(&history, 5, true);
        assert!(raw.contains("secret"));
    }

    #[test]
    fn empty_history_has_placeholder() {
        assert_eq!(render_history(&HistoryStore::new(), 5, false), "No history yet");
    }
}
