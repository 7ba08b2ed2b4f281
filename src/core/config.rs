// src/core/config.rs
use std::env;
use std::str::FromStr;
use log::LevelFilter;

use crate::core::history::DEFAULT_DISPLAY_LIMIT;

// Runtime settings for the checker and generator
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,

    // History
    pub history_display_limit: usize,
    pub show_history_passwords: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 12,
            min_password_length: 4,
            max_password_length: 32,

            // History
            history_display_limit: DEFAULT_DISPLAY_LIMIT,
            show_history_passwords: false,

            // Logging
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        parse_into(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut config.default_password_length);
        parse_into(&lookup, "MIN_PASSWORD_LENGTH", &mut config.min_password_length);
        parse_into(&lookup, "MAX_PASSWORD_LENGTH", &mut config.max_password_length);

        if config.min_password_length > config.max_password_length {
            log::warn!(
                "MIN_PASSWORD_LENGTH {} exceeds MAX_PASSWORD_LENGTH {}, using defaults",
                config.min_password_length,
                config.max_password_length
            );
            let defaults = Config::default();
            config.min_password_length = defaults.min_password_length;
            config.max_password_length = defaults.max_password_length;
        }

        config.default_password_length = config
            .default_password_length
            .clamp(config.min_password_length, config.max_password_length);

        // History
        parse_into(&lookup, "HISTORY_DISPLAY_LIMIT", &mut config.history_display_limit);
        // Never more than the default number of entries on screen
        config.history_display_limit = config.history_display_limit.clamp(1, DEFAULT_DISPLAY_LIMIT);
        parse_into(&lookup, "SHOW_HISTORY_PASSWORDS", &mut config.show_history_passwords);

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', keeping {}", level, config.log_level),
            }
        }

        config
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(val) = lookup(key) {
        match val.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => log::warn!("Ignoring invalid value '{}' for {}", val, key),
        }
    }
}
