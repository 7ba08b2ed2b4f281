// src/core/session.rs
use chrono::Local;

use crate::core::history::HistoryStore;
use crate::models::{AnalysisResult, StrengthReport};

/// State owned by one interactive run. Dropped when the run ends.
#[derive(Debug)]
pub struct Session {
    history: HistoryStore,
}

impl Session {
    pub fn new() -> Self {
        Self {
            history: HistoryStore::new(),
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Record an explicitly requested check. Empty passwords are never stored.
    pub fn record_check(&mut self, password: &str, report: &StrengthReport) -> bool {
        if password.is_empty() {
            return false;
        }

        self.history
            .append(AnalysisResult::new(password, Local::now(), report.score));
        log::debug!(
            "Recorded check with score {} ({} entries)",
            report.score,
            self.history.len()
        );
        true
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        log::info!("History cleared");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
