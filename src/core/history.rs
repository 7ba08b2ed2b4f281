// src/core/history.rs
use crate::models::AnalysisResult;

// Number of entries shown when no limit is configured
pub const DEFAULT_DISPLAY_LIMIT: usize = 5;

/// Chronological record of explicit strength checks.
///
/// The store itself grows without bound; only the display is capped.
#[derive(Debug, Default, Clone)]
pub struct HistoryStore {
    entries: Vec<AnalysisResult>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, result: AnalysisResult) {
        self.entries.push(result);
    }

    /// Most recent entries first, at most `n` of them.
    pub fn recent(&self, n: usize) -> Vec<&AnalysisResult> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
