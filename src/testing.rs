//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{IndexEntry, SearchIndex};
use crate::widget::ResultsView;

/// Create an index entry from borrowed parts.
pub fn make_entry(title: &str, url: &str, keywords: &[&str]) -> IndexEntry {
    IndexEntry {
        keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        url: url.to_string(),
        title: title.to_string(),
    }
}

/// The two-entry index used by the documented scenarios:
/// `A` (`/a`, "cnc dropout") and `B` (`/b`, "belt slip").
pub fn scenario_index() -> SearchIndex {
    SearchIndex::new(vec![
        make_entry("A", "/a", &["cnc dropout"]),
        make_entry("B", "/b", &["belt slip"]),
    ])
}

/// The same index as served over the wire.
pub const SCENARIO_INDEX_JSON: &str = r#"[
  {"keywords": ["cnc dropout"], "url": "/a", "title": "A"},
  {"keywords": ["belt slip"], "url": "/b", "title": "B"}
]"#;

/// A results view that keeps every replacement it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingView {
    pub history: Vec<String>,
}

impl RecordingView {
    /// What the container shows now (empty before the first keystroke).
    pub fn current(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or("")
    }
}

impl ResultsView for RecordingView {
    fn replace_content(&mut self, markup: &str) {
        self.history.push(markup.to_string());
    }
}
