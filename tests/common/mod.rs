//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::Path;
use std::sync::LazyLock;

use tissue_search::{SearchIndex, SearchWidget, WidgetConfig};

// Re-export canonical test utilities from tissue_search::testing
pub use tissue_search::testing::{make_entry, scenario_index, RecordingView, SCENARIO_INDEX_JSON};

/// Path to the machine-shop wiki fixture index.
pub const FIXTURE_INDEX: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/search_index.json"
);

/// Parsed once per test binary.
static FIXTURE: LazyLock<SearchIndex> = LazyLock::new(|| {
    SearchIndex::load(Path::new(FIXTURE_INDEX)).expect("Failed to load fixture index")
});

/// The fixture index (five entries, see `tests/fixtures/search_index.json`).
pub fn fixture_index() -> SearchIndex {
    FIXTURE.clone()
}

/// A widget over the fixture index with default configuration.
pub fn fixture_widget() -> SearchWidget {
    SearchWidget::new(fixture_index(), &WidgetConfig::default())
}

/// A widget over the two-entry scenario index.
pub fn scenario_widget() -> SearchWidget {
    SearchWidget::new(scenario_index(), &WidgetConfig::default())
}

/// Titles matched by `query` against `index`.
pub fn titles(index: &SearchIndex, query: &str) -> Vec<String> {
    tissue_search::search(index, query)
        .iter()
        .map(|e| e.title.clone())
        .collect()
}
