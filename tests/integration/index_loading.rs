//! Loading the served index, and the ways loading fails.

use std::io::Write;

use super::common::{fixture_index, SCENARIO_INDEX_JSON};
use tissue_search::{SearchIndex, WidgetError};

#[test]
fn test_fixture_loads_every_entry_in_order() {
    let index = fixture_index();
    assert_eq!(index.len(), 5);
    let urls: Vec<&str> = index.iter().map(|e| e.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "/machines/cnc-dropout/",
            "/machines/belt-slip/",
            "/machines/coolant-pump/",
            "/machines/lathe-chatter/",
            "/about/",
        ]
    );
}

#[test]
fn test_wire_format_matches_in_memory_scenario() {
    let parsed = SearchIndex::from_json(SCENARIO_INDEX_JSON).unwrap();
    assert_eq!(parsed, super::common::scenario_index());
}

#[test]
fn test_invalid_json_is_parse_error() {
    let err = SearchIndex::from_json("[{").unwrap_err();
    assert!(matches!(err, WidgetError::Parse(_)));
}

#[test]
fn test_entry_missing_keywords_is_parse_error() {
    let err = SearchIndex::from_json(r#"[{"url": "/a", "title": "A"}]"#).unwrap_err();
    assert!(err.to_string().contains("keywords"));
}

#[test]
fn test_wrong_field_type_is_parse_error() {
    let err =
        SearchIndex::from_json(r#"[{"keywords": "cnc", "url": "/a", "title": "A"}]"#).unwrap_err();
    assert!(matches!(err, WidgetError::Parse(_)));
}

#[test]
fn test_load_from_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search_index.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(SCENARIO_INDEX_JSON.as_bytes()).unwrap();
    drop(file);

    let index = SearchIndex::load(&path).unwrap();
    assert_eq!(index.len(), 2);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SearchIndex::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, WidgetError::Io { .. }));
}
