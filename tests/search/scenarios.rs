//! The documented query scenarios against the two-entry index.
//!
//! Index: `A` (`/a`, keywords `["cnc dropout"]`) and `B` (`/b`, keywords
//! `["belt slip"]`).

use super::common::{make_entry, scenario_index, scenario_widget, titles, RecordingView};
use tissue_search::{Query, SearchIndex};

#[test]
fn test_phrase_query_matches_phrase_keyword() {
    let index = scenario_index();
    assert_eq!(Query::parse("cnc dropout").terms(), ["cnc", "dropout"]);
    assert_eq!(titles(&index, "cnc dropout"), vec!["A"]);
}

#[test]
fn test_single_term_query() {
    assert_eq!(titles(&scenario_index(), "slip"), vec!["B"]);
}

#[test]
fn test_no_match_renders_message() {
    let index = scenario_index();
    assert!(titles(&index, "xyz").is_empty());

    let mut view = RecordingView::default();
    scenario_widget().handle_input("xyz", &mut view);
    assert_eq!(view.current(), "<p><em>No matches found.</em></p>");
}

#[test]
fn test_empty_and_blank_queries_show_full_index_in_order() {
    let index = scenario_index();
    assert_eq!(titles(&index, ""), vec!["A", "B"]);
    assert_eq!(titles(&index, "   "), vec!["A", "B"]);

    let mut view = RecordingView::default();
    scenario_widget().handle_input("   ", &mut view);
    assert_eq!(
        view.current(),
        r#"<p><a href="/a">A</a></p><p><a href="/b">B</a></p>"#
    );
}

#[test]
fn test_terms_spread_across_keywords_of_one_entry() {
    let index = SearchIndex::new(vec![
        make_entry("Spindle", "/spindle/", &["cnc dropout", "spindle stall"]),
        make_entry("Belt", "/belt/", &["belt slip"]),
    ]);
    // No single keyword holds both terms, but each term is in some keyword.
    assert_eq!(titles(&index, "dropout stall"), vec!["Spindle"]);
    // One unmatched term excludes the entry.
    assert!(titles(&index, "dropout slip").is_empty());
}
