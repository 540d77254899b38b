//! Query normalization as seen through the public search API.

use super::common::{fixture_index, scenario_index, titles};
use tissue_search::search;

#[test]
fn test_mixed_case_query_matches_lowercase_keywords() {
    let index = fixture_index();
    assert_eq!(
        titles(&index, "CNC Spindle"),
        vec!["CNC spindle drops out mid-cut"]
    );
    assert_eq!(titles(&index, "cOoLaNt"), vec!["Coolant pump priming"]);
}

#[test]
fn test_surrounding_and_repeated_whitespace_is_ignored() {
    let index = fixture_index();
    let expected = titles(&index, "belt tension");
    assert_eq!(titles(&index, "  belt    tension  "), expected);
    assert_eq!(titles(&index, "\tbelt\ntension"), expected);
    assert_eq!(expected, vec!["Belt slip under load"]);
}

#[test]
fn test_partial_words_match_as_substrings() {
    let index = fixture_index();
    assert_eq!(
        titles(&index, "chat"),
        vec!["Lathe chatter & tool height"]
    );
    // "ool" is inside "coolant" and "tool height"
    assert_eq!(
        titles(&index, "ool"),
        vec!["Coolant pump priming", "Lathe chatter & tool height"]
    );
}

#[test]
fn test_titles_are_not_searched() {
    // "wiki" only appears in a title, never in keywords
    assert!(titles(&fixture_index(), "wiki").is_empty());
}

#[test]
fn test_repeated_terms_do_not_change_results() {
    let index = fixture_index();
    assert_eq!(titles(&index, "pump pump"), titles(&index, "pump"));
}

#[test]
fn test_byte_order_mark_alone_shows_everything() {
    let index = scenario_index();
    assert_eq!(search(&index, "\u{FEFF}").len(), index.len());
    assert_eq!(titles(&index, "\u{FEFF}slip\u{FEFF}"), vec!["B"]);
}
