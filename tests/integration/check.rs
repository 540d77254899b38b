//! Index lint report.

use super::common::{fixture_index, make_entry};
use tissue_search::{check_index, search, IssueKind, SearchIndex};

#[test]
fn test_fixture_is_clean() {
    let report = check_index(&fixture_index());
    assert!(report.is_clean(), "unexpected issues: {:?}", report.issues);
    assert_eq!(report.entries, 5);
}

#[test]
fn test_uppercase_characters_are_reported_and_cannot_be_matched() {
    let index = SearchIndex::new(vec![make_entry("Mill", "/mill/", &["CNC mill"])]);

    // Only the uppercase part is out of reach...
    assert!(search(&index, "cnc").is_empty());
    assert_eq!(search(&index, "mill").len(), 1);

    // ...and the check flags the keyword either way.
    let report = check_index(&index);
    assert_eq!(
        report.issues[0].kind,
        IssueKind::UppercaseKeyword {
            keyword: "CNC mill".to_string()
        }
    );
}

#[test]
fn test_every_issue_kind_in_one_index() {
    let index = SearchIndex::new(vec![
        make_entry("One", "/x/", &["one"]),
        make_entry("Two", "/y/", &[]),
        make_entry("Three", "/x/", &["THREE"]),
    ]);
    let report = check_index(&index);
    let kinds: Vec<&IssueKind> = report.issues.iter().map(|i| &i.kind).collect();
    assert_eq!(kinds.len(), 3);
    assert_eq!(kinds[0], &IssueKind::NoKeywords);
    assert!(matches!(kinds[1], IssueKind::UppercaseKeyword { .. }));
    assert!(matches!(kinds[2], IssueKind::DuplicateUrl { first_entry: 0, .. }));
}
