// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the keystroke path.
//!
//! Arbitrary indexes and arbitrary input strings go through parse, filter and
//! render. Nothing may panic, results must keep index order, and escaped
//! output must never carry a raw `<` from an entry's title or url.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tissue_search::{is_separator, search, IndexEntry, Query, SearchIndex, SearchWidget, WidgetConfig};

#[derive(Debug, Arbitrary)]
struct SearchInput {
    entries: Vec<(Vec<String>, String, String)>,
    query: String,
    raw_markup: bool,
}

fuzz_target!(|input: SearchInput| {
    // Cap sizes to avoid timeouts
    let index: SearchIndex = input
        .entries
        .into_iter()
        .take(64)
        .map(|(keywords, url, title)| IndexEntry {
            keywords: keywords.into_iter().take(16).collect(),
            url,
            title,
        })
        .collect();
    let query_str = input.query.chars().take(200).collect::<String>();

    // INVARIANT 1: terms are lowercase, non-empty, separator-free
    let query = Query::parse(&query_str);
    for term in query.terms() {
        assert!(!term.is_empty());
        assert!(!term.chars().any(is_separator));
        assert_eq!(term, &term.to_lowercase());
    }

    // INVARIANT 2: every result satisfies the rule, in index order
    let results = search(&index, &query_str);
    let mut last = None;
    for entry in results.iter() {
        for term in query.terms() {
            assert!(entry.keywords.iter().any(|k| k.contains(term.as_str())));
        }
        let pos = index
            .iter()
            .position(|e| std::ptr::eq(e, entry))
            .expect("result must come from the index");
        assert!(last.map_or(true, |prev| prev < pos), "results out of index order");
        last = Some(pos);
    }

    // INVARIANT 3: empty query returns the whole index
    if query.is_empty() {
        assert_eq!(results.len(), index.len());
    }

    // INVARIANT 4: rendering never panics; escaped output has one `<p>` per result
    let config = WidgetConfig {
        raw_markup: input.raw_markup,
        ..WidgetConfig::default()
    };
    let widget = SearchWidget::new(index, &config);
    let html = widget.render(&query_str);
    if !input.raw_markup {
        let expected = widget.results(&query_str).len().max(1);
        assert_eq!(html.matches("<p>").count(), expected);
    }
});
