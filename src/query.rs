// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization.
//!
//! The raw input value is lowercased, trimmed and split on runs of whitespace.
//! Empty tokens never survive, so a blank or all-whitespace input yields a
//! query with no terms, which matches every entry.
//!
//! "Whitespace" is the set browsers use for `String.prototype.trim` and `\s`:
//! Unicode `White_Space` plus U+FEFF (zero width no-break space), minus U+0085
//! (next line). Pasted text often carries a stray BOM; it separates terms
//! instead of becoming part of one.

/// True for characters that separate query terms.
pub fn is_separator(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

/// Normalized query terms, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        let terms = raw
            .to_lowercase()
            .split(is_separator)
            .filter(|term| !term.is_empty())
            .map(str::to_owned)
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// True when there is nothing to filter on.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
