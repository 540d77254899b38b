// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword filtering.
//!
//! An entry matches when every query term is a substring of at least one of
//! its keywords. Terms are checked independently, so "cnc spindle" matches an
//! entry with keywords `["cnc dropout", "spindle"]` even though no single
//! keyword holds both words.
//!
//! There is no ranking. Matches come back in index order, and a query with no
//! terms matches everything (vacuous truth over "every term").

use crate::query::Query;
use crate::types::{IndexEntry, SearchIndex};

/// Does `entry` satisfy every term of `query`?
#[inline]
pub fn matches(entry: &IndexEntry, query: &Query) -> bool {
    query.terms().iter().all(|term| {
        entry
            .keywords
            .iter()
            .any(|keyword| keyword.contains(term.as_str()))
    })
}

/// Entries of `index` matching `query`, in index order.
pub fn filter<'a>(index: &'a SearchIndex, query: &Query) -> ResultSet<'a> {
    let entries = index.iter().filter(|entry| matches(entry, query)).collect();
    ResultSet { entries }
}

/// Normalize `raw` and filter `index` with it.
pub fn search<'a>(index: &'a SearchIndex, raw: &str) -> ResultSet<'a> {
    filter(index, &Query::parse(raw))
}

/// Matching entries for one keystroke. Borrows from the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet<'a> {
    entries: Vec<&'a IndexEntry>,
}

impl<'a> ResultSet<'a> {
    pub fn entries(&self) -> &[&'a IndexEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a IndexEntry> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Titles in result order.
    pub fn titles(&self) -> Vec<&'a str> {
        self.entries.iter().map(|e| e.title.as_str()).collect()
    }
}

impl<'a> IntoIterator for ResultSet<'a> {
    type Item = &'a IndexEntry;
    type IntoIter = std::vec::IntoIter<&'a IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
