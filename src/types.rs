// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search index as served to the page.
//!
//! The index is a flat JSON array. Each element names a page (`title`, `url`)
//! and the keywords it should be found under:
//!
//! ```json
//! [
//!   { "keywords": ["cnc dropout", "spindle"], "url": "/cnc/", "title": "CNC dropouts" },
//!   { "keywords": ["belt slip"], "url": "/belts/", "title": "Belt slip" }
//! ]
//! ```
//!
//! # Keyword case
//!
//! Keywords are expected to be lowercase already. Queries are lowercased before
//! matching but keywords are used as given, so a term covering an uppercase
//! character never matches. Lowercase parts of the same keyword still do:
//! `"CNC mill"` is found by `mill` but not by `cnc`. `check_index` reports
//! those keywords.
//!
//! Fields the widget does not use are ignored, so an index that also carries
//! page descriptions or images loads unchanged.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WidgetError};

/// One searchable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Lowercase match targets. A keyword may be a phrase ("cnc dropout").
    pub keywords: Vec<String>,
    /// Link target for the result.
    pub url: String,
    /// Link text for the result.
    pub title: String,
}

/// Ordered, immutable list of entries loaded once per page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    pub fn new(entries: Vec<IndexEntry>) -> Self {
        Self { entries }
    }

    /// Parse the JSON array served at the index endpoint.
    ///
    /// An entry missing `keywords`, `url` or `title` rejects the whole index.
    pub fn from_json(text: &str) -> Result<Self> {
        let index: SearchIndex = serde_json::from_str(text)?;
        tracing::debug!(entries = index.len(), "parsed search index");
        Ok(index)
    }

    /// Read and parse an index file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| WidgetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<IndexEntry> for SearchIndex {
    fn from_iter<I: IntoIterator<Item = IndexEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
