// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lint pass over a search index.
//!
//! The widget trusts the index: it never lowercases keywords and never checks
//! for duplicates. This module finds the entries that will misbehave under that
//! contract without changing anything.
//!
//! | Issue              | Effect in the widget                                |
//! |--------------------|-----------------------------------------------------|
//! | `UppercaseKeyword` | terms spanning an uppercase character never match   |
//! | `NoKeywords`       | entry only shows up for the empty query             |
//! | `DuplicateUrl`     | two results link to the same page                   |

use std::collections::HashMap;
use std::fmt;

use crate::types::SearchIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    UppercaseKeyword { keyword: String },
    NoKeywords,
    DuplicateUrl {
        url: String,
        first_entry: usize,
        first_title: String,
    },
}

/// One finding, tied to the entry position in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub entry: usize,
    pub title: String,
    pub kind: IssueKind,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry {} ({:?}): ", self.entry, self.title)?;
        match &self.kind {
            IssueKind::UppercaseKeyword { keyword } => {
                write!(f, "keyword {:?} is not lowercase", keyword)
            }
            IssueKind::NoKeywords => write!(f, "no keywords"),
            IssueKind::DuplicateUrl {
                url,
                first_entry,
                first_title,
            } => write!(
                f,
                "url {} already used by entry {} ({:?})",
                url, first_entry, first_title
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub entries: usize,
    pub issues: Vec<Issue>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Inspect every entry; issues come back ordered by entry position.
pub fn check_index(index: &SearchIndex) -> CheckReport {
    let mut issues = Vec::new();
    let mut seen: HashMap<&str, (usize, &str)> = HashMap::new();

    for (pos, entry) in index.iter().enumerate() {
        let issue = |kind| Issue {
            entry: pos,
            title: entry.title.clone(),
            kind,
        };

        if entry.keywords.is_empty() {
            issues.push(issue(IssueKind::NoKeywords));
        }

        for keyword in &entry.keywords {
            if keyword.chars().any(char::is_uppercase) {
                issues.push(issue(IssueKind::UppercaseKeyword {
                    keyword: keyword.clone(),
                }));
            }
        }

        match seen.get(entry.url.as_str()) {
            Some(&(first_entry, first_title)) => {
                issues.push(issue(IssueKind::DuplicateUrl {
                    url: entry.url.clone(),
                    first_entry,
                    first_title: first_title.to_string(),
                }));
            }
            None => {
                seen.insert(&entry.url, (pos, &entry.title));
            }
        }
    }

    tracing::debug!(
        entries = index.len(),
        issues = issues.len(),
        "checked search index"
    );

    CheckReport {
        entries: index.len(),
        issues,
    }
}
