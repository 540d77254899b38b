// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Everything that can stop the widget from becoming interactive.
//!
//! Only loading can fail. Once a [`SearchWidget`](crate::SearchWidget) exists,
//! filtering and rendering are total: an empty query shows the whole index and
//! an empty result set shows the "no matches" message, neither is an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading the index or mounting the widget.
#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("fetching {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("invalid search index JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no element with id `{0}` in the page")]
    MissingElement(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("invalid widget configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
