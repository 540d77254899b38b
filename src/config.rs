// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget configuration.
//!
//! Every field has a default, so pages that follow the usual layout
//! (`#searchbox`, `#results`, index at `/search_index.json`) pass nothing.
//! From JavaScript the object uses camelCase keys:
//!
//! ```js
//! await runSearch({ indexUrl: "/docs/search_index.json", placeholder: "Search docs" });
//! ```

use serde::Deserialize;

use crate::error::{Result, WidgetError};
use crate::render::{MarkupMode, Renderer};

pub const DEFAULT_INDEX_URL: &str = "/search_index.json";
pub const DEFAULT_SEARCHBOX_ID: &str = "searchbox";
pub const DEFAULT_RESULTS_ID: &str = "results";
pub const DEFAULT_PLACEHOLDER: &str = "Search pages…";
pub const DEFAULT_INPUT_STYLE: &str = "width: 100%; padding: 0.5em;";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct WidgetConfig {
    /// Path or URL of the index JSON.
    pub index_url: String,
    /// Container the input is appended to.
    pub searchbox_id: String,
    /// Container whose content is replaced on every keystroke.
    pub results_id: String,
    pub placeholder: String,
    /// Inline `style` attribute for the input.
    pub input_style: String,
    pub no_matches_message: String,
    /// Insert titles and urls without escaping.
    pub raw_markup: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            searchbox_id: DEFAULT_SEARCHBOX_ID.to_string(),
            results_id: DEFAULT_RESULTS_ID.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            input_style: DEFAULT_INPUT_STYLE.to_string(),
            no_matches_message: crate::render::NO_MATCHES_MESSAGE.to_string(),
            raw_markup: false,
        }
    }
}

impl WidgetConfig {
    /// Parse a JSON configuration object. Missing keys take defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| WidgetError::Config(e.to_string()))
    }

    pub fn markup_mode(&self) -> MarkupMode {
        if self.raw_markup {
            MarkupMode::Raw
        } else {
            MarkupMode::Escaped
        }
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.markup_mode(), self.no_matches_message.clone())
    }
}
