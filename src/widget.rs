// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search widget: a loaded index plus the keystroke handler.
//!
//! A `SearchWidget` only exists once its index has been loaded, so there is no
//! "loading" state to check on every keystroke. The browser runtime builds one
//! after the fetch resolves and moves it into the input listener.
//!
//! Output goes through [`ResultsView`]. In the browser that is the `#results`
//! element; in tests it is an in-memory recorder.

use crate::config::WidgetConfig;
use crate::query::Query;
use crate::render::Renderer;
use crate::search::{filter, ResultSet};
use crate::types::SearchIndex;

/// Somewhere to put rendered results.
pub trait ResultsView {
    /// Replace everything currently shown with `markup`.
    fn replace_content(&mut self, markup: &str);
}

impl ResultsView for String {
    fn replace_content(&mut self, markup: &str) {
        self.clear();
        self.push_str(markup);
    }
}

/// Owns the index and renders matches for each input value.
#[derive(Debug, Clone)]
pub struct SearchWidget {
    index: SearchIndex,
    renderer: Renderer,
}

impl SearchWidget {
    pub fn new(index: SearchIndex, config: &WidgetConfig) -> Self {
        Self::with_renderer(index, config.renderer())
    }

    pub fn with_renderer(index: SearchIndex, renderer: Renderer) -> Self {
        tracing::info!(entries = index.len(), "search widget ready");
        Self { index, renderer }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Entries matching the raw input value.
    pub fn results(&self, raw: &str) -> ResultSet<'_> {
        filter(&self.index, &Query::parse(raw))
    }

    /// Markup for the raw input value.
    pub fn render(&self, raw: &str) -> String {
        self.renderer.render(&self.results(raw))
    }

    /// Run one keystroke: filter on `raw` and replace the view's content.
    pub fn handle_input<V: ResultsView + ?Sized>(&self, raw: &str, view: &mut V) {
        let results = self.results(raw);
        tracing::trace!(query = raw, matches = results.len(), "input changed");
        view.replace_content(&self.renderer.render(&results));
    }
}
