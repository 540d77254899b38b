// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML for the results container.
//!
//! Each match becomes `<p><a href="{url}">{title}</a></p>`, concatenated in
//! result order. An empty result set becomes a single emphasized message.
//!
//! Markup is built with `maud`, which escapes interpolated text. Titles and
//! urls come from the index file, so by default they go through that escaping.
//! `MarkupMode::Raw` inserts them as `PreEscaped` for indexes that deliberately
//! carry inline markup in titles. For values without `& < > "` both modes
//! produce the same bytes.

use maud::{html, Markup, PreEscaped, Render};

use crate::search::ResultSet;

/// Message shown when nothing matches.
pub const NO_MATCHES_MESSAGE: &str = "No matches found.";

/// How index values are inserted into markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkupMode {
    #[default]
    Escaped,
    Raw,
}

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape_html(value: &str) -> String {
    html! { (value) }.into_string()
}

/// An index value headed for the page, escaped or not depending on the mode.
struct Value<'a> {
    mode: MarkupMode,
    text: &'a str,
}

impl Render for Value<'_> {
    fn render_to(&self, buffer: &mut String) {
        match self.mode {
            MarkupMode::Escaped => self.text.render_to(buffer),
            MarkupMode::Raw => PreEscaped(self.text).render_to(buffer),
        }
    }
}

/// Turns result sets into markup for the results container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    mode: MarkupMode,
    no_matches_message: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(MarkupMode::Escaped, NO_MATCHES_MESSAGE)
    }
}

impl Renderer {
    pub fn new(mode: MarkupMode, no_matches_message: impl Into<String>) -> Self {
        Self {
            mode,
            no_matches_message: no_matches_message.into(),
        }
    }

    pub fn mode(&self) -> MarkupMode {
        self.mode
    }

    fn value<'a>(&self, text: &'a str) -> Value<'a> {
        Value {
            mode: self.mode,
            text,
        }
    }

    /// Full replacement content for the results container.
    pub fn render(&self, results: &ResultSet<'_>) -> String {
        if results.is_empty() {
            return self.render_no_matches();
        }
        self.markup(results).into_string()
    }

    fn markup(&self, results: &ResultSet<'_>) -> Markup {
        html! {
            @for entry in results.iter() {
                p { a href=(self.value(&entry.url)) { (self.value(&entry.title)) } }
            }
        }
    }

    pub fn render_no_matches(&self) -> String {
        html! {
            p { em { (self.value(&self.no_matches_message)) } }
        }
        .into_string()
    }
}
