//! Live keyword search for static sites.
//!
//! The page serves a precomputed JSON index. The widget fetches it once, adds a
//! text input to the page, and on every keystroke shows the entries whose
//! keywords contain all of the typed terms.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│  query.rs    │────▶│  search.rs  │────▶│  render.rs  │
//! │ (IndexEntry,│     │  (Query)     │     │ (filter,    │     │ (Renderer,  │
//! │ SearchIndex)│     │              │     │  ResultSet) │     │ escape_html)│
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!        │                                        │                    │
//!        ▼                                        ▼                    ▼
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   widget.rs (SearchWidget, ResultsView)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//!                                     │
//!                                     ▼
//!                    runtime/wasm.rs (runSearch, DOM binding)
//! ```
//!
//! The matching rule: an entry is shown iff every query term is a substring of
//! at least one of its keywords. An empty query shows every entry. Results keep
//! index order.
//!
//! # Usage
//!
//! ```
//! use tissue_search::{SearchIndex, SearchWidget, WidgetConfig};
//!
//! let index = SearchIndex::from_json(
//!     r#"[{"keywords": ["cnc dropout"], "url": "/a", "title": "A"}]"#,
//! )?;
//! let widget = SearchWidget::new(index, &WidgetConfig::default());
//!
//! let mut results = String::new();
//! widget.handle_input("CNC", &mut results);
//! assert_eq!(results, r#"<p><a href="/a">A</a></p>"#);
//! # Ok::<(), tissue_search::WidgetError>(())
//! ```
//!
//! In the browser, build with `--features wasm` and call `runSearch()`.

pub mod check;
pub mod config;
pub mod error;
mod query;
pub mod render;
pub mod runtime;
mod search;
pub mod testing;
mod types;
mod widget;

pub use check::{check_index, CheckReport, Issue, IssueKind};
pub use config::WidgetConfig;
pub use error::WidgetError;
pub use query::{is_separator, Query};
pub use render::{escape_html, MarkupMode, Renderer, NO_MATCHES_MESSAGE};
pub use search::{filter, matches, search, ResultSet};
pub use types::{IndexEntry, SearchIndex};
pub use widget::{ResultsView, SearchWidget};
