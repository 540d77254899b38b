// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search widget.
//!
//! This is the browser-facing API. One call wires up the whole widget:
//!
//! ```js
//! import init, { runSearch } from "./tissue_search.js";
//!
//! await init();
//! await runSearch();                                  // defaults
//! await runSearch({ placeholder: "Search docs" }, (message) => showBanner(message));
//! ```
//!
//! `runSearch` fetches the index, appends an `<input>` to `#searchbox` and
//! re-renders `#results` on every `input` event. The fetch is the only await;
//! after it resolves everything runs synchronously inside the event handler.
//!
//! If loading fails the promise rejects with the error message, the message is
//! written to `console.error`, and the optional `onError` callback receives it.
//! The input is never attached in that case. An exception thrown by `onError`
//! is logged as a console warning and does not change the rejection.
//!
//! `SearchWidget` is also exported for pages that want to drive rendering
//! themselves.

use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, HtmlInputElement, Response, Window};

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::runtime::{check_status, find_containers};
use crate::types::SearchIndex;
use crate::widget::{ResultsView, SearchWidget};

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl ResultsView for Element {
    fn replace_content(&mut self, markup: &str) {
        self.set_inner_html(markup);
    }
}

/// Fetch the index, mount the input and start filtering.
///
/// - `config`: optional object, see `WidgetConfig` (camelCase keys)
/// - `on_error`: optional callback receiving the failure message
#[wasm_bindgen(js_name = "runSearch")]
pub async fn run_search(config: JsValue, on_error: Option<Function>) -> Result<(), JsValue> {
    match mount(config).await {
        Ok(()) => Ok(()),
        Err(err) => {
            let message = err.to_string();
            tracing::error!(%message, "search widget failed to load");
            web_sys::console::error_1(&JsValue::from_str(&message));
            if let Some(callback) = on_error {
                if let Err(thrown) = callback.call1(&JsValue::NULL, &JsValue::from_str(&message)) {
                    let thrown = js_error_message(&thrown);
                    tracing::warn!(%thrown, "onError callback threw");
                    web_sys::console::warn_2(
                        &JsValue::from_str("onError callback threw:"),
                        &JsValue::from_str(&thrown),
                    );
                }
            }
            Err(err.into())
        }
    }
}

async fn mount(config: JsValue) -> Result<(), WidgetError> {
    let config = parse_config(config)?;
    let window = web_sys::window().ok_or_else(|| WidgetError::Dom("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| WidgetError::Dom("window has no document".into()))?;

    let index = fetch_index(&window, &config.index_url).await?;

    let (searchbox, mut results) =
        find_containers(&config, |id| document.get_element_by_id(id))?;
    let input = create_input(&document, &config)?;
    searchbox.append_child(&input).map_err(dom_error)?;

    let widget = SearchWidget::new(index, &config);
    let source = input.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        widget.handle_input(&source.value(), &mut results);
    });
    input
        .add_event_listener_with_callback("input", handler.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    // The listener lives as long as the page.
    handler.forget();

    Ok(())
}

fn parse_config(config: JsValue) -> Result<WidgetConfig, WidgetError> {
    if config.is_undefined() || config.is_null() {
        return Ok(WidgetConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| WidgetError::Config(e.to_string()))
}

async fn fetch_index(window: &Window, url: &str) -> Result<SearchIndex, WidgetError> {
    let fetch_error = |value: JsValue| WidgetError::Fetch {
        url: url.to_string(),
        reason: js_error_message(&value),
    };

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| WidgetError::Dom("fetch did not resolve to a Response".into()))?;

    check_status(url, response.status())?;

    let body = JsFuture::from(response.text().map_err(fetch_error)?)
        .await
        .map_err(fetch_error)?;
    let text = body
        .as_string()
        .ok_or_else(|| WidgetError::Dom("response body is not text".into()))?;

    SearchIndex::from_json(&text)
}

fn create_input(
    document: &Document,
    config: &WidgetConfig,
) -> Result<HtmlInputElement, WidgetError> {
    let input: HtmlInputElement = document
        .create_element("input")
        .map_err(dom_error)?
        .dyn_into()
        .map_err(|_| WidgetError::Dom("created element is not an <input>".into()))?;
    input.set_type("text");
    input.set_placeholder(&config.placeholder);
    input
        .set_attribute("style", &config.input_style)
        .map_err(dom_error)?;
    Ok(input)
}

fn dom_error(value: JsValue) -> WidgetError {
    WidgetError::Dom(js_error_message(&value))
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// WASM-accessible widget for pages that manage their own input.
///
/// ```js
/// const widget = new SearchWidget(indexJson);
/// results.innerHTML = widget.render(input.value);
/// ```
#[wasm_bindgen(js_name = "SearchWidget")]
pub struct JsSearchWidget {
    inner: SearchWidget,
}

#[wasm_bindgen(js_class = "SearchWidget")]
impl JsSearchWidget {
    /// Create a widget from index JSON text and an optional config object.
    #[wasm_bindgen(constructor)]
    pub fn new(index_json: &str, config: JsValue) -> Result<JsSearchWidget, JsValue> {
        let config = parse_config(config)?;
        let index = SearchIndex::from_json(index_json)?;
        Ok(JsSearchWidget {
            inner: SearchWidget::new(index, &config),
        })
    }

    /// Number of entries in the index.
    #[wasm_bindgen(js_name = "entryCount")]
    pub fn entry_count(&self) -> usize {
        self.inner.index().len()
    }

    /// Number of entries matching `query`.
    #[wasm_bindgen(js_name = "matchCount")]
    pub fn match_count(&self, query: &str) -> usize {
        self.inner.results(query).len()
    }

    /// Results markup for `query`.
    #[wasm_bindgen]
    pub fn render(&self, query: &str) -> String {
        self.inner.render(query)
    }
}
