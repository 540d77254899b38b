// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser runtime.
//!
//! Everything under `wasm` talks to the DOM. The decisions it makes before
//! touching the page (which HTTP statuses count as a loaded index, whether
//! both containers exist) live here as plain functions so they run natively.

use crate::config::WidgetConfig;
use crate::error::WidgetError;

#[cfg(feature = "wasm")]
pub mod wasm;

/// Succeeds for 2xx statuses, the same range as `Response.ok`.
#[cfg_attr(not(feature = "wasm"), allow(dead_code))]
pub(crate) fn check_status(url: &str, status: u16) -> Result<(), WidgetError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(WidgetError::Status {
            url: url.to_string(),
            status,
        })
    }
}

/// Resolve the searchbox and results containers, in that order.
///
/// Both are looked up before either is used, so a page missing one of them is
/// left untouched.
#[cfg_attr(not(feature = "wasm"), allow(dead_code))]
pub(crate) fn find_containers<E>(
    config: &WidgetConfig,
    mut lookup: impl FnMut(&str) -> Option<E>,
) -> Result<(E, E), WidgetError> {
    let searchbox = lookup(&config.searchbox_id)
        .ok_or_else(|| WidgetError::MissingElement(config.searchbox_id.clone()))?;
    let results = lookup(&config.results_id)
        .ok_or_else(|| WidgetError::MissingElement(config.results_id.clone()))?;
    Ok((searchbox, results))
}
