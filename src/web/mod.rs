//! Browser wiring (WASM only).
//!
//! Resolves the configured DOM collaborators once, attaches the scroll
//! effects controller, and spawns the three independent scholar fetch
//! tasks. Everything tolerates missing elements; nothing here ever shows
//! a user-visible error.

mod page;
mod scholar;
mod scroll;

use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::config::PageConfig;
use page::PageHandles;

/// Wire the page with the default configuration.
///
/// Call once after the document has loaded. Safe on a page missing any
/// (or all) of the collaborators.
///
/// # Errors
///
/// Fails only when there is no global `window`/`document` or the scroll
/// listener cannot be registered.
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    init_diagnostics();
    run(&PageConfig::default())
}

/// As [`boot`], with a JSON configuration override (partial overrides
/// keep the remaining defaults).
///
/// # Errors
///
/// Additionally fails when the override is not valid JSON.
#[wasm_bindgen]
pub fn boot_with_config(json: &str) -> Result<(), JsValue> {
    init_diagnostics();
    let config =
        PageConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    run(&config)
}

fn init_diagnostics() {
    console_error_panic_hook::set_once();
    // Already-installed logger means boot ran twice; keep going.
    let _ = console_log::init_with_level(log::Level::Info);
}

fn run(config: &PageConfig) -> Result<(), JsValue> {
    let window =
        web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document on window"))?;

    let handles = Rc::new(PageHandles::resolve(&document, &config.selectors));

    scroll::attach(&window, &handles, &config.scroll)?;

    // Three uncoordinated fetches, each reading the document itself; a
    // slow or failed one never blocks the others.
    {
        let window = window.clone();
        let handles = Rc::clone(&handles);
        let data = config.data.clone();
        spawn_local(async move {
            scholar::update_stats(&window, &handles, &data).await;
        });
    }
    {
        let window = window.clone();
        let document = document.clone();
        let handles = Rc::clone(&handles);
        let data = config.data.clone();
        spawn_local(async move {
            scholar::update_recent_publications(&window, &document, &handles, &data).await;
        });
    }
    {
        let window = window.clone();
        let document = document.clone();
        let handles = Rc::clone(&handles);
        let data = config.data.clone();
        spawn_local(async move {
            scholar::update_all_publications(&window, &document, &handles, &data).await;
        });
    }

    Ok(())
}
