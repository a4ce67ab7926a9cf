//! # client
//!
//! Leptos + WASM frontend shell for the GW2 Addon Manager UI.
//!
//! The `state` modules hold the framework-free core: the consent-gated
//! store, the notification queue, the tool panel slot and the controls
//! facade that composes them. `util`, `components` and `pages` layer the
//! preferences reader, theming and rendering on top.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
