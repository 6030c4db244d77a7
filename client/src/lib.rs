//! # client
//!
//! Leptos component library for the Rally tennis assistant chat UI.
//!
//! Widgets (`components`) are presentational: they render state handed to
//! them as props and report user intent through `Callback`s. The view-state
//! rules they follow live in `state` as plain Rust so they can be tested
//! without a DOM. `app` wires the widgets into two demo pages for the host.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(all(test, feature = "ssr"))]
mod test_html;

/// Browser entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(app::App);
}
