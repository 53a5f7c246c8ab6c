//! MovianTech - marketing site interactions
//!
//! Scroll effects, the mobile menu, smooth anchor scrolling, reveal animations,
//! button ripples, hero parallax and price counters for the static MovianTech
//! pages, compiled to WebAssembly.
//!
//! The platform-independent rules live in [`core`]; the browser bindings live in
//! `ui` and are only compiled with the `hydrate` feature.

pub mod app;
pub mod core;
#[cfg(feature = "hydrate")]
pub mod ui;

/// Entry point for static pages.
///
/// Binds every page behavior once the document has been parsed and returns a
/// handle whose `teardown()` unbinds them again.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init() -> Result<ui::PageHandle, wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    ui::PageHandle::install_when_ready().map_err(Into::into)
}
