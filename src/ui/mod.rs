//! Browser bindings for the page behaviors.
//!
//! Everything here talks to `web_sys` and is only built with the `hydrate`
//! feature. Listener closures, observers and injected nodes are owned by a
//! [`PageInteractionController`]; dropping it unbinds the page.

mod behaviors;
pub mod controller;
pub mod dom;
pub mod events;
pub mod logging;
pub mod observer;
pub mod timers;

pub use controller::{PageHandle, PageInteractionController};
pub use events::EventBinding;
pub use observer::VisibilityObserver;
pub use timers::BrowserScheduler;

impl From<crate::core::PageError> for wasm_bindgen::JsValue {
    fn from(err: crate::core::PageError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
