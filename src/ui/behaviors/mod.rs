//! One module per page behavior.
//!
//! Each behavior looks up its elements, skips itself when they are absent, and
//! registers whatever it binds with the [`Bindings`] so the controller can
//! release it later.

use std::rc::Rc;

use web_sys::{Document, Element, EventTarget, Window};

use crate::core::{PageConfig, PageError};
use crate::ui::events::EventBinding;
use crate::ui::observer::VisibilityObserver;
use crate::ui::timers::BrowserScheduler;

pub mod anchors;
pub mod counter;
pub mod header;
pub mod icons;
pub mod menu;
pub mod nav;
pub mod parallax;
pub mod preload;
pub mod reveal;
pub mod ripple;

/// Shared handles every behavior needs
#[derive(Clone)]
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub config: Rc<PageConfig>,
    pub scheduler: BrowserScheduler,
}

/// Everything a behavior leaves attached to the page
#[derive(Default)]
pub struct Bindings {
    listeners: Vec<EventBinding>,
    observers: Vec<VisibilityObserver>,
    injected: Vec<Element>,
}

impl Bindings {
    pub fn listen<E, F>(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: F,
    ) -> Result<(), PageError>
    where
        E: wasm_bindgen::JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        self.listeners.push(EventBinding::bind(target, event, handler)?);
        Ok(())
    }

    pub fn keep_observer(&mut self, observer: VisibilityObserver) {
        self.observers.push(observer);
    }

    /// Track a node added to the document so it is removed on teardown
    pub fn keep_injected(&mut self, element: Element) {
        self.injected.push(element);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for Bindings {
    fn drop(&mut self) {
        self.listeners.clear();
        self.observers.clear();
        for element in self.injected.drain(..) {
            element.remove();
        }
    }
}

/// Installs one behavior
pub type InstallFn = fn(&PageContext, &mut Bindings) -> Result<(), PageError>;

/// Every behavior in installation order
pub const BEHAVIORS: &[(&str, InstallFn)] = &[
    ("icons", icons::install),
    ("header", header::install),
    ("menu", menu::install),
    ("anchors", anchors::install),
    ("reveal", reveal::install),
    ("nav", nav::install),
    ("ripple", ripple::install),
    ("parallax", parallax::install),
    ("counter", counter::install),
    ("preload", preload::install),
];
