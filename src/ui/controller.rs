//! Page interaction controller
//!
//! Installs every behavior against the current document and owns what they
//! bind. Behaviors whose markup is missing are skipped; a behavior that fails
//! is logged and the others still install.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Event};

use crate::core::config::CONFIG_ELEMENT_ID;
use crate::core::{PageConfig, PageError};
use crate::ui::behaviors::{BEHAVIORS, Bindings, PageContext};
use crate::ui::events::EventBinding;
use crate::ui::timers::BrowserScheduler;
use crate::ui::{dom, logging};

/// Live page behaviors. Dropping the controller unbinds all of them.
pub struct PageInteractionController {
    bindings: Bindings,
}

impl PageInteractionController {
    /// Bind every behavior using `config`.
    ///
    /// Fails only when there is no `window` or `document`.
    pub fn install(config: PageConfig) -> Result<Self, PageError> {
        logging::init(config.log_level());
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let ctx = PageContext {
            window,
            document,
            config: Rc::new(config),
            scheduler: BrowserScheduler,
        };

        let mut bindings = Bindings::default();
        for (name, install) in BEHAVIORS {
            if let Err(err) = install(&ctx, &mut bindings) {
                tracing::warn!(behavior = *name, error = %err, "Behavior skipped");
            }
        }

        tracing::info!(
            listeners = bindings.listener_count(),
            "Page interactions initialized"
        );
        Ok(Self { bindings })
    }

    /// Install with the overrides found in the page's configuration block.
    pub fn install_from_page() -> Result<Self, PageError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let config = match read_page_config(&document) {
            Ok(config) => config,
            Err(err) => {
                logging::init(tracing::Level::INFO);
                tracing::warn!(error = %err, "Ignoring page configuration block");
                PageConfig::default()
            }
        };
        Self::install(config)
    }

    /// Unbind everything. Equivalent to dropping the controller.
    pub fn teardown(self) {
        tracing::debug!("Page interactions torn down");
        drop(self.bindings);
    }
}

/// Configuration from the inline JSON block; defaults when there is none
pub fn read_page_config(document: &Document) -> Result<PageConfig, PageError> {
    let Some(block) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(PageConfig::default());
    };
    PageConfig::from_json(&block.text_content().unwrap_or_default())
}

/// Handle returned to JavaScript by `init()`.
#[wasm_bindgen]
pub struct PageHandle {
    controller: Rc<RefCell<Option<PageInteractionController>>>,
    ready_listener: Option<EventBinding>,
}

impl PageHandle {
    /// Install now, or on `DOMContentLoaded` if the document is still loading.
    pub fn install_when_ready() -> Result<Self, PageError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let controller = Rc::new(RefCell::new(None));

        if document.ready_state() != "loading" {
            *controller.borrow_mut() = Some(PageInteractionController::install_from_page()?);
            return Ok(Self {
                controller,
                ready_listener: None,
            });
        }

        let slot = controller.clone();
        let ready_listener = EventBinding::bind(&document, "DOMContentLoaded", move |_: Event| {
            if slot.borrow().is_some() {
                return;
            }
            match PageInteractionController::install_from_page() {
                Ok(installed) => *slot.borrow_mut() = Some(installed),
                Err(err) => tracing::error!(error = %err, "Page interactions unavailable"),
            }
        })?;

        Ok(Self {
            controller,
            ready_listener: Some(ready_listener),
        })
    }
}

#[wasm_bindgen]
impl PageHandle {
    /// Whether the behaviors are currently bound
    #[wasm_bindgen(getter)]
    pub fn installed(&self) -> bool {
        self.controller.borrow().is_some()
    }

    /// Unbind every behavior and remove injected nodes
    pub fn teardown(&mut self) {
        self.ready_listener.take();
        if let Some(controller) = self.controller.borrow_mut().take() {
            controller.teardown();
        }
    }
}
