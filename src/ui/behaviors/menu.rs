use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, Node};

use super::{Bindings, PageContext};
use crate::core::{MenuEvent, MenuState, PageError};
use crate::ui::dom;

/// Menu state plus the two elements that reflect it
#[derive(Clone)]
struct MobileMenu {
    state: Rc<Cell<MenuState>>,
    toggle: HtmlElement,
    panel: HtmlElement,
    class: Rc<str>,
}

impl MobileMenu {
    fn dispatch(&self, event: MenuEvent) {
        let next = self.state.get().apply(event);
        self.state.set(next);
        let open = next.is_open();
        dom::set_class(&self.toggle, &self.class, open);
        dom::set_class(&self.panel, &self.class, open);
    }

    fn contains(&self, target: Option<&Node>) -> (bool, bool) {
        (self.toggle.contains(target), self.panel.contains(target))
    }
}

/// Hamburger toggle, close on link/outside click and on Escape.
pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> Result<(), PageError> {
    let selectors = &ctx.config.selectors;
    let toggle = dom::html_by_id(&ctx.document, &selectors.menu_toggle_id);
    let panel = dom::html_by_id(&ctx.document, &selectors.mobile_menu_id);
    let (Some(toggle), Some(panel)) = (toggle, panel) else {
        tracing::debug!("Mobile menu markup missing, skipping menu controller");
        return Ok(());
    };

    let menu = MobileMenu {
        state: Rc::new(Cell::new(MenuState::default())),
        toggle: toggle.clone(),
        panel,
        class: Rc::from(ctx.config.classes.active.as_str()),
    };

    let m = menu.clone();
    bindings.listen(&toggle, "click", move |_: MouseEvent| m.dispatch(MenuEvent::TriggerClick))?;

    for link in dom::query_all(&ctx.document, &selectors.mobile_links) {
        let m = menu.clone();
        bindings.listen(&link, "click", move |_: MouseEvent| m.dispatch(MenuEvent::LinkClick))?;
    }

    let m = menu.clone();
    bindings.listen(&ctx.document, "click", move |event: MouseEvent| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let (in_trigger, in_panel) = m.contains(target.as_ref());
        if let Some(outside) = MenuEvent::from_document_click(in_trigger, in_panel) {
            m.dispatch(outside);
        }
    })?;

    bindings.listen(&ctx.document, "keydown", move |event: KeyboardEvent| {
        if let Some(escape) = MenuEvent::from_key(&event.key()) {
            menu.dispatch(escape);
        }
    })
}
