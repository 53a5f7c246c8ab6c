use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};

use super::{Bindings, PageContext};
use crate::core::PageError;
use crate::core::scroll::{anchor_fragment, anchor_scroll_top};
use crate::ui::dom;

/// Smooth-scroll in-page anchors, leaving the target below the fixed header.
///
/// Targets are resolved by id at click time; a bare `#` or a missing target
/// keeps the browser's default navigation.
pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> Result<(), PageError> {
    for link in dom::query_all(&ctx.document, &ctx.config.selectors.anchors) {
        let window = ctx.window.clone();
        let document = ctx.document.clone();
        let header_id = ctx.config.selectors.header_id.clone();
        let anchor = link.clone();

        bindings.listen(&link, "click", move |event: MouseEvent| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(fragment) = anchor_fragment(&href) else {
                return;
            };
            let Some(target) = dom::html_by_id(&document, fragment) else {
                return;
            };

            event.prevent_default();

            let top = anchor_scroll_top(
                target.offset_top() as f64,
                dom::header_height(&document, &header_id),
            );
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(())
}
