use web_sys::Event;

use super::{Bindings, PageContext};
use crate::core::scroll::is_header_scrolled;
use crate::core::{Debouncer, PageError};
use crate::ui::dom;

/// Toggle the header's scrolled class from the scroll offset, debounced.
pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> Result<(), PageError> {
    let config = &ctx.config;
    let Some(header) = dom::html_by_id(&ctx.document, &config.selectors.header_id) else {
        tracing::debug!(id = %config.selectors.header_id, "No header, skipping scroll effect");
        return Ok(());
    };

    let window = ctx.window.clone();
    let threshold = config.header_scroll_threshold;
    let class = config.classes.scrolled.clone();
    let update = move || {
        let scrolled = is_header_scrolled(dom::scroll_y(&window), threshold);
        dom::set_class(&header, &class, scrolled);
    };

    // Page may load already scrolled (reload, deep link)
    update();

    let debouncer = Debouncer::new(ctx.scheduler, config.header_debounce(), update);
    bindings.listen(&ctx.window, "scroll", move |_: Event| debouncer.call())
}
