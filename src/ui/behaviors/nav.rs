use web_sys::Event;

use super::{Bindings, PageContext};
use crate::core::scroll::{SectionSpan, active_section, link_targets_section, nav_probe};
use crate::core::{Debouncer, PageError};
use crate::ui::dom;

/// Highlight the navigation link of the section under the header, debounced.
pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> Result<(), PageError> {
    let config = &ctx.config;
    let sections = dom::query_all_html(&ctx.document, &config.selectors.sections);
    let links = dom::query_all(&ctx.document, &config.selectors.nav_links);
    if sections.is_empty() || links.is_empty() {
        tracing::debug!(
            sections = sections.len(),
            links = links.len(),
            "Nothing to highlight"
        );
        return Ok(());
    }

    let window = ctx.window.clone();
    let document = ctx.document.clone();
    let header_id = config.selectors.header_id.clone();
    let probe_offset = config.nav_probe_offset;
    let active_class = config.classes.active.clone();

    let highlight = move || {
        // Section geometry changes with layout, so measure on every pass.
        let spans: Vec<SectionSpan> = sections
            .iter()
            .map(|section| {
                SectionSpan::new(
                    section.id(),
                    section.offset_top() as f64,
                    section.offset_height() as f64,
                )
            })
            .collect();
        let probe = nav_probe(
            dom::scroll_y(&window),
            dom::header_height(&document, &header_id),
            probe_offset,
        );
        let active = active_section(&spans, probe);

        for link in &links {
            let href = link.get_attribute("href").unwrap_or_default();
            let is_active = active.is_some_and(|id| link_targets_section(&href, id));
            dom::set_class(link, &active_class, is_active);
        }
    };

    let debouncer = Debouncer::new(ctx.scheduler, config.nav_debounce(), highlight);
    bindings.listen(&ctx.window, "scroll", move |_: Event| debouncer.call())
}
