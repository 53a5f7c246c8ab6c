use web_sys::MouseEvent;

use super::{Bindings, PageContext};
use crate::core::PageError;
use crate::core::ripple::{Ripple, keyframes_css};
use crate::ui::dom::{self, js_error};

/// Inject the ripple keyframes and spawn an overlay on every button click.
pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> Result<(), PageError> {
    inject_keyframes(ctx, bindings)?;

    let lifetime = ctx.config.ripple_duration();
    for button in dom::query_all_html(&ctx.document, &ctx.config.selectors.buttons) {
        let document = ctx.document.clone();
        let scheduler = ctx.scheduler;
        let host = button.clone();

        bindings.listen(&button, "click", move |event: MouseEvent| {
            let rect = host.get_bounding_client_rect();
            let ripple = Ripple::at_click(
                event.client_x() as f64,
                event.client_y() as f64,
                rect.left(),
                rect.top(),
                lifetime,
            );

            let Ok(overlay) = document.create_element("span") else {
                return;
            };
            if overlay.set_attribute("style", &ripple.overlay_style()).is_err() {
                return;
            }

            dom::set_style(&host, "position", "relative");
            dom::set_style(&host, "overflow", "hidden");
            if host.append_child(&overlay).is_err() {
                return;
            }

            ripple.schedule_removal(&scheduler, move || overlay.remove());
        })?;
    }
    Ok(())
}

fn inject_keyframes(ctx: &PageContext, bindings: &mut Bindings) -> Result<(), PageError> {
    let Some(head) = ctx.document.head() else {
        tracing::debug!("Document has no <head>, ripple keyframes not injected");
        return Ok(());
    };
    let style = ctx.document.create_element("style").map_err(js_error)?;
    style.set_text_content(Some(&keyframes_css()));
    head.append_child(&style).map_err(js_error)?;
    bindings.keep_injected(style);
    Ok(())
}
