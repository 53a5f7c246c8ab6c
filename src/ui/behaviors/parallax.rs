use web_sys::Event;

use super::{Bindings, PageContext};
use crate::core::PageError;
use crate::core::scroll::ParallaxProfile;
use crate::ui::dom;

/// Move hero decorations at increasing speeds as the page scrolls.
pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> Result<(), PageError> {
    let config = &ctx.config;
    let blobs = dom::query_all_html(&ctx.document, &config.selectors.parallax);
    if blobs.is_empty() {
        return Ok(());
    }

    let profile = ParallaxProfile::new(config.parallax_base_speed, config.parallax_speed_step);
    let window = ctx.window.clone();
    bindings.listen(&ctx.window, "scroll", move |_: Event| {
        let scroll_y = dom::scroll_y(&window);
        for (index, blob) in blobs.iter().enumerate() {
            dom::set_style(blob, "transform", &profile.transform(index, scroll_y));
        }
    })
}
