use web_sys::HtmlImageElement;

use super::{Bindings, PageContext};
use crate::core::PageError;
use crate::ui::dom::js_error;

/// Warm the cache for the configured images.
pub fn install(ctx: &PageContext, _bindings: &mut Bindings) -> Result<(), PageError> {
    for src in &ctx.config.preload_images {
        let image = HtmlImageElement::new().map_err(js_error)?;
        image.set_src(src);
    }
    Ok(())
}
