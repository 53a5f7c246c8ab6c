use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use super::{Bindings, PageContext};
use crate::core::PageError;
use crate::ui::dom::js_error;

/// Call `<icon_global>.createIcons()` when the icon library is on the page.
pub fn install(ctx: &PageContext, _bindings: &mut Bindings) -> Result<(), PageError> {
    let global = ctx.config.icon_global.as_str();
    let library = Reflect::get(&ctx.window, &JsValue::from_str(global)).map_err(js_error)?;
    if library.is_undefined() || library.is_null() {
        tracing::debug!(global, "Icon library not loaded");
        return Ok(());
    }

    let create = Reflect::get(&library, &JsValue::from_str("createIcons")).map_err(js_error)?;
    let Some(create) = create.dyn_ref::<Function>() else {
        tracing::debug!(global, "Icon library has no createIcons()");
        return Ok(());
    };
    create.call0(&library).map_err(js_error)?;
    Ok(())
}
