//! DOM lookups that degrade to "absent" instead of throwing.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::core::PageError;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::MissingGlobal("window"))
}

pub fn document(window: &Window) -> Result<Document, PageError> {
    window.document().ok_or(PageError::MissingGlobal("document"))
}

/// Convert a thrown JS value into a [`PageError`]
pub fn js_error(value: JsValue) -> PageError {
    PageError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Element with the given id, if present and an HTML element
pub fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

/// All elements matching `selector` in document order.
///
/// An invalid selector yields an empty list and a warning.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            tracing::warn!(selector, error = %js_error(err), "Invalid selector");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Like [`query_all`], keeping only HTML elements
pub fn query_all_html(document: &Document, selector: &str) -> Vec<HtmlElement> {
    query_all(document, selector)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Current vertical scroll offset, 0 if the browser refuses to say
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Rendered height of the header, 0 when there is none
pub fn header_height(document: &Document, header_id: &str) -> f64 {
    html_by_id(document, header_id)
        .map(|header| header.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Add or remove `class` on `element`
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        tracing::debug!(class, error = %js_error(err), "Class update rejected");
    }
}

/// Set the inline style `property` of `element`
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        tracing::debug!(property, value, error = %js_error(err), "Style update rejected");
    }
}
