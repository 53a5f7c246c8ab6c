use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Window};

use super::{Bindings, PageContext};
use crate::core::counter::{CounterAnimation, parse_amount};
use crate::core::{PageError, TriggerSet};
use crate::ui::dom::{self, js_error};
use crate::ui::observer::VisibilityObserver;

/// Count each price up from zero the first time it is half visible.
pub fn install(ctx: &PageContext, bindings: &mut Bindings) -> Result<(), PageError> {
    let config = &ctx.config;
    let prices = Rc::new(dom::query_all(&ctx.document, &config.selectors.prices));
    if prices.is_empty() {
        return Ok(());
    }

    let pending = Rc::new(RefCell::new(TriggerSet::new()));
    {
        let mut armed = pending.borrow_mut();
        for index in 0..prices.len() {
            armed.arm(index);
        }
    }

    let window = ctx.window.clone();
    let duration = config.counter_duration();
    let locale: Rc<str> = Rc::from(config.locale.as_str());

    let targets = prices.clone();
    let observer = VisibilityObserver::new(config.counter_threshold, move |entries, observer| {
        for entry in entries.iter().filter(|entry| entry.is_intersecting()) {
            let target = entry.target();
            let Some(index) = targets.iter().position(|price| *price == target) else {
                continue;
            };
            if !pending.borrow_mut().fire(&index) {
                continue;
            }
            observer.unobserve(&target);

            let text = target.text_content().unwrap_or_default();
            match parse_amount(&text) {
                Some(amount) => {
                    let animation = CounterAnimation::new(amount, duration);
                    run_counter(&window, target, animation, locale.clone());
                }
                None => tracing::debug!(%text, "Price without digits left as is"),
            }
        }
    })?;

    for price in prices.iter() {
        observer.observe(price);
    }
    bindings.keep_observer(observer);
    Ok(())
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Drive one animation on `requestAnimationFrame` until it finishes.
///
/// The loop holds itself alive through `frame` and releases the closure on
/// the last frame. It keeps running if the element leaves the document.
fn run_counter(window: &Window, element: Element, animation: CounterAnimation, locale: Rc<str>) {
    let frame: FrameSlot = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();
    let frame_window = window.clone();
    let mut started_at = None;

    *frame.borrow_mut() = Some(Closure::new(move |now: f64| {
        let start = *started_at.get_or_insert(now);
        let elapsed = now - start;
        let label = animation.label_at(elapsed, |value| format_amount(value, &locale));
        element.set_text_content(Some(&label));

        if animation.is_finished(elapsed) {
            // Drop our own closure to break the cycle
            let _ = next_frame.borrow_mut().take();
            return;
        }
        if let Some(callback) = next_frame.borrow().as_ref() {
            request_frame(&frame_window, callback);
        }
    }));

    if let Some(callback) = frame.borrow().as_ref() {
        request_frame(window, callback);
    }
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut(f64)>) {
    if let Err(err) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        tracing::debug!(error = %js_error(err), "Animation frame request rejected");
    }
}

/// Group `value` the way the browser does for `locale`
fn format_amount(value: u64, locale: &str) -> String {
    js_sys::Number::from(value as f64)
        .to_locale_string(locale)
        .into()
}
