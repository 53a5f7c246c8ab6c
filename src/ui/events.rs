//! Owned event listener registrations.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::core::PageError;
use crate::ui::dom::js_error;

/// A listener bound to `target` for `event`.
///
/// The binding owns the JS closure; dropping it removes the listener, so a
/// page can be unbound without leaking closures.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    /// Listen for `event` on `target`, handing the handler the event cast to `E`.
    ///
    /// Events that are not an `E` are ignored.
    pub fn bind<E, F>(
        target: &EventTarget,
        event: &'static str,
        mut handler: F,
    ) -> Result<Self, PageError>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(move |raw: Event| {
            if let Ok(typed) = raw.dyn_into::<E>() {
                handler(typed);
            }
        });

        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(js_error)?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let callback: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        if let Err(err) = self.target.remove_event_listener_with_callback(self.event, callback) {
            let error = js_error(err);
            tracing::debug!(event = self.event, %error, "Listener removal rejected");
        }
    }
}
