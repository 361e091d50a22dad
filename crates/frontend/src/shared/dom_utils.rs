//! Raw DOM wiring that goes through web-sys listeners

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Clear `open` when a mousedown lands outside the element matching
/// `scope_selector`.
///
/// The document listener is registered when `open` turns true and removed
/// when it turns false or the owner is disposed. Registration and removal are
/// always paired, so repeated open/close cycles never accumulate listeners.
pub fn dismiss_on_outside_mousedown(open: RwSignal<bool>, scope_selector: &'static str) {
    let handler = StoredValue::new_local(None::<Closure<dyn FnMut(web_sys::MouseEvent)>>);

    let unregister = move || {
        handler.update_value(|slot| {
            if let Some(closure) = slot.take() {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    let _ = document.remove_event_listener_with_callback(
                        "mousedown",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    };

    Effect::new(move |_| {
        if !open.get() {
            unregister();
            return;
        }

        // Drop a stale listener before installing the new one
        unregister();

        let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            let inside_scope = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .and_then(|element| element.closest(scope_selector).ok().flatten())
                .is_some();
            if !inside_scope {
                open.set(false);
            }
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        }
        handler.set_value(Some(closure));
    });

    on_cleanup(unregister);
}
