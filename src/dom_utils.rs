//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Exposes small wrappers for the query/listen patterns the behavior modules
//! repeat, so `Closure::wrap(...).forget()` boilerplate stays out of the
//! call sites.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, MouseEvent};

/// Run `querySelectorAll` and collect the matches into a `Vec<Element>`.
///
/// An invalid selector or zero matches both yield an empty vector – callers
/// treat "nothing matched" as "nothing to do".
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                if let Ok(el) = node.dyn_into::<Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

/// Attach a `click` handler that stays alive for the page lifetime.
pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(handler));
    target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Attach a `change` handler that stays alive for the page lifetime.
pub fn on_change<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(handler));
    target.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
