//! Seam between the behavior wiring and the Bootstrap widget library.
//!
//! The behaviors only ever need four capabilities, so they are modelled as a
//! trait and the real `bootstrap.*` globals live behind one implementation.
//! Tests inject a recording stub instead of loading the toolkit.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// The UI-toolkit operations the page behaviors consume.
pub trait WidgetLibrary {
    /// Trigger the dismiss/close behavior of an alert element.
    fn dismiss_alert(&self, alert: &Element);
    /// Bind a tooltip controller to its trigger element.
    fn attach_tooltip(&self, el: &Element);
    /// Programmatically activate a tab via its tab-link.
    fn show_tab(&self, tab_link: &Element);
    /// Invoke `handler` every time the toolkit reports this tab as shown.
    fn on_tab_shown(&self, tab_link: &Element, handler: Box<dyn FnMut()>)
        -> Result<(), JsValue>;
}

// Bindings to the Bootstrap 5 globals the hosting pages load from a <script>
// tag. Only the constructors and methods we call are declared.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Alert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    fn new(element: &Element) -> Alert;

    // `catch` so closing an alert the user already removed degrades to a
    // silent no-op instead of an uncaught exception.
    #[wasm_bindgen(method, catch)]
    fn close(this: &Alert) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    fn new(element: &Element) -> Tooltip;

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tab;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    fn new(element: &Element) -> Tab;

    #[wasm_bindgen(method, catch)]
    fn show(this: &Tab) -> Result<(), JsValue>;
}

/// Bootstrap fires this DOM event on a tab-link once its pane is visible.
pub const TAB_SHOWN_EVENT: &str = "shown.bs.tab";

/// Production widget library backed by the `bootstrap` global.
pub struct BootstrapWidgets;

impl WidgetLibrary for BootstrapWidgets {
    fn dismiss_alert(&self, alert: &Element) {
        let _ = Alert::new(alert).close();
    }

    fn attach_tooltip(&self, el: &Element) {
        // Constructing the controller is the whole job; Bootstrap keeps its
        // own reference on the element.
        let _ = Tooltip::new(el);
    }

    fn show_tab(&self, tab_link: &Element) {
        let _ = Tab::new(tab_link).show();
    }

    fn on_tab_shown(
        &self,
        tab_link: &Element,
        mut handler: Box<dyn FnMut()>,
    ) -> Result<(), JsValue> {
        let cb = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| handler()));
        tab_link.add_event_listener_with_callback(TAB_SHOWN_EVENT, cb.as_ref().unchecked_ref())?;
        cb.forget();
        Ok(())
    }
}
