//! Tab/hash sync – the active tab survives reloads and can be linked to.

use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom_utils;
use crate::widgets::WidgetLibrary;

const TAB_LINK_SELECTOR: &str = "a[data-bs-toggle=\"tab\"]";

/// At init, activate the tab the URL fragment points at (if any), then mirror
/// every later user-driven tab activation back into the fragment.
///
/// Hash changes arriving from outside after init (back/forward) are out of
/// scope; only the one-time check runs.
pub fn setup_tab_hash_sync(
    document: &Document,
    widgets: Rc<dyn WidgetLibrary>,
) -> Result<(), JsValue> {
    let window = web_sys::window().expect("no global window exists");
    let location = window.location();

    let hash = location.hash().unwrap_or_default();
    if !hash.is_empty() {
        let selector = format!("{}[href=\"{}\"]", TAB_LINK_SELECTOR, hash);
        if let Ok(Some(tab_link)) = document.query_selector(&selector) {
            widgets.show_tab(&tab_link);
        }
    }

    for tab_link in dom_utils::query_all(document, TAB_LINK_SELECTOR) {
        let href = match tab_link.get_attribute("href") {
            Some(href) if !href.is_empty() => href,
            _ => continue,
        };
        let location = location.clone();
        widgets.on_tab_shown(
            &tab_link,
            Box::new(move || {
                let _ = location.set_hash(&href);
            }),
        )?;
    }
    Ok(())
}
