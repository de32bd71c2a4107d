//! Tooltip activation.
//!
//! Bootstrap tooltips are opt-in: nothing shows until a controller is bound
//! to each trigger element. The controllers keep themselves alive on the
//! elements, so no references are retained here.

use web_sys::Document;

use crate::dom_utils;
use crate::widgets::WidgetLibrary;

pub fn activate_all(document: &Document, widgets: &dyn WidgetLibrary) {
    for el in dom_utils::query_all(document, "[data-bs-toggle=\"tooltip\"]") {
        widgets.attach_tooltip(&el);
    }
}
