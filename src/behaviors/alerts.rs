//! Auto-dismiss for transient alerts.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::dom_utils;
use crate::widgets::WidgetLibrary;

/// Delay before a non-danger alert is closed.
pub const AUTO_DISMISS_MS: u32 = 5_000;

/// Danger alerts carry errors the user should read; everything else closes
/// itself after [`AUTO_DISMISS_MS`].
pub fn schedule_auto_dismiss(document: &Document, widgets: Rc<dyn WidgetLibrary>) -> Vec<Timeout> {
    dom_utils::query_all(document, ".alert:not(.alert-danger)")
        .into_iter()
        .map(|alert| {
            let widgets = widgets.clone();
            Timeout::new(AUTO_DISMISS_MS, move || widgets.dismiss_alert(&alert))
        })
        .collect()
}
