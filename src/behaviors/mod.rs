//! Page behavior initializer.
//!
//! One-shot wiring of every presentation behavior the mission pages rely on:
//! alert auto-dismiss, tooltips, delete confirmations, the flight-date
//! default, tab/hash sync, number formatting, image previews and the footer
//! clock. Each step is independent and tolerant of zero matches, so pages
//! that only carry some of the markup still initialize cleanly.

pub mod alerts;
pub mod confirm;
pub mod date_default;
pub mod footer_clock;
pub mod image_preview;
pub mod number_format;
pub mod tabs;
pub mod tooltips;

use std::rc::Rc;

use web_sys::Document;

use crate::tasks::PageTasks;
use crate::widgets::WidgetLibrary;

/// Entry point – call once after the document structure is ready.
///
/// A failing step is logged and never stops the remaining steps; the returned
/// handle owns all timers the initializer started.
pub fn init_page_behaviors(document: &Document, widgets: Rc<dyn WidgetLibrary>) -> PageTasks {
    let mut tasks = PageTasks::default();

    tasks.alert_timers = alerts::schedule_auto_dismiss(document, widgets.clone());

    tooltips::activate_all(document, widgets.as_ref());

    if let Err(err) = confirm::setup_delete_confirmations(document) {
        warn_step("delete-confirm", &err);
    }

    date_default::apply_flight_date_default(document);

    if let Err(err) = tabs::setup_tab_hash_sync(document, widgets) {
        warn_step("tab/hash sync", &err);
    }

    number_format::format_marked_elements(document);

    if let Err(err) = image_preview::setup_image_previews(document) {
        warn_step("image preview", &err);
    }

    tasks.clock = Some(footer_clock::start_footer_clock(document));

    tasks
}

fn warn_step(step: &str, err: &wasm_bindgen::JsValue) {
    web_sys::console::warn_1(&format!("mission-frontend: {} setup failed: {:?}", step, err).into());
}
