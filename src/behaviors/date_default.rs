//! Default value for the flight-date field.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::dom_utils;
use crate::utils;

/// Only this input ever receives a default; other date fields on the page
/// (maintenance dates, filters) stay untouched.
pub const FLIGHT_DATE_INPUT_ID: &str = "flight_date";

/// Markup opt-out: a template can suppress the default per instance.
pub const NO_DEFAULT_ATTR: &str = "data-no-default";

pub fn apply_flight_date_default(document: &Document) {
    for el in dom_utils::query_all(document, "input[type=\"date\"]") {
        let input: HtmlInputElement = match el.dyn_into() {
            Ok(input) => input,
            Err(_) => continue,
        };
        if input.id() == FLIGHT_DATE_INPUT_ID
            && input.value().is_empty()
            && !input.has_attribute(NO_DEFAULT_ATTR)
        {
            input.set_value(&utils::today_ymd());
        }
    }
}
