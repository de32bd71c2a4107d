//! One-shot locale formatting of marked numeric text.

use web_sys::Document;

use crate::dom_utils;
use crate::utils;

/// Replace the text of every `.format-number` element with its locale-aware
/// rendering. Text that does not start with a number is left as-is, and later
/// content mutations are not observed.
pub fn format_marked_elements(document: &Document) {
    for el in dom_utils::query_all(document, ".format-number") {
        let text = el.text_content().unwrap_or_default();
        if let Some(value) = utils::parse_display_number(&text) {
            if let Some(formatted) = utils::format_number_default_locale(value) {
                el.set_text_content(Some(&formatted));
            }
        }
    }
}
