//! Footer wall-clock refresh.

use gloo_timers::callback::Interval;
use web_sys::Document;

use crate::utils;

pub const FOOTER_TIME_ID: &str = "footer-time";

/// Minute granularity is enough for a footer clock.
pub const CLOCK_TICK_MS: u32 = 60_000;

/// Paint the time immediately, then refresh every minute. The element is
/// looked up per tick so markup rendered after init still gets a clock, and
/// its absence at any tick is a silent skip.
pub fn start_footer_clock(document: &Document) -> Interval {
    refresh(document);
    let document = document.clone();
    Interval::new(CLOCK_TICK_MS, move || refresh(&document))
}

pub(crate) fn refresh(document: &Document) {
    if let Some(el) = document.get_element_by_id(FOOTER_TIME_ID) {
        el.set_text_content(Some(&utils::current_time_string()));
    }
}
