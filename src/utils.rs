//! Utility helpers shared across the frontend glue.

use wasm_bindgen::JsValue;

/// Today's local date as zero-padded `YYYY-MM-DD`, the value the HTML date
/// input expects.
pub fn today_ymd() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Current local wall-clock time for the footer, `HH:MM:SS`.
pub fn current_time_string() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Render a float with the runtime's default locale (thousands separators,
/// decimal mark) via `Intl.NumberFormat`.
///
/// Passing an empty locales list makes Intl pick the browser's own locale,
/// which is what `Number.prototype.toLocaleString()` does.
pub fn format_number_default_locale(value: f64) -> Option<String> {
    let formatter =
        js_sys::Intl::NumberFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    formatter
        .format()
        .call1(&JsValue::NULL, &JsValue::from_f64(value))
        .ok()
        .and_then(|v| v.as_string())
}

/// Parse the leading numeric prefix of a display string, like JS `parseFloat`.
///
/// Table cells sometimes carry a unit suffix ("120 m", "12px"); the original
/// UI formatted those too, so plain `str::parse` is too strict. Returns
/// `None` when no number starts the string.
pub fn parse_display_number(text: &str) -> Option<f64> {
    let s = text.trim();
    let b = s.as_bytes();
    let mut i = 0usize;
    let mut end = 0usize;
    let mut seen_digit = false;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    // parseFloat also accepts the case-sensitive "Infinity" literal.
    if s[i..].starts_with("Infinity") {
        let sign = if b.first() == Some(&b'-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
        seen_digit = true;
        end = i;
    }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i > frac_start {
            seen_digit = true;
            end = i;
        } else if seen_digit {
            // "12." parses as 12
            end = i;
        }
    }
    if !seen_digit {
        return None;
    }
    // Optional exponent, only counted when digits follow the marker.
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }
    s[..end].parse::<f64>().ok()
}

/// Derive the preview container id for a file input: `<input-id>-preview`.
pub fn preview_container_id(input_id: &str) -> String {
    format!("{}-preview", input_id)
}

/// Whether a file's MIME type marks it as an image (`image/png`, ...).
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image")
}

// ---------------------------------------------------------------------------
// Tests – the pure helpers run under plain `cargo test`, the Intl-backed
// formatter needs a browser and is exercised by the wasm suite.
// ---------------------------------------------------------------------------
