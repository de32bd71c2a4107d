use std::rc::Rc;

use wasm_bindgen::prelude::*;

pub mod behaviors;
pub mod dom_utils;
pub mod tasks;
pub mod utils;
pub mod widgets;

#[cfg(all(test, target_arch = "wasm32"))]
mod tests;

// Main entry point for the WASM bundle – runs once per page load, after the
// document's structure has been parsed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global window exists");
    let document = window.document().expect("should have a document on window");

    let tasks = behaviors::init_page_behaviors(&document, Rc::new(widgets::BootstrapWidgets));

    // The alert timers and the footer clock live for the whole page; nothing
    // tears this page down short of a full navigation, so leak the handle.
    tasks.forget();

    Ok(())
}
