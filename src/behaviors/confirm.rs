//! Native confirmation guard for delete actions that do not go through a
//! modal.

use wasm_bindgen::JsValue;
use web_sys::{Document, MouseEvent};

use crate::dom_utils;

/// Prompt shown before any destructive default action proceeds. The UI is
/// French, so the literal string is too.
pub const DELETE_PROMPT: &str = "Êtes-vous sûr de vouloir supprimer cet élément ?";

pub fn setup_delete_confirmations(document: &Document) -> Result<(), JsValue> {
    for el in dom_utils::query_all(document, ".delete-confirm") {
        dom_utils::on_click(&el, |event: MouseEvent| {
            let window = web_sys::window().expect("no global window exists");
            let confirmed = window.confirm_with_message(DELETE_PROMPT).unwrap_or(false);
            if !confirmed {
                // Declining cancels the link navigation / form submit.
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}
