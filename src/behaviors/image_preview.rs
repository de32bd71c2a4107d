//! Thumbnail previews for image file inputs.
//!
//! Any `input[type=file]` that accepts images gets a `change` handler. The
//! preview is opt-in through markup: it only renders when a sibling container
//! with id `<input-id>-preview` exists. Every change clears the container and
//! repopulates it with one thumbnail per selected image file; files are read
//! independently, so with several files the append order follows read
//! completion, not selection.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, File, FileReader, HtmlImageElement, HtmlInputElement,
              ProgressEvent};

use crate::dom_utils;
use crate::utils;

/// Fixed thumbnail presentation, matching the gallery cards elsewhere in the
/// UI.
pub const THUMBNAIL_STYLE: &str = "max-height: 150px; margin-right: 10px; margin-bottom: 10px;";

pub fn setup_image_previews(document: &Document) -> Result<(), JsValue> {
    for el in dom_utils::query_all(document, "input[type=\"file\"][accept*=\"image\"]") {
        let input: HtmlInputElement = match el.dyn_into() {
            Ok(input) => input,
            Err(_) => continue,
        };
        let document = document.clone();
        let target = input.clone();
        dom_utils::on_change(&input, move |_event: Event| {
            if let Err(err) = render_previews(&document, &target) {
                web_sys::console::warn_1(
                    &format!("mission-frontend: image preview failed: {:?}", err).into(),
                );
            }
        })?;
    }
    Ok(())
}

/// Rebuild the preview container for the current selection of `input`.
pub(crate) fn render_previews(
    document: &Document,
    input: &HtmlInputElement,
) -> Result<(), JsValue> {
    let container = match document.get_element_by_id(&utils::preview_container_id(&input.id())) {
        Some(container) => container,
        // No container in the markup means the page opted out of previews.
        None => return Ok(()),
    };

    container.set_inner_html("");

    let files = match input.files() {
        Some(files) => files,
        None => return Ok(()),
    };
    for i in 0..files.length() {
        let file = match files.get(i) {
            Some(file) => file,
            None => continue,
        };
        if !utils::is_image_mime(&file.type_()) {
            continue;
        }
        spawn_thumbnail_read(document, &container, &file)?;
    }
    Ok(())
}

/// Kick off one asynchronous data-URL read; the thumbnail is appended from
/// the reader's `onload` callback whenever the read completes.
pub(crate) fn spawn_thumbnail_read(
    document: &Document,
    container: &Element,
    file: &File,
) -> Result<(), JsValue> {
    let reader = FileReader::new()?;
    let reader_ref = reader.clone();
    let document = document.clone();
    let container = container.clone();

    let onload = Closure::once(move |_event: ProgressEvent| {
        let data_url = match reader_ref.result().ok().and_then(|v| v.as_string()) {
            Some(url) => url,
            None => return,
        };
        if let Err(err) = append_thumbnail(&document, &container, &data_url) {
            web_sys::console::warn_1(
                &format!("mission-frontend: thumbnail insert failed: {:?}", err).into(),
            );
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    reader.read_as_data_url(file)
}

fn append_thumbnail(
    document: &Document,
    container: &Element,
    data_url: &str,
) -> Result<(), JsValue> {
    let img = document.create_element("img")?.dyn_into::<HtmlImageElement>()?;
    img.set_src(data_url);
    img.set_class_name("img-thumbnail");
    img.set_attribute("style", THUMBNAIL_STYLE)?;
    container.append_child(&img)?;
    Ok(())
}
