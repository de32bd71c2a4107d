//! DOM tests for the image preview behavior.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{DataTransfer, Event, File, FilePropertyBag, HtmlInputElement};

use super::fixtures::{mount, test_document, unmount};
use crate::behaviors::image_preview;

wasm_bindgen_test_configure!(run_in_browser);

fn fake_file(name: &str, mime: &str) -> File {
    let parts = js_sys::Array::of1(&JsValue::from_str("not-really-pixels"));
    let mut options = FilePropertyBag::new();
    options.type_(mime);
    File::new_with_str_sequence_and_options(&parts, name, &options).unwrap()
}

/// Put a selection of files onto a file input the way a user drop would:
/// through a `DataTransfer`, the only scriptable route to a `FileList`.
fn select_files(input: &HtmlInputElement, files: &[File]) {
    let dt = DataTransfer::new().unwrap();
    for file in files {
        dt.items().add_with_file(file).unwrap();
    }
    input.set_files(dt.files().as_ref());
}

async fn wait_for_children(container: &web_sys::Element, expected: u32) {
    for _ in 0..40 {
        if container.child_element_count() >= expected {
            return;
        }
        TimeoutFuture::new(25).await;
    }
}

#[wasm_bindgen_test]
async fn thumbnails_appear_with_fixed_presentation() {
    let document = test_document();
    let host = mount(&document, r#"<div id="photos-preview"></div>"#);
    let container = document.get_element_by_id("photos-preview").unwrap();

    image_preview::spawn_thumbnail_read(&document, &container, &fake_file("a.png", "image/png"))
        .unwrap();
    image_preview::spawn_thumbnail_read(&document, &container, &fake_file("b.png", "image/png"))
        .unwrap();

    wait_for_children(&container, 2).await;
    assert_eq!(container.child_element_count(), 2);

    let img = container.first_element_child().unwrap();
    assert_eq!(img.tag_name().to_lowercase(), "img");
    assert_eq!(img.class_name(), "img-thumbnail");
    assert!(img.get_attribute("src").unwrap().starts_with("data:image/png"));
    let style = img.get_attribute("style").unwrap();
    assert!(style.contains("max-height: 150px"));
    assert!(style.contains("margin-right: 10px"));
    assert!(style.contains("margin-bottom: 10px"));

    unmount(&host);
}

#[wasm_bindgen_test]
async fn change_renders_one_thumbnail_per_image_file_only() {
    let document = test_document();
    let host = mount(
        &document,
        r#"<input type="file" id="mission-photos" accept="image/*" multiple>
           <div id="mission-photos-preview"><span>stale</span></div>"#,
    );

    image_preview::setup_image_previews(&document).unwrap();

    let input = document
        .get_element_by_id("mission-photos")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    let container = document.get_element_by_id("mission-photos-preview").unwrap();

    // Mixed selection: the text file must produce no thumbnail.
    select_files(
        &input,
        &[
            fake_file("drone.png", "image/png"),
            fake_file("log.txt", "text/plain"),
        ],
    );
    input.dispatch_event(&Event::new("change").unwrap()).unwrap();

    wait_for_children(&container, 1).await;
    // A grace period so a wrongly-scheduled read for the text file would land.
    TimeoutFuture::new(100).await;
    assert_eq!(container.child_element_count(), 1);
    let img = container.first_element_child().unwrap();
    assert_eq!(img.tag_name().to_lowercase(), "img");
    assert_eq!(img.class_name(), "img-thumbnail");
    assert!(img.get_attribute("src").unwrap().starts_with("data:image/png"));

    // A second selection replaces the first batch entirely.
    select_files(
        &input,
        &[
            fake_file("before.jpg", "image/jpeg"),
            fake_file("after.jpg", "image/jpeg"),
        ],
    );
    input.dispatch_event(&Event::new("change").unwrap()).unwrap();

    wait_for_children(&container, 2).await;
    assert_eq!(container.child_element_count(), 2);
    let first = container.first_element_child().unwrap();
    assert!(first.get_attribute("src").unwrap().starts_with("data:image/jpeg"));

    unmount(&host);
}

#[wasm_bindgen_test]
fn change_with_empty_selection_clears_stale_previews() {
    let document = test_document();
    let host = mount(
        &document,
        r#"<input type="file" id="photos" accept="image/*" multiple>
           <div id="photos-preview"><span>stale</span></div>"#,
    );

    image_preview::setup_image_previews(&document).unwrap();

    let input = document.get_element_by_id("photos").unwrap();
    let event = Event::new("change").unwrap();
    input.dispatch_event(&event).unwrap();

    // The container is wiped on every change before any thumbnail lands; an
    // empty selection therefore leaves it empty.
    let container = document.get_element_by_id("photos-preview").unwrap();
    assert_eq!(container.child_element_count(), 0);
    unmount(&host);
}

#[wasm_bindgen_test]
fn missing_container_is_a_silent_no_op() {
    let document = test_document();
    let host = mount(&document, r#"<input type="file" id="lonely" accept="image/png">"#);

    image_preview::setup_image_previews(&document).unwrap();

    let input = document.get_element_by_id("lonely").unwrap();
    let event = Event::new("change").unwrap();
    // No #lonely-preview exists – dispatch must not error or panic.
    input.dispatch_event(&event).unwrap();
    unmount(&host);
}

#[wasm_bindgen_test]
fn inputs_without_image_accept_are_ignored() {
    let document = test_document();
    let host = mount(
        &document,
        r#"<input type="file" id="report" accept=".pdf">
           <div id="report-preview"><span>kept</span></div>"#,
    );

    image_preview::setup_image_previews(&document).unwrap();

    let input = document.get_element_by_id("report").unwrap();
    let event = Event::new("change").unwrap();
    input.dispatch_event(&event).unwrap();

    // No handler was attached, so the container content survives the change.
    let container = document.get_element_by_id("report-preview").unwrap();
    assert_eq!(container.child_element_count(), 1);
    unmount(&host);
}
