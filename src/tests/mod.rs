//! Browser-side behavior tests.
//!
//! Run with `wasm-pack test --headless --chrome`. Each test builds its own
//! fixture subtree, asserts against the live DOM and removes the subtree so
//! later tests see a clean document.

mod image_preview;
