//! hccscan-web: WASM entry point for the upload/export UI.
//!
//! Compiles to a standalone WASM module loaded by the server-rendered
//! pages.  On instantiation it looks up the expected page elements and
//! binds the [`hccscan_ui::UploadExportController`] onto whatever
//! subset is present — the upload page has the drop zone and form, the
//! results page has the export button, and partial markup is normal.
//!
//! The loader script instantiates the module after `DOMContentLoaded`,
//! so the markup is already in place when binding runs.

mod download;
mod fetch;
mod page;

use wasm_bindgen::prelude::*;

/// Module entry point, called automatically on instantiation.
///
/// # Errors
///
/// Returns a `JsValue` error if the browser environment is missing a
/// window/document or a listener cannot be attached.  Absent page
/// elements are not errors.
#[wasm_bindgen(start)]
pub fn page_main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    page::bind(&document)
}
