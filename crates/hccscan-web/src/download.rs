//! File download via Blob URLs.
//!
//! Saves the exported analysis by creating a `Blob`, generating an
//! object URL, and programmatically clicking a temporary
//! `<a download>` element.  The object URL is revoked on a short delay
//! after the click so the browser has taken over the download before
//! the resource is reclaimed.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use gloo_timers::future::TimeoutFuture;
use hccscan_ui::export::{DownloadSink, SaveError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::BlobPropertyBag;

/// Grace period before the object URL is revoked, in milliseconds.
/// Long enough for the browser to begin the download; not awaited by
/// anything.
const REVOKE_DELAY_MS: u32 = 100;

/// [`DownloadSink`] backed by Blob object URLs and a synthetic anchor.
pub struct BlobDownloads;

impl DownloadSink for BlobDownloads {
    fn save_text(&self, contents: &str, filename: &str, mime_type: &str) -> Result<(), SaveError> {
        let window = web_sys::window().ok_or_else(|| SaveError("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| SaveError("no document".into()))?;

        // Create a Blob holding the serialized text.
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(contents));

        let opts = BlobPropertyBag::new();
        opts.set_type(mime_type);

        let blob =
            web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts).map_err(js_error)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        // Invisible anchor with the download attribute; append, click,
        // remove.
        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| SaveError("created element is not an anchor".into()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);

        let body = document
            .body()
            .ok_or_else(|| SaveError("no document body".into()))?;
        body.append_child(&anchor).map_err(js_error)?;
        anchor.click();

        // The download is already initiated — a removal failure is not
        // a save failure.
        let _ = body.remove_child(&anchor);

        // Release the object URL once the download has been handed to
        // the browser.  Fire-and-forget.
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(REVOKE_DELAY_MS).await;
            let _ = web_sys::Url::revoke_object_url(&url);
        });

        Ok(())
    }
}

fn js_error(value: JsValue) -> SaveError {
    SaveError(format!("{value:?}"))
}
