//! Export HTTP transport over the browser Fetch API.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use hccscan_ui::export::{ExportTransport, HttpReply, TransportError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, RequestInit, Response};

/// [`ExportTransport`] backed by `window.fetch`.
pub struct FetchTransport;

impl ExportTransport for FetchTransport {
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    async fn post_form(&self, path: &str, body: &str) -> Result<HttpReply, TransportError> {
        let window =
            web_sys::window().ok_or_else(|| TransportError("no global window".into()))?;

        let headers = Headers::new().map_err(js_error)?;
        headers
            .set("Content-Type", "application/x-www-form-urlencoded")
            .map_err(js_error)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(body));

        // Await the fetch — this yields to the browser event loop.
        let response: Response = JsFuture::from(window.fetch_with_str_and_init(path, &init))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| TransportError("fetch did not resolve to a Response".into()))?;

        let status = response.status();

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .ok_or_else(|| TransportError("response text() did not return a string".into()))?;

        Ok(HttpReply { status, body: text })
    }
}

fn js_error(value: JsValue) -> TransportError {
    TransportError(format!("{value:?}"))
}
