//! Page binding: selector lookup and event wiring.
//!
//! Each of the eight page elements is looked up once at bind time and
//! is independently optional — an absent element disables only the
//! behavior that depends on it.  Event-listener closures are leaked
//! with [`Closure::forget`]; they live for the page lifetime.

use std::rc::Rc;

use hccscan_ui::{UiHost, UploadExportController};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DragEvent, Event};

use crate::download::BlobDownloads;
use crate::fetch::FetchTransport;

const DROP_AREA: &str = ".drag-area";
const FILE_INPUT: &str = "#file-input";
const BROWSE_BTN: &str = "#browse-btn";
const UPLOAD_FORM: &str = "#upload-form";
const SPINNER: &str = ".processing-spinner";
const EXPORT_BTN: &str = "#export-btn";
const FILE_NAME: &str = "#file-name";
const SUBMIT_BTN: &str = "#submit-btn";

/// Class toggled on the drop zone while a drag hovers over it.
const ACTIVE_CLASS: &str = "active";

type WebController = UploadExportController<PageHost, FetchTransport, BlobDownloads>;

/// The bound page elements.
///
/// Every field is optional; each [`UiHost`] operation silently no-ops
/// when its element is absent.
struct PageHost {
    drop_area: Option<web_sys::HtmlElement>,
    file_input: Option<web_sys::HtmlInputElement>,
    file_name: Option<web_sys::HtmlElement>,
    submit_btn: Option<web_sys::HtmlButtonElement>,
    spinner: Option<web_sys::HtmlElement>,
}

impl UiHost for PageHost {
    type DroppedFiles = web_sys::FileList;

    fn set_drop_active(&self, active: bool) {
        if let Some(ref area) = self.drop_area {
            // A classList mutation cannot meaningfully fail here.
            if active {
                let _ = area.class_list().add_1(ACTIVE_CLASS);
            } else {
                let _ = area.class_list().remove_1(ACTIVE_CLASS);
            }
        }
    }

    fn adopt_dropped_files(&self, files: web_sys::FileList) {
        if let Some(ref input) = self.file_input {
            input.set_files(Some(&files));
        }
    }

    fn open_file_picker(&self) {
        if let Some(ref input) = self.file_input {
            input.click();
        }
    }

    fn selected_file_count(&self) -> usize {
        self.file_input
            .as_ref()
            .and_then(web_sys::HtmlInputElement::files)
            .map_or(0, |files| files.length() as usize)
    }

    fn first_file_name(&self) -> Option<String> {
        self.file_input
            .as_ref()
            .and_then(web_sys::HtmlInputElement::files)
            .and_then(|files| files.get(0))
            .map(|file| file.name())
    }

    fn set_file_label(&self, text: &str) {
        if let Some(ref label) = self.file_name {
            label.set_text_content(Some(text));
            let _ = label.style().set_property("display", "block");
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        if let Some(ref btn) = self.submit_btn {
            btn.set_disabled(!enabled);
        }
    }

    fn show_spinner(&self) {
        if let Some(ref spinner) = self.spinner {
            let _ = spinner.style().set_property("display", "block");
        }
    }

    fn hide_drop_area(&self) {
        if let Some(ref area) = self.drop_area {
            let _ = area.style().set_property("display", "none");
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn log_error(&self, message: &str) {
        web_sys::console::error_1(&JsValue::from_str(message));
    }
}

/// Look up an element by selector, yielding `None` when it is absent
/// or not of the expected type.
fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Attach a page-lifetime event listener.
fn listen(
    target: &web_sys::EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget(); // leak — lives for the page lifetime
    Ok(())
}

/// Bind the controller to whatever subset of the expected markup the
/// document contains.
///
/// # Errors
///
/// Returns an error only when attaching a listener to a present
/// element fails; absent elements are skipped silently.
pub fn bind(document: &Document) -> Result<(), JsValue> {
    let drop_area = query::<web_sys::HtmlElement>(document, DROP_AREA);
    let file_input = query::<web_sys::HtmlInputElement>(document, FILE_INPUT);
    let browse_btn = query::<web_sys::HtmlElement>(document, BROWSE_BTN);
    let upload_form = query::<web_sys::HtmlFormElement>(document, UPLOAD_FORM);
    let spinner = query::<web_sys::HtmlElement>(document, SPINNER);
    let export_btn = query::<web_sys::HtmlElement>(document, EXPORT_BTN);
    let file_name = query::<web_sys::HtmlElement>(document, FILE_NAME);
    let submit_btn = query::<web_sys::HtmlButtonElement>(document, SUBMIT_BTN);

    let controller: Rc<WebController> = Rc::new(UploadExportController::new(
        PageHost {
            drop_area: drop_area.clone(),
            file_input: file_input.clone(),
            file_name,
            submit_btn,
            spinner,
        },
        FetchTransport,
        BlobDownloads,
    ));

    if let Some(ref area) = drop_area {
        let ctl = Rc::clone(&controller);
        listen(area, "dragover", move |event| {
            event.prevent_default();
            event.stop_propagation();
            ctl.drag_over();
        })?;

        let ctl = Rc::clone(&controller);
        listen(area, "dragleave", move |event| {
            event.prevent_default();
            event.stop_propagation();
            ctl.drag_leave();
        })?;

        let ctl = Rc::clone(&controller);
        listen(area, "drop", move |event| {
            event.prevent_default();
            event.stop_propagation();
            let files = event
                .dyn_ref::<DragEvent>()
                .and_then(DragEvent::data_transfer)
                .and_then(|transfer| transfer.files());
            match files {
                Some(list) => ctl.drop_files(list),
                // A drop always carries a dataTransfer; if one somehow
                // doesn't, still clear the highlight.
                None => ctl.drag_leave(),
            }
        })?;
    }

    if let Some(ref btn) = browse_btn {
        let ctl = Rc::clone(&controller);
        listen(btn, "click", move |_| ctl.browse_clicked())?;
    }

    if let Some(ref input) = file_input {
        let ctl = Rc::clone(&controller);
        listen(input, "change", move |_| ctl.selection_changed())?;
    }

    if let Some(ref form) = upload_form {
        let ctl = Rc::clone(&controller);
        // The submission itself is not intercepted; this only flips
        // the page into its "processing" state.
        listen(form, "submit", move |_| ctl.form_submitted())?;
    }

    if let Some(ref btn) = export_btn {
        let ctl = Rc::clone(&controller);
        listen(btn, "click", move |_| {
            let ctl = Rc::clone(&ctl);
            wasm_bindgen_futures::spawn_local(async move {
                ctl.export_clicked().await;
            });
        })?;
    }

    Ok(())
}
