//! The upload/export controller.
//!
//! One controller is bound per page load.  Drag, drop, browse,
//! selection-change, and submit handlers are synchronous and touch only
//! the [`UiHost`]; the export handler is the single async flow, awaiting
//! the transport before handing the rendered JSON to the download sink.
//!
//! Deliberately absent: any guard against overlapping export clicks.
//! Each click runs an independent flow.

use crate::export::{
    DownloadSink, EXPORT_BODY, EXPORT_FILENAME, EXPORT_MIME_TYPE, EXPORT_PATH, ExportError,
    ExportTransport, render_pretty_json,
};
use crate::host::UiHost;

/// Label text shown when the file input holds no selection.
pub const NO_FILE_PLACEHOLDER: &str = "No file selected";

/// Generic user-facing message for any export failure.
pub const EXPORT_FAILED_MESSAGE: &str = "Failed to export results. Please try again.";

/// Event wiring for the upload page and the results page.
///
/// Generic over the page capabilities so it runs under native tests
/// with in-memory fakes.  `H` supplies the visual mutations and
/// file-input access, `T` the export HTTP call, `D` the local save
/// flow.
pub struct UploadExportController<H, T, D> {
    host: H,
    transport: T,
    downloads: D,
}

impl<H, T, D> UploadExportController<H, T, D>
where
    H: UiHost,
    T: ExportTransport,
    D: DownloadSink,
{
    /// Create a controller over the given page capabilities.
    #[must_use]
    pub const fn new(host: H, transport: T, downloads: D) -> Self {
        Self {
            host,
            transport,
            downloads,
        }
    }

    /// A drag entered or moved over the drop zone.
    pub fn drag_over(&self) {
        self.host.set_drop_active(true);
    }

    /// A drag left the drop zone without dropping.
    pub fn drag_leave(&self) {
        self.host.set_drop_active(false);
    }

    /// Files were dropped on the drop zone.
    ///
    /// Clears the highlight, hands the dropped list to the native file
    /// input, then refreshes the file-name display and submit state.
    pub fn drop_files(&self, files: H::DroppedFiles) {
        self.host.set_drop_active(false);
        self.host.adopt_dropped_files(files);
        self.selection_changed();
    }

    /// The browse control was clicked.
    pub fn browse_clicked(&self) {
        self.host.open_file_picker();
    }

    /// The file input's selection changed (native picker or drop
    /// handoff).
    ///
    /// Only the first file's name is displayed; a multi-file selection
    /// stays attached to the input in full and submits with the form.
    pub fn selection_changed(&self) {
        let first = self.host.first_file_name();
        self.host
            .set_file_label(first.as_deref().unwrap_or(NO_FILE_PLACEHOLDER));
        self.host
            .set_submit_enabled(self.host.selected_file_count() > 0);
    }

    /// The upload form was submitted.
    ///
    /// The submission itself is not intercepted — this only flips the
    /// page into its optimistic "processing" state until the native
    /// form navigation replaces it.
    pub fn form_submitted(&self) {
        self.host.show_spinner();
        self.host.hide_drop_area();
    }

    /// The export button was clicked.
    ///
    /// Runs the full export flow.  Every failure — network, non-2xx
    /// status, malformed body, save — is caught here, logged through
    /// the host diagnostic channel, and surfaced as one generic
    /// blocking alert.  No error escapes.
    pub async fn export_clicked(&self) {
        if let Err(e) = self.run_export().await {
            self.host.log_error(&format!("Error exporting results: {e}"));
            self.host.alert(EXPORT_FAILED_MESSAGE);
        }
    }

    async fn run_export(&self) -> Result<(), ExportError> {
        let reply = self
            .transport
            .post_form(EXPORT_PATH, EXPORT_BODY)
            .await
            .map_err(|e| ExportError::Request(e.to_string()))?;

        if !reply.is_success() {
            return Err(ExportError::Status(reply.status));
        }

        let pretty = render_pretty_json(&reply.body)?;

        self.downloads
            .save_text(&pretty, EXPORT_FILENAME, EXPORT_MIME_TYPE)
            .map_err(|e| ExportError::Save(e.to_string()))?;

        Ok(())
    }
}
