//! The UI host capability trait.
//!
//! The controller never touches the DOM directly.  Everything it needs
//! from the page — visual mutations, file-input access, the blocking
//! alert — goes through [`UiHost`], so the controller is constructible
//! in native tests with an in-memory fake.
//!
//! Every operation is a silent no-op in the web implementation when the
//! corresponding page element is absent.  Partial markup (e.g. the
//! results page, which has an export button but no drop zone) is
//! expected, not an error.

/// Capabilities the controller requires from the page it is bound to.
pub trait UiHost {
    /// Opaque payload carrying a dropped file list from the drop event
    /// to the native file input.  The web implementation uses
    /// `web_sys::FileList`; tests use a plain list of names.  The
    /// controller forwards it without inspecting it.
    type DroppedFiles;

    /// Toggle the drop zone's "active" highlight (drag hover).
    fn set_drop_active(&self, active: bool);

    /// Attach a dropped file list to the native file input, as if the
    /// user had chosen the files via the picker.
    fn adopt_dropped_files(&self, files: Self::DroppedFiles);

    /// Programmatically open the native file-selection dialog.
    fn open_file_picker(&self);

    /// Number of files currently attached to the file input.
    fn selected_file_count(&self) -> usize;

    /// Name of the first attached file, if any.
    fn first_file_name(&self) -> Option<String>;

    /// Write the file-name label and make it visible.
    fn set_file_label(&self, text: &str);

    /// Enable or disable the submit control.
    fn set_submit_enabled(&self, enabled: bool);

    /// Make the processing spinner visible.
    fn show_spinner(&self);

    /// Hide the drop zone.
    fn hide_drop_area(&self);

    /// Show a blocking alert to the user.
    fn alert(&self, message: &str);

    /// Record a developer-facing diagnostic (the browser console in the
    /// web implementation).
    fn log_error(&self, message: &str);
}
