//! hccscan-ui: upload and export controller logic.
//!
//! Holds the behavior of the hccscan browser front-end — drag-and-drop
//! file selection, file-name display, submit enablement, and the JSON
//! export/download flow — behind small capability traits so it compiles
//! and tests without a browser.  The `hccscan-web` crate supplies the
//! `web-sys`-backed implementations.

pub mod controller;
pub mod export;
pub mod host;

pub use controller::UploadExportController;
pub use export::{DownloadSink, ExportError, ExportTransport, HttpReply, SaveError, TransportError};
pub use host::UiHost;
