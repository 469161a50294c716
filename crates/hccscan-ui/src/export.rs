//! Export transport and download-sink seams.
//!
//! The export flow needs exactly two outside capabilities: POSTing a
//! form-encoded body and saving text as a local file.  Both are traits
//! here so the flow runs under native tests with in-memory fakes.
//!
//! [`render_pretty_json`] is the pure middle of the flow — parse the
//! response body, re-serialize with 2-space indentation — with no I/O.

use serde_json::Value;

/// Filename offered for the exported analysis download.
pub const EXPORT_FILENAME: &str = "medical_document_analysis.json";

/// MIME type of the exported download.
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Path of the export endpoint.
pub const EXPORT_PATH: &str = "/export";

/// Form-encoded body sent to the export endpoint.
pub const EXPORT_BODY: &str = "format=json";

/// A failure at the HTTP-transport level (the request never resolved to
/// a status).
#[derive(Debug, thiserror::Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

/// A failure while handing a file to the local save/download flow.
#[derive(Debug, thiserror::Error)]
#[error("save error: {0}")]
pub struct SaveError(pub String);

/// Errors that can occur during the export flow.
///
/// All variants collapse to the same user-facing alert; the distinction
/// only feeds the console diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The HTTP call itself failed to complete.
    #[error("export request failed: {0}")]
    Request(String),

    /// The endpoint resolved with a non-2xx status.  The body is not
    /// inspected.
    #[error("export request returned HTTP {0}")]
    Status(u16),

    /// The response body could not be parsed as JSON.
    #[error("export response is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The parsed result could not be handed to the download flow.
    #[error("failed to save export file: {0}")]
    Save(String),
}

/// A resolved HTTP response: status code plus body text.
#[derive(Debug, Clone)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Response body, as text.
    pub body: String,
}

impl HttpReply {
    /// Whether the status is in the 2xx success range.
    ///
    /// Any status outside 2xx is treated uniformly as failure,
    /// regardless of body content.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Outbound HTTP capability for the export flow.
#[allow(async_fn_in_trait)] // single-threaded browser target; no Send bound wanted
pub trait ExportTransport {
    /// POST `body` to `path` with `Content-Type:
    /// application/x-www-form-urlencoded`, resolving to the status and
    /// body text.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when the request fails to
    /// complete at all (network failure); a non-2xx status is a
    /// successful resolution.
    async fn post_form(&self, path: &str, body: &str) -> Result<HttpReply, TransportError>;
}

/// Local file-save capability for the export flow.
pub trait DownloadSink {
    /// Offer `contents` as a downloadable file.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] if the save flow cannot be initiated.
    fn save_text(&self, contents: &str, filename: &str, mime_type: &str) -> Result<(), SaveError>;
}

/// Parse `body` as JSON and re-serialize it pretty-printed with 2-space
/// indentation, regardless of the original formatting.
///
/// The shape of the JSON is opaque — anything the endpoint returns is
/// passed through.
///
/// # Errors
///
/// Returns [`ExportError::MalformedBody`] when `body` is not valid JSON.
pub fn render_pretty_json(body: &str) -> Result<String, ExportError> {
    let value: Value = serde_json::from_str(body)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // --- HttpReply::is_success ---

    #[test]
    fn status_200_is_success() {
        let reply = HttpReply {
            status: 200,
            body: String::new(),
        };
        assert!(reply.is_success());
    }

    #[test]
    fn status_299_is_success() {
        let reply = HttpReply {
            status: 299,
            body: String::new(),
        };
        assert!(reply.is_success());
    }

    #[test]
    fn status_199_is_failure() {
        let reply = HttpReply {
            status: 199,
            body: String::new(),
        };
        assert!(!reply.is_success());
    }

    #[test]
    fn status_300_is_failure() {
        let reply = HttpReply {
            status: 300,
            body: String::new(),
        };
        assert!(!reply.is_success());
    }

    #[test]
    fn status_500_is_failure() {
        let reply = HttpReply {
            status: 500,
            body: String::new(),
        };
        assert!(!reply.is_success());
    }

    // --- render_pretty_json ---

    #[test]
    fn compact_input_is_reindented_with_two_spaces() {
        let pretty = render_pretty_json(r#"{"result":"ok","count":3}"#).unwrap();
        // 2-space indentation, one key per line.
        assert!(pretty.contains("\n  \"count\": 3"));
        assert!(pretty.contains("\n  \"result\": \"ok\""));
        assert!(!pretty.contains("\n    "));
    }

    #[test]
    fn pretty_output_parses_back_to_the_same_value() {
        let body = r#"{"result":"ok","count":3,"items":[1,2,{"x":null}]}"#;
        let pretty = render_pretty_json(body).unwrap();
        let original: Value = serde_json::from_str(body).unwrap();
        let reparsed: Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn non_object_json_is_passed_through() {
        // The shape is opaque; arrays and scalars are valid bodies too.
        assert_eq!(render_pretty_json("[1,2]").unwrap(), "[\n  1,\n  2\n]");
        assert_eq!(render_pretty_json("42").unwrap(), "42");
    }

    #[test]
    fn malformed_body_is_rejected() {
        let err = render_pretty_json("not-json").unwrap_err();
        assert!(matches!(err, ExportError::MalformedBody(_)));
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(render_pretty_json("").is_err());
    }
}
