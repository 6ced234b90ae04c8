//! Request/response diagnostics for print API submissions.
//!
//! An extension point only: sinks observe traffic, they cannot alter it.
//! The default sink logs through `tracing`; tests install a recording
//! sink to assert on what was sent.

/// Number of token characters preserved when eliding for logs.
const TOKEN_PREVIEW_CHARS: usize = 8;

/// Structured view of one outgoing submission.
#[derive(Debug, Clone)]
pub struct RequestRecord {
    pub endpoint: String,
    /// Elided token preview; never the full credential.
    pub auth_preview: String,
    pub filename: String,
    pub queue: String,
    pub username: String,
    pub pdf_bytes: usize,
}

/// Structured view of the response to one submission, if any arrived.
#[derive(Debug, Clone)]
pub struct ResponseRecord {
    pub status: u16,
    /// Response header name/value pairs; values that are not valid UTF-8
    /// are dropped.
    pub headers: Vec<(String, String)>,
    pub body_excerpt: String,
}

/// Observer for submission traffic.
pub trait DiagnosticsSink: Send + Sync {
    fn on_request(&self, record: &RequestRecord);
    fn on_response(&self, record: &ResponseRecord);
}

/// Default sink: structured `tracing` events at debug level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn on_request(&self, record: &RequestRecord) {
        tracing::debug!(
            endpoint = %record.endpoint,
            auth = %record.auth_preview,
            filename = %record.filename,
            queue = %record.queue,
            username = %record.username,
            pdf_bytes = record.pdf_bytes,
            "Submitting print job"
        );
    }

    fn on_response(&self, record: &ResponseRecord) {
        tracing::debug!(
            status = record.status,
            headers = record.headers.len(),
            body = %record.body_excerpt,
            "Print API responded"
        );
    }
}

/// Elide an auth token to a short prefix for logging.
///
/// An empty token reads as `(none)`; anything else keeps at most the
/// first eight characters followed by `...`.
pub fn elide_token(token: &str) -> String {
    if token.is_empty() {
        "(none)".to_string()
    } else {
        let preview: String = token.chars().take(TOKEN_PREVIEW_CHARS).collect();
        format!("{preview}...")
    }
}
