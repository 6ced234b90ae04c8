//! Job descriptors and dispatch results.
//!
//! A [`JobDescriptor`] is one planned unit of submission work, created
//! during queue construction and immutable afterwards. A [`JobResult`] is
//! the recorded outcome of attempting one submission; failures are data,
//! not errors — a failed dispatch never aborts a session.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Number of characters of the response body kept in a [`JobResult`].
pub const RESPONSE_EXCERPT_CHARS: usize = 500;

/// HTTP status codes the print ingestion API returns on acceptance.
pub const SUCCESS_STATUSES: &[u16] = &[200, 201, 202];

/// Where the PDF bytes for a job come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PdfSource {
    /// A synthetic PDF is generated per job.
    Generate,
    /// Bytes are read from a previously staged upload, per job.
    Upload,
}

/// One planned print-job submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDescriptor {
    /// Industry tag selecting content templates (not a security boundary).
    pub industry: String,
    /// Submitting user identity, echoed to the target API.
    pub username: String,
    /// Target printer queue name.
    pub printer: String,
    /// Document filename; always ends in `.pdf` (see [`normalize_pdf_filename`]).
    pub filename: String,
    pub source: PdfSource,
    /// Page-count range used only when `source` is [`PdfSource::Generate`].
    pub min_pages: u32,
    pub max_pages: u32,
    /// Staged source file, required when `source` is [`PdfSource::Upload`].
    pub upload_ref: Option<PathBuf>,
}

/// The recorded outcome of one dispatch attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResult {
    /// 1-based execution order within the session, not queue-build order.
    pub job_number: usize,
    /// True iff an HTTP response arrived with status 200, 201 or 202.
    pub success: bool,
    /// `None` on timeout or transport-level failure.
    pub status_code: Option<u16>,
    pub filename: String,
    pub username: String,
    pub printer: String,
    pub industry: String,
    /// First 500 characters of the response body, or an error description.
    pub response: String,
}

/// Ensure a filename ends in `.pdf`, case-insensitively.
///
/// `"report"` becomes `"report.pdf"`; `"report.PDF"` is left unchanged —
/// the extension is never doubled.
pub fn normalize_pdf_filename(name: &str) -> String {
    if name.to_lowercase().ends_with(".pdf") {
        name.to_string()
    } else {
        format!("{name}.pdf")
    }
}

/// Truncate a response body to [`RESPONSE_EXCERPT_CHARS`] characters.
///
/// Operates on characters rather than bytes so a multi-byte body can
/// never be split mid-codepoint.
pub fn response_excerpt(body: &str) -> String {
    body.chars().take(RESPONSE_EXCERPT_CHARS).collect()
}
