//! Wire-level client for the print ingestion endpoint.
//!
//! One job is one `POST` of a multipart form: the PDF bytes as a file
//! part plus `queue`, `copies`, and `username` text fields. The raw
//! auth token goes in the `Authorization` header verbatim, with no
//! scheme prefix, and only when it is non-empty.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};

use printseed_core::job::response_excerpt;
use printseed_core::JobDescriptor;

use crate::diagnostics::{elide_token, DiagnosticsSink, RequestRecord, ResponseRecord, TracingSink};

/// Per-request timeout for a single submission.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const COPIES: &str = "1";

/// What came back from one submission attempt, before classification.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// An HTTP response arrived; the body is already excerpted.
    Response { status: u16, body: String },
    /// The request timed out.
    TimedOut,
    /// Connection-level failure (refused, DNS, TLS, ...).
    Transport(String),
}

/// Thin client over one `reqwest::Client`.
///
/// Cheap to clone; the underlying connection pool and diagnostics sink
/// are shared.
#[derive(Clone)]
pub struct PrintApi {
    http: reqwest::Client,
    sink: Arc<dyn DiagnosticsSink>,
}

impl PrintApi {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Custom per-request timeout, used by tests to keep the timeout
    /// path fast.
    pub fn with_timeout(timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the diagnostics sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticsSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Submit one job's PDF bytes to the ingestion endpoint.
    pub async fn submit(
        &self,
        endpoint: &str,
        auth_token: &str,
        job: &JobDescriptor,
        pdf_bytes: Vec<u8>,
    ) -> SubmitOutcome {
        self.sink.on_request(&RequestRecord {
            endpoint: endpoint.to_string(),
            auth_preview: elide_token(auth_token),
            filename: job.filename.clone(),
            queue: job.printer.clone(),
            username: job.username.clone(),
            pdf_bytes: pdf_bytes.len(),
        });

        let file_part = match Part::bytes(pdf_bytes)
            .file_name(job.filename.clone())
            .mime_str("application/pdf")
        {
            Ok(part) => part,
            Err(e) => return SubmitOutcome::Transport(e.to_string()),
        };
        let form = Form::new()
            .part("file", file_part)
            .text("queue", job.printer.clone())
            .text("copies", COPIES)
            .text("username", job.username.clone());

        let mut request = self.http.post(endpoint).multipart(form);
        if !auth_token.is_empty() {
            request = request.header(AUTHORIZATION, auth_token);
        }

        match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let headers = response
                    .headers()
                    .iter()
                    .filter_map(|(name, value)| {
                        value
                            .to_str()
                            .ok()
                            .map(|v| (name.as_str().to_string(), v.to_string()))
                    })
                    .collect();
                let body = response.text().await.unwrap_or_default();
                let excerpt = response_excerpt(&body);
                self.sink.on_response(&ResponseRecord {
                    status,
                    headers,
                    body_excerpt: excerpt.clone(),
                });
                SubmitOutcome::Response {
                    status,
                    body: excerpt,
                }
            }
            Err(e) if e.is_timeout() => SubmitOutcome::TimedOut,
            Err(e) => SubmitOutcome::Transport(e.to_string()),
        }
    }
}

impl Default for PrintApi {
    fn default() -> Self {
        Self::new()
    }
}
