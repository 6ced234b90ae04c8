//! Dispatch of one job: obtain PDF bytes, submit, classify.
//!
//! Implements the session layer's [`Dispatch`] seam. A dispatch never
//! fails as a `Result`; every path, including timeouts and unreadable
//! upload files, produces a recorded [`JobResult`].

use std::sync::Arc;

use async_trait::async_trait;

use printseed_core::job::SUCCESS_STATUSES;
use printseed_core::{JobDescriptor, JobResult, PdfSource};
use printseed_docgen::{DocumentGenerator, PdfGenerator};
use printseed_session::Dispatch;

use crate::api::{PrintApi, SubmitOutcome};

const TIMEOUT_RESPONSE: &str = "Request timed out";

/// Production dispatcher: generated or uploaded PDFs over [`PrintApi`].
pub struct JobDispatcher {
    api: PrintApi,
    generator: Arc<dyn DocumentGenerator>,
}

impl JobDispatcher {
    pub fn new(api: PrintApi) -> Self {
        Self {
            api,
            generator: Arc::new(PdfGenerator),
        }
    }

    /// Substitute the document generator, for tests.
    pub fn with_generator(mut self, generator: Arc<dyn DocumentGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Produce the PDF bytes for one job.
    ///
    /// Uploads are re-read from disk per job so every copy carries the
    /// latest staged bytes; a read failure classifies as a failed job.
    async fn pdf_bytes(&self, job: &JobDescriptor) -> Result<Vec<u8>, String> {
        match job.source {
            PdfSource::Generate => Ok(self.generator.generate(
                &job.filename,
                &job.industry,
                job.min_pages,
                job.max_pages,
            )),
            PdfSource::Upload => {
                let path = job
                    .upload_ref
                    .as_ref()
                    .ok_or_else(|| "Upload job has no staged file".to_string())?;
                tokio::fs::read(path)
                    .await
                    .map_err(|e| format!("Failed to read staged upload: {e}"))
            }
        }
    }
}

#[async_trait]
impl Dispatch for JobDispatcher {
    async fn dispatch(
        &self,
        job: &JobDescriptor,
        endpoint: &str,
        auth_token: &str,
        job_number: usize,
    ) -> JobResult {
        let base = |success, status_code, response: String| JobResult {
            job_number,
            success,
            status_code,
            filename: job.filename.clone(),
            username: job.username.clone(),
            printer: job.printer.clone(),
            industry: job.industry.clone(),
            response,
        };

        let pdf_bytes = match self.pdf_bytes(job).await {
            Ok(bytes) => bytes,
            Err(reason) => {
                tracing::warn!(job_number, filename = %job.filename, error = %reason, "Skipping dispatch");
                return base(false, None, reason);
            }
        };

        match self.api.submit(endpoint, auth_token, job, pdf_bytes).await {
            SubmitOutcome::Response { status, body } => {
                base(SUCCESS_STATUSES.contains(&status), Some(status), body)
            }
            SubmitOutcome::TimedOut => base(false, None, TIMEOUT_RESPONSE.to_string()),
            SubmitOutcome::Transport(reason) => base(false, None, reason),
        }
    }
}
