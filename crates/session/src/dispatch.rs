//! The seam between the runner and the HTTP dispatcher.

use async_trait::async_trait;

use printseed_core::{JobDescriptor, JobResult};

/// Executes one job descriptor against the target API.
///
/// Implementations must never fail the future for an expected per-job
/// problem: timeouts, refused connections, and non-2xx statuses are all
/// recorded inside the returned [`JobResult`].
#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(
        &self,
        job: &JobDescriptor,
        endpoint: &str,
        auth_token: &str,
        job_number: usize,
    ) -> JobResult;
}
