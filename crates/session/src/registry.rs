//! The shared session registry.
//!
//! An explicit object constructed once at process start and passed by
//! reference wherever session access is needed — never module-level
//! state. The map guards its own lock; each session guards its mutable
//! fields separately, so cancellation and status queries arriving from
//! other tasks never contend with more than one session's runner.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use printseed_core::types::Timestamp;
use printseed_core::{build_queue, CoreError, DelayConfig, IndustryJobConfig};

use crate::session::{Session, SessionSnapshot, SessionStatus};

/// How long a terminal session stays queryable for late reconnection.
pub const TERMINAL_GRACE: Duration = Duration::from_secs(5 * 60);

/// How long a `Ready` session that was never attached may linger.
const STALE_READY_WINDOW: Duration = Duration::from_secs(60 * 60);

/// How often the eviction task scans the registry.
const EVICTION_INTERVAL: Duration = Duration::from_secs(30);

/// Everything needed to create one session.
#[derive(Debug, Clone)]
pub struct SessionSpec {
    pub endpoint: String,
    pub auth_token: String,
    pub delay: DelayConfig,
    pub industries: BTreeMap<String, IndustryJobConfig>,
}

/// Immediate acknowledgement returned by a cancellation request.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CancelReceipt {
    pub completed: usize,
    pub total: usize,
}

/// Map of session id -> live session.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, Arc<Session>>>,
    grace: Duration,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::with_grace(TERMINAL_GRACE)
    }

    /// Registry with a custom grace window (tests shrink it).
    pub fn with_grace(grace: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            grace,
        }
    }

    /// Validate the spec, build the shuffled queue, and register a new
    /// `Ready` session. Returns the session id and total job count;
    /// execution does not start here.
    pub async fn create<R: Rng + ?Sized>(
        &self,
        spec: SessionSpec,
        rng: &mut R,
    ) -> Result<(Uuid, usize), CoreError> {
        if spec.endpoint.trim().is_empty() {
            return Err(CoreError::Validation("URL is required".into()));
        }

        let queue = build_queue(&spec.industries, rng)?;
        let total = queue.len();
        let staged = staged_uploads(&spec.industries);

        let session = Arc::new(Session::new(
            spec.endpoint.trim().to_string(),
            spec.auth_token,
            spec.delay,
            queue,
            staged,
        ));
        let id = session.id;

        self.sessions.write().await.insert(id, session);
        tracing::info!(session_id = %id, total_jobs = total, "Session created");
        Ok((id, total))
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Session>> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Pull-based status query for reconnecting observers.
    pub async fn snapshot(&self, id: Uuid) -> Result<SessionSnapshot, CoreError> {
        let session = self.get(id).await.ok_or_else(|| not_found(id))?;
        Ok(session.snapshot())
    }

    /// Request cancellation and return an immediate progress snapshot.
    pub async fn request_cancel(&self, id: Uuid) -> Result<CancelReceipt, CoreError> {
        let session = self.get(id).await.ok_or_else(|| not_found(id))?;
        session.request_cancel();
        tracing::info!(session_id = %id, "Cancellation requested");
        Ok(CancelReceipt {
            completed: session.completed(),
            total: session.total_jobs(),
        })
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drop sessions whose time is up: terminal ones past the grace
    /// window, and `Ready` ones never attached within the stale window.
    /// Running/stopping sessions are never evicted.
    pub async fn evict_expired(&self, now: Timestamp) -> usize {
        let expired: Vec<Uuid> = {
            let sessions = self.sessions.read().await;
            sessions
                .values()
                .filter(|s| is_expired(s, now, self.grace))
                .map(|s| s.id)
                .collect()
        };

        if expired.is_empty() {
            return 0;
        }

        let mut evicted = 0;
        let mut never_ran: Vec<Arc<Session>> = Vec::new();
        {
            let mut sessions = self.sessions.write().await;
            for id in expired {
                // Re-check under the write lock; a status query cannot revive
                // a session but a racing run could have changed Ready state.
                let still_expired = sessions
                    .get(&id)
                    .is_some_and(|s| is_expired(s, now, self.grace));
                if !still_expired {
                    continue;
                }
                if let Some(session) = sessions.remove(&id) {
                    if session.status() == SessionStatus::Ready {
                        never_ran.push(session);
                    }
                    tracing::info!(session_id = %id, "Session evicted");
                    evicted += 1;
                }
            }
        }

        // The runner cleans up after any session that ran; a stale Ready
        // session never had a runner, so its staged uploads are removed here.
        for session in never_ran {
            crate::runner::cleanup_uploads(&session).await;
        }
        evicted
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn is_expired(session: &Session, now: Timestamp, grace: Duration) -> bool {
    match session.status() {
        SessionStatus::Stopped | SessionStatus::Complete => match session.finished_at() {
            Some(finished) => now - finished > chrono::Duration::from_std(grace).unwrap_or_default(),
            None => false,
        },
        SessionStatus::Ready => {
            now - session.created_at
                > chrono::Duration::from_std(STALE_READY_WINDOW).unwrap_or_default()
        }
        SessionStatus::Running | SessionStatus::Stopping => false,
    }
}

fn not_found(id: Uuid) -> CoreError {
    CoreError::NotFound {
        entity: "Session",
        id: id.to_string(),
    }
}

/// Distinct staged upload paths across all industries.
fn staged_uploads(industries: &BTreeMap<String, IndustryJobConfig>) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = industries
        .values()
        .filter_map(|c| c.upload_ref.clone())
        .collect();
    paths.sort();
    paths.dedup();
    paths
}

/// Run the eviction loop until `cancel` is triggered.
pub async fn run_eviction(registry: Arc<SessionRegistry>, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = EVICTION_INTERVAL.as_secs(),
        grace_secs = TERMINAL_GRACE.as_secs(),
        "Session eviction task started"
    );

    let mut interval = tokio::time::interval(EVICTION_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session eviction task stopping");
                break;
            }
            _ = interval.tick() => {
                let evicted = registry.evict_expired(chrono::Utc::now()).await;
                if evicted > 0 {
                    tracing::info!(evicted, "Evicted finished sessions");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use printseed_core::PdfSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spec(num_jobs: usize) -> SessionSpec {
        let mut industries = BTreeMap::new();
        industries.insert(
            "healthcare".to_string(),
            IndustryJobConfig {
                num_jobs,
                usernames: "u1,u2".into(),
                printers: "p1".into(),
                filenames: "doc".into(),
                pdf_source: PdfSource::Generate,
                min_pages: 1,
                max_pages: 1,
                upload_ref: None,
            },
        );
        SessionSpec {
            endpoint: "http://localhost:9/print".into(),
            auth_token: String::new(),
            delay: DelayConfig::default(),
            industries,
        }
    }

    #[tokio::test]
    async fn create_registers_a_ready_session() {
        let registry = SessionRegistry::new();
        let mut rng = StdRng::seed_from_u64(1);
        let (id, total) = registry.create(spec(3), &mut rng).await.unwrap();

        assert_eq!(total, 3);
        let snap = registry.snapshot(id).await.unwrap();
        assert_eq!(snap.status, SessionStatus::Ready);
        assert_eq!(snap.total, 3);
        assert_eq!(snap.completed, 0);
        assert!(!snap.cancel_requested);
    }

    #[tokio::test]
    async fn create_rejects_empty_endpoint() {
        let registry = SessionRegistry::new();
        let mut bad = spec(1);
        bad.endpoint = "   ".into();
        let err = registry
            .create(bad, &mut StdRng::seed_from_u64(1))
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("URL"));
        });
    }

    #[tokio::test]
    async fn create_rejects_zero_jobs() {
        let registry = SessionRegistry::new();
        let err = registry
            .create(spec(0), &mut StdRng::seed_from_u64(1))
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::NoJobs);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let registry = SessionRegistry::new();
        let err = registry.snapshot(Uuid::new_v4()).await.unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Session", .. });

        let err = registry.request_cancel(Uuid::new_v4()).await.unwrap_err();
        assert_matches!(err, CoreError::NotFound { .. });
    }

    #[tokio::test]
    async fn cancel_returns_immediate_counts() {
        let registry = SessionRegistry::new();
        let (id, _) = registry
            .create(spec(4), &mut StdRng::seed_from_u64(1))
            .await
            .unwrap();

        let receipt = registry.request_cancel(id).await.unwrap();
        assert_eq!(receipt.completed, 0);
        assert_eq!(receipt.total, 4);

        let snap = registry.snapshot(id).await.unwrap();
        assert!(snap.cancel_requested);
    }

    #[tokio::test]
    async fn terminal_sessions_are_evicted_after_grace() {
        let registry = SessionRegistry::with_grace(Duration::from_secs(60));
        let (id, _) = registry
            .create(spec(1), &mut StdRng::seed_from_u64(1))
            .await
            .unwrap();

        let session = registry.get(id).await.unwrap();
        session.finish(SessionStatus::Complete);

        // Within the grace window: still queryable.
        let now = chrono::Utc::now();
        assert_eq!(registry.evict_expired(now).await, 0);
        assert!(registry.get(id).await.is_some());

        // Past the grace window: gone.
        let later = now + chrono::Duration::seconds(120);
        assert_eq!(registry.evict_expired(later).await, 1);
        assert!(registry.get(id).await.is_none());
        assert_matches!(
            registry.snapshot(id).await.unwrap_err(),
            CoreError::NotFound { .. }
        );
    }

    #[tokio::test]
    async fn running_sessions_are_never_evicted() {
        let registry = SessionRegistry::with_grace(Duration::from_secs(0));
        let (id, _) = registry
            .create(spec(1), &mut StdRng::seed_from_u64(1))
            .await
            .unwrap();

        registry.get(id).await.unwrap().begin_run();

        let far_future = chrono::Utc::now() + chrono::Duration::days(30);
        assert_eq!(registry.evict_expired(far_future).await, 0);
        assert!(registry.get(id).await.is_some());
    }

    #[tokio::test]
    async fn stale_ready_sessions_are_evicted() {
        let registry = SessionRegistry::new();
        registry
            .create(spec(1), &mut StdRng::seed_from_u64(1))
            .await
            .unwrap();

        let now = chrono::Utc::now();
        assert_eq!(registry.evict_expired(now).await, 0);

        let later = now + chrono::Duration::hours(2);
        assert_eq!(registry.evict_expired(later).await, 1);
    }

    #[tokio::test]
    async fn evicting_a_stale_ready_session_removes_its_staged_uploads() {
        let dir = std::env::temp_dir().join(format!("printseed-evict-{}", Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let staged = dir.join("staged.pdf");
        tokio::fs::write(&staged, b"%PDF-1.4").await.unwrap();

        let mut upload_spec = spec(1);
        let industry = upload_spec.industries.get_mut("healthcare").unwrap();
        industry.pdf_source = PdfSource::Upload;
        industry.upload_ref = Some(staged.clone());

        let registry = SessionRegistry::new();
        registry
            .create(upload_spec, &mut StdRng::seed_from_u64(1))
            .await
            .unwrap();

        let later = chrono::Utc::now() + chrono::Duration::hours(2);
        assert_eq!(registry.evict_expired(later).await, 1);
        assert!(!staged.exists());
    }
}
