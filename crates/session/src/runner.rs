//! The sequential execution loop for one session.
//!
//! Jobs are dispatched one at a time, in the queue's fixed shuffled
//! order. A failed dispatch is recorded and the loop moves on; only an
//! explicit cancellation request stops a session before queue
//! exhaustion. Cancellation is observed at the top of each iteration and
//! between half-second slices of the inter-job delay, so it takes effect
//! within one slice rather than one full delay.

use std::sync::Arc;
use std::time::Duration;

use printseed_core::delay::{compute_delay, CANCEL_POLL_SLICE};

use crate::dispatch::Dispatch;
use crate::events::SessionEvent;
use crate::session::{Session, SessionStatus};

/// Drive the session's queue to a terminal state.
///
/// Spawned at most once per session, by whichever stream attachment wins
/// the `Ready -> Running` transition. Staged upload files are removed on
/// every exit path.
pub async fn run(session: Arc<Session>, dispatcher: Arc<dyn Dispatch>) {
    let total = session.total_jobs();
    tracing::info!(
        session_id = %session.id,
        total,
        endpoint = %session.endpoint,
        "Session run started"
    );

    let outcome = run_loop(&session, dispatcher.as_ref(), total).await;
    cleanup_uploads(&session).await;

    tracing::info!(
        session_id = %session.id,
        status = ?outcome,
        completed = session.completed(),
        "Session run finished"
    );
}

async fn run_loop(session: &Session, dispatcher: &dyn Dispatch, total: usize) -> SessionStatus {
    for (i, job) in session.queue().iter().enumerate() {
        if session.cancel_requested() {
            return finish_stopped(session, total);
        }

        let job_number = i + 1;
        let result = dispatcher
            .dispatch(job, &session.endpoint, &session.auth_token, job_number)
            .await;

        tracing::debug!(
            session_id = %session.id,
            job_number,
            success = result.success,
            status_code = ?result.status_code,
            "Job dispatched"
        );

        session.record_result(result.clone());
        session.emit(SessionEvent::JobResult {
            result,
            progress_percent: job_number as f64 / total as f64 * 100.0,
        });

        if job_number < total {
            let delay = compute_delay(&session.delay, &mut rand::rng());
            session.emit(SessionEvent::Delay {
                seconds: round_tenths(delay.as_secs_f64()),
            });
            if !sleep_with_cancel(session, delay).await {
                return finish_stopped(session, total);
            }
        }
    }

    session.finish(SessionStatus::Complete);
    session.emit(SessionEvent::Complete {
        success_count: session.success_count(),
        total,
    });
    SessionStatus::Complete
}

fn finish_stopped(session: &Session, total: usize) -> SessionStatus {
    session.finish(SessionStatus::Stopped);
    session.emit(SessionEvent::Stopped {
        success_count: session.success_count(),
        completed: session.completed(),
        total,
    });
    SessionStatus::Stopped
}

/// Wait out `delay` in bounded slices, re-checking the cancel flag after
/// each. Returns `false` if cancellation was observed.
async fn sleep_with_cancel(session: &Session, delay: Duration) -> bool {
    let mut remaining = delay;
    while !remaining.is_zero() {
        let slice = remaining.min(CANCEL_POLL_SLICE);
        tokio::time::sleep(slice).await;
        remaining = remaining.saturating_sub(slice);
        if session.cancel_requested() {
            return false;
        }
    }
    true
}

/// Remove this session's staged upload files. Runs on every exit path;
/// a missing file is not an error.
pub(crate) async fn cleanup_uploads(session: &Session) {
    for path in session.staged_uploads() {
        match tokio::fs::remove_file(path).await {
            Ok(()) => {
                tracing::debug!(session_id = %session.id, path = %path.display(), "Removed staged upload");
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    session_id = %session.id,
                    path = %path.display(),
                    error = %e,
                    "Failed to remove staged upload"
                );
            }
        }
    }
}

fn round_tenths(secs: f64) -> f64 {
    (secs * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use printseed_core::{DelayConfig, JobDescriptor, JobResult, PdfSource, TimingMode};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub dispatcher: every odd job succeeds, every even job fails,
    /// with an optional per-job pause to widen cancellation windows.
    struct StubDispatch {
        calls: AtomicUsize,
        pause: Duration,
    }

    impl StubDispatch {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                pause: Duration::ZERO,
            }
        }

        fn with_pause(pause: Duration) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                pause,
            }
        }
    }

    #[async_trait]
    impl Dispatch for StubDispatch {
        async fn dispatch(
            &self,
            job: &JobDescriptor,
            _endpoint: &str,
            _auth_token: &str,
            job_number: usize,
        ) -> JobResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }
            let success = job_number % 2 == 1;
            JobResult {
                job_number,
                success,
                status_code: Some(if success { 200 } else { 503 }),
                filename: job.filename.clone(),
                username: job.username.clone(),
                printer: job.printer.clone(),
                industry: job.industry.clone(),
                response: String::new(),
            }
        }
    }

    fn session(jobs: usize, fixed_delay: f64) -> Arc<Session> {
        let queue = (0..jobs)
            .map(|i| JobDescriptor {
                industry: "healthcare".into(),
                username: "u1".into(),
                printer: "p1".into(),
                filename: format!("doc{i}.pdf"),
                source: PdfSource::Generate,
                min_pages: 1,
                max_pages: 1,
                upload_ref: None,
            })
            .collect();
        let delay = DelayConfig {
            mode: TimingMode::Fixed,
            fixed_delay,
            ..DelayConfig::default()
        };
        let s = Arc::new(Session::new(
            "http://localhost:9/print".into(),
            String::new(),
            delay,
            queue,
            Vec::new(),
        ));
        assert!(s.begin_run());
        s
    }

    #[tokio::test]
    async fn completes_queue_and_numbers_results_in_order() {
        let s = session(4, 0.0);
        run(Arc::clone(&s), Arc::new(StubDispatch::new())).await;

        let snap = s.snapshot();
        assert_eq!(snap.status, SessionStatus::Complete);
        assert_eq!(snap.completed, 4);
        for (i, result) in snap.results.iter().enumerate() {
            assert_eq!(result.job_number, i + 1);
        }
    }

    #[tokio::test]
    async fn emits_job_results_then_terminal_complete() {
        let s = session(2, 0.0);
        let mut rx = s.subscribe();
        run(Arc::clone(&s), Arc::new(StubDispatch::new())).await;

        let mut kinds = Vec::new();
        while let Ok(event) = rx.try_recv() {
            kinds.push(event);
        }
        // 2 jobs with no last delay: job_result, delay, job_result, complete.
        assert!(matches!(kinds[0], SessionEvent::JobResult { .. }));
        assert!(matches!(kinds[1], SessionEvent::Delay { .. }));
        assert!(matches!(kinds[2], SessionEvent::JobResult { .. }));
        assert!(matches!(
            kinds[3],
            SessionEvent::Complete {
                success_count: 1,
                total: 2
            }
        ));
        assert_eq!(kinds.len(), 4);
    }

    #[tokio::test]
    async fn progress_percent_reaches_one_hundred() {
        let s = session(2, 0.0);
        let mut rx = s.subscribe();
        run(Arc::clone(&s), Arc::new(StubDispatch::new())).await;

        let mut last_percent = 0.0;
        while let Ok(event) = rx.try_recv() {
            if let SessionEvent::JobResult {
                progress_percent, ..
            } = event
            {
                last_percent = progress_percent;
            }
        }
        assert_eq!(last_percent, 100.0);
    }

    #[tokio::test]
    async fn no_delay_event_after_last_job() {
        let s = session(1, 5.0);
        let mut rx = s.subscribe();
        run(Arc::clone(&s), Arc::new(StubDispatch::new())).await;

        let first = rx.try_recv().unwrap();
        assert!(matches!(first, SessionEvent::JobResult { .. }));
        let second = rx.try_recv().unwrap();
        assert!(matches!(second, SessionEvent::Complete { .. }));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn cancel_before_start_produces_zero_results() {
        let s = session(3, 0.0);
        s.request_cancel();
        run(Arc::clone(&s), Arc::new(StubDispatch::new())).await;

        let snap = s.snapshot();
        assert_eq!(snap.status, SessionStatus::Stopped);
        assert!(snap.results.is_empty());
    }

    #[tokio::test]
    async fn cancel_during_delay_truncates_after_completed_jobs() {
        // Long fixed delay; cancel arrives while the runner waits.
        let s = session(3, 30.0);
        let mut rx = s.subscribe();
        let runner = tokio::spawn(run(Arc::clone(&s), Arc::new(StubDispatch::new())));

        // Wait for the first job result, then cancel mid-delay.
        loop {
            if let SessionEvent::JobResult { .. } = rx.recv().await.unwrap() {
                break;
            }
        }
        s.request_cancel();
        runner.await.unwrap();

        let snap = s.snapshot();
        assert_eq!(snap.status, SessionStatus::Stopped);
        assert_eq!(snap.completed, 1);
        assert_eq!(snap.results.len(), 1);
    }

    #[tokio::test]
    async fn stopped_event_carries_counts() {
        let s = session(3, 30.0);
        let mut rx = s.subscribe();
        let runner = tokio::spawn(run(Arc::clone(&s), Arc::new(StubDispatch::new())));

        loop {
            if let SessionEvent::JobResult { .. } = rx.recv().await.unwrap() {
                break;
            }
        }
        s.request_cancel();
        runner.await.unwrap();

        // Drain to the terminal event.
        let mut stopped = None;
        while let Ok(event) = rx.try_recv() {
            if let SessionEvent::Stopped {
                success_count,
                completed,
                total,
            } = event
            {
                stopped = Some((success_count, completed, total));
            }
        }
        assert_eq!(stopped, Some((1, 1, 3)));
    }

    #[tokio::test]
    async fn single_failure_does_not_stop_the_loop() {
        // Job 2 fails (stub), jobs 1 and 3 succeed; all three run.
        let s = session(3, 0.0);
        let dispatcher = Arc::new(StubDispatch::new());
        run(Arc::clone(&s), Arc::clone(&dispatcher) as Arc<dyn Dispatch>).await;

        assert_eq!(dispatcher.calls.load(Ordering::SeqCst), 3);
        let snap = s.snapshot();
        assert_eq!(snap.status, SessionStatus::Complete);
        assert_eq!(snap.results.iter().filter(|r| r.success).count(), 2);
    }

    #[tokio::test]
    async fn cancel_during_dispatch_stops_before_next_job() {
        // The in-flight job finishes; the next one never starts.
        let s = session(5, 0.0);
        let dispatcher = Arc::new(StubDispatch::with_pause(Duration::from_millis(50)));
        let runner = tokio::spawn(run(
            Arc::clone(&s),
            Arc::clone(&dispatcher) as Arc<dyn Dispatch>,
        ));

        tokio::time::sleep(Duration::from_millis(20)).await;
        s.request_cancel();
        runner.await.unwrap();

        let snap = s.snapshot();
        assert_eq!(snap.status, SessionStatus::Stopped);
        assert_eq!(snap.results.len(), 1);
        assert_eq!(dispatcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cleanup_removes_staged_uploads() {
        let dir = std::env::temp_dir().join(format!("printseed-test-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let staged = dir.join("upload.pdf");
        tokio::fs::write(&staged, b"%PDF-1.4").await.unwrap();

        let queue = vec![JobDescriptor {
            industry: "legal".into(),
            username: "u1".into(),
            printer: "p1".into(),
            filename: "doc.pdf".into(),
            source: PdfSource::Upload,
            min_pages: 1,
            max_pages: 1,
            upload_ref: Some(staged.clone()),
        }];
        let s = Arc::new(Session::new(
            "http://localhost:9/print".into(),
            String::new(),
            DelayConfig {
                mode: TimingMode::Fixed,
                fixed_delay: 0.0,
                ..DelayConfig::default()
            },
            queue,
            vec![staged.clone()],
        ));
        s.begin_run();

        run(Arc::clone(&s), Arc::new(StubDispatch::new())).await;

        assert!(!staged.exists());
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
