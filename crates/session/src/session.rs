//! One seeding session: its queue, results, and state machine.
//!
//! State machine: `Ready -> Running -> {Complete | Stopping -> Stopped}`.
//! `Ready -> Running` happens when the first observer attaches; `Stopping`
//! is entered by a cancellation request against a running session and
//! resolved to `Stopped` by the runner at its next check point. Terminal
//! states are `Stopped` and `Complete`.
//!
//! Mutable fields live behind a per-session mutex that is only held for
//! short synchronous sections, never across an `.await`.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

use printseed_core::types::Timestamp;
use printseed_core::{DelayConfig, JobDescriptor, JobResult};

use crate::events::SessionEvent;

/// Broadcast capacity for progress events; a lagging observer falls back
/// to the status query rather than stalling the runner.
const EVENT_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Ready,
    Running,
    Stopping,
    Stopped,
    Complete,
}

impl SessionStatus {
    /// Terminal states never transition again and make the session
    /// eligible for eviction after the grace window.
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Stopped | SessionStatus::Complete)
    }
}

/// Mutable session state, guarded by [`Session::state`].
struct SessionState {
    status: SessionStatus,
    results: Vec<JobResult>,
    completed: usize,
    cancel_requested: bool,
    finished_at: Option<Timestamp>,
}

/// One run of a job queue from creation to terminal state.
pub struct Session {
    pub id: Uuid,
    pub created_at: Timestamp,
    pub endpoint: String,
    pub auth_token: String,
    pub delay: DelayConfig,
    /// Fixed after creation: shuffled once at build time, never reordered.
    queue: Vec<JobDescriptor>,
    /// Staged upload files to delete when the run finishes.
    staged_uploads: Vec<PathBuf>,
    state: Mutex<SessionState>,
    events: broadcast::Sender<SessionEvent>,
}

/// Point-in-time view for the pull-based status query.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub status: SessionStatus,
    pub total: usize,
    pub completed: usize,
    pub cancel_requested: bool,
    pub results: Vec<JobResult>,
}

impl Session {
    pub fn new(
        endpoint: String,
        auth_token: String,
        delay: DelayConfig,
        queue: Vec<JobDescriptor>,
        staged_uploads: Vec<PathBuf>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            endpoint,
            auth_token,
            delay,
            queue,
            staged_uploads,
            state: Mutex::new(SessionState {
                status: SessionStatus::Ready,
                results: Vec::new(),
                completed: 0,
                cancel_requested: false,
                finished_at: None,
            }),
            events,
        }
    }

    pub fn queue(&self) -> &[JobDescriptor] {
        &self.queue
    }

    pub fn total_jobs(&self) -> usize {
        self.queue.len()
    }

    pub fn staged_uploads(&self) -> &[PathBuf] {
        &self.staged_uploads
    }

    /// Subscribe to this session's progress events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Publish a progress event. Zero receivers is not an error; the
    /// status query covers observers that were not listening.
    pub fn emit(&self, event: SessionEvent) {
        let _ = self.events.send(event);
    }

    /// Attempt the `Ready -> Running` transition.
    ///
    /// Returns `true` exactly once, for the attachment that must spawn
    /// the runner. Every later attachment sees `false` and only observes.
    pub fn begin_run(&self) -> bool {
        let mut state = self.lock_state();
        if state.status == SessionStatus::Ready {
            state.status = SessionStatus::Running;
            true
        } else {
            false
        }
    }

    /// Request cancellation. Monotonic and idempotent: the flag is set
    /// once; a running session moves to `Stopping`. The runner performs
    /// the actual stop at its next check point.
    pub fn request_cancel(&self) {
        let mut state = self.lock_state();
        if !state.cancel_requested {
            state.cancel_requested = true;
            if state.status == SessionStatus::Running {
                state.status = SessionStatus::Stopping;
            }
        }
    }

    pub fn cancel_requested(&self) -> bool {
        self.lock_state().cancel_requested
    }

    pub fn status(&self) -> SessionStatus {
        self.lock_state().status
    }

    /// Append a result and advance the completion counter.
    pub fn record_result(&self, result: JobResult) {
        let mut state = self.lock_state();
        state.results.push(result);
        state.completed = state.results.len();
    }

    /// Number of successful results so far.
    pub fn success_count(&self) -> usize {
        self.lock_state().results.iter().filter(|r| r.success).count()
    }

    pub fn completed(&self) -> usize {
        self.lock_state().completed
    }

    /// Move to a terminal state and stamp `finished_at` for eviction.
    pub fn finish(&self, status: SessionStatus) {
        debug_assert!(status.is_terminal());
        let mut state = self.lock_state();
        state.status = status;
        state.finished_at = Some(chrono::Utc::now());
    }

    pub fn finished_at(&self) -> Option<Timestamp> {
        self.lock_state().finished_at
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock_state();
        SessionSnapshot {
            session_id: self.id,
            status: state.status,
            total: self.queue.len(),
            completed: state.completed,
            cancel_requested: state.cancel_requested,
            results: state.results.clone(),
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, SessionState> {
        // A poisoned mutex means a panic mid-update; the state is a plain
        // value type, so continuing with it is safe.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
