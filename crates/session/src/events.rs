//! Progress events pushed to session observers.
//!
//! The runner publishes one [`SessionEvent`] per step onto the session's
//! broadcast channel. The core makes no wire-format assumption; the API
//! layer serializes these to whatever its transport needs (WebSocket
//! today). Observers that lag or disconnect catch up through the
//! pull-based status query — `results` is append-only, so nothing is lost.

use serde::Serialize;

use printseed_core::JobResult;

/// One discrete progress event for a session.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A job finished dispatching (successfully or not).
    JobResult {
        result: JobResult,
        progress_percent: f64,
    },
    /// The runner is about to wait before the next job.
    Delay { seconds: f64 },
    /// Terminal: the session was cancelled before queue exhaustion.
    Stopped {
        success_count: usize,
        completed: usize,
        total: usize,
    },
    /// Terminal: the queue was exhausted.
    Complete {
        success_count: usize,
        total: usize,
    },
}

impl SessionEvent {
    /// Whether this event ends the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionEvent::Stopped { .. } | SessionEvent::Complete { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let event = SessionEvent::Delay { seconds: 2.5 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "delay");
        assert_eq!(json["seconds"], 2.5);
    }

    #[test]
    fn terminal_events_are_terminal() {
        assert!(SessionEvent::Complete {
            success_count: 1,
            total: 1
        }
        .is_terminal());
        assert!(SessionEvent::Stopped {
            success_count: 0,
            completed: 0,
            total: 3
        }
        .is_terminal());
        assert!(!SessionEvent::Delay { seconds: 1.0 }.is_terminal());
    }
}
