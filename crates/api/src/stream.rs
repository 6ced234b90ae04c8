//! WebSocket progress stream for one session.
//!
//! The stream is the execution driver: the first attachment wins the
//! `Ready -> Running` transition and spawns the runner; later and
//! reconnecting attachments only observe. A dropped socket never stops a
//! run — the runner is owned by its own task, and reconnecting clients
//! catch up through the pull-based status query.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast;
use uuid::Uuid;

use printseed_session::{runner, Session, SessionEvent, SessionStatus};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/v1/sessions/{id}/stream
///
/// Rejected with 404 before the upgrade when the session is unknown, so
/// clients get a plain HTTP error rather than a failed handshake.
pub async fn session_stream(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = state
        .registry
        .get(id)
        .await
        .ok_or(AppError::Core(printseed_core::CoreError::NotFound {
            entity: "Session",
            id: id.to_string(),
        }))?;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, session, state)))
}

/// Manage one attached observer socket.
///
/// Subscribes before attempting the run transition so the first events
/// cannot be missed, then forwards serialized events until a terminal
/// event or the peer disconnects.
async fn handle_socket(mut socket: WebSocket, session: Arc<Session>, state: AppState) {
    let session_id = session.id;
    let mut events = session.subscribe();

    if session.begin_run() {
        tracing::info!(session_id = %session_id, "Stream attached; starting runner");
        tokio::spawn(runner::run(
            Arc::clone(&session),
            Arc::clone(&state.dispatcher),
        ));
    } else {
        tracing::info!(session_id = %session_id, "Stream attached as observer");
    }

    // A late attach to a finished session would otherwise wait forever:
    // the run already emitted its terminal event. Replay it and close.
    if let Some(event) = terminal_event(&session) {
        tracing::info!(session_id = %session_id, "Stream attached after run finished");
        if let Ok(json) = serde_json::to_string(&event) {
            let _ = socket.send(Message::Text(json.into())).await;
        }
        let _ = socket.send(Message::Close(None)).await;
        return;
    }

    let (mut sink, mut stream) = socket.split();

    // Receiver task: drain inbound frames so close handshakes complete;
    // clients have nothing to say on this channel.
    let recv_task = tokio::spawn(async move {
        while let Some(result) = stream.next().await {
            match result {
                Ok(Message::Close(_)) | Err(_) => break,
                Ok(_) => {}
            }
        }
    });

    // Forward events until a terminal event or sink failure.
    loop {
        match events.recv().await {
            Ok(event) => {
                let terminal = event.is_terminal();
                let json = match serde_json::to_string(&event) {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::error!(session_id = %session_id, error = %e, "Failed to serialize event");
                        break;
                    }
                };
                if sink.send(Message::Text(json.into())).await.is_err() {
                    tracing::debug!(session_id = %session_id, "Stream sink closed");
                    break;
                }
                if terminal {
                    break;
                }
            }
            // Slow consumer: skip what was missed and keep following.
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(session_id = %session_id, skipped, "Stream lagged; skipping events");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }

    let _ = sink.send(Message::Close(None)).await;
    recv_task.abort();
    tracing::info!(session_id = %session_id, "Stream detached");
}

/// The terminal event a finished session already emitted, rebuilt from
/// its recorded state.
fn terminal_event(session: &Session) -> Option<SessionEvent> {
    match session.status() {
        SessionStatus::Complete => Some(SessionEvent::Complete {
            success_count: session.success_count(),
            total: session.total_jobs(),
        }),
        SessionStatus::Stopped => Some(SessionEvent::Stopped {
            success_count: session.success_count(),
            completed: session.completed(),
            total: session.total_jobs(),
        }),
        _ => None,
    }
}
