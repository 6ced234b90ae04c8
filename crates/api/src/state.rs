use std::sync::Arc;

use printseed_session::{Dispatch, SessionRegistry};

use crate::config::ServerConfig;
use crate::settings::SettingsStore;
use crate::uploads::UploadStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// In-memory session registry.
    pub registry: Arc<SessionRegistry>,
    /// Dispatcher the runner uses for outbound print submissions.
    pub dispatcher: Arc<dyn Dispatch>,
    /// Persisted default endpoint/token settings.
    pub settings: Arc<SettingsStore>,
    /// Staged source PDF uploads.
    pub uploads: Arc<UploadStore>,
}
