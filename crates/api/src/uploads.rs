//! Staging of uploaded source PDFs.
//!
//! Uploaded bytes are written under the configured upload directory keyed
//! by a fresh UUID; session creation resolves an `upload_id` back to the
//! staged path. Files are read-only after staging and removed by the
//! runner when their session finishes.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use printseed_core::CoreError;

/// Maps upload ids to staged files under one directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write uploaded bytes to a fresh staged file, returning its id.
    pub async fn stage(&self, bytes: &[u8]) -> Result<Uuid, CoreError> {
        if bytes.is_empty() {
            return Err(CoreError::Validation("Uploaded file is empty".into()));
        }
        let id = Uuid::new_v4();
        let path = self.path_for(id);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| CoreError::Persistence(format!("Failed to stage upload: {e}")))?;
        tracing::debug!(upload_id = %id, bytes = bytes.len(), "Upload staged");
        Ok(id)
    }

    /// Resolve an upload id to its staged path.
    pub async fn resolve(&self, id: Uuid) -> Result<PathBuf, CoreError> {
        let path = self.path_for(id);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            Ok(path)
        } else {
            Err(CoreError::NotFound {
                entity: "Upload",
                id: id.to_string(),
            })
        }
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.pdf"))
    }
}
