//! Persisted default settings: target endpoint, auth token, and
//! per-industry folder filters.
//!
//! Stored as a single JSON file. The auth token is reversibly obfuscated
//! on disk (XOR + hex) so it does not sit in the file as plain text; this
//! is obfuscation only, NOT confidentiality — anyone with the file and
//! this source can recover the token. Read/write failures surface as
//! [`CoreError::Persistence`] and never touch in-flight sessions.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use printseed_core::CoreError;

/// Rolling XOR key for on-disk token obfuscation.
const OBFUSCATION_KEY: &[u8] = b"printseed";

/// Default settings applied to session creation when the request leaves
/// the endpoint empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub endpoint: String,
    /// Plain in memory and on the wire; obfuscated only on disk.
    #[serde(default)]
    pub auth_token: String,
    /// Industry name -> source folder filter for upload pickers.
    #[serde(default)]
    pub folder_filters: BTreeMap<String, String>,
}

/// On-disk shape; differs from [`Settings`] only in token encoding.
#[derive(Serialize, Deserialize)]
struct StoredSettings {
    #[serde(default)]
    endpoint: String,
    #[serde(default)]
    auth_token_obfuscated: String,
    #[serde(default)]
    folder_filters: BTreeMap<String, String>,
}

/// File-backed settings store. Writes are serialized behind a mutex so
/// concurrent PUTs cannot tear the file.
pub struct SettingsStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Read current settings; a missing file reads as the defaults.
    pub async fn load(&self) -> Result<Settings, CoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Settings::default());
            }
            Err(e) => {
                return Err(CoreError::Persistence(format!(
                    "Failed to read settings file: {e}"
                )));
            }
        };

        let stored: StoredSettings = serde_json::from_slice(&bytes)
            .map_err(|e| CoreError::Persistence(format!("Malformed settings file: {e}")))?;

        Ok(Settings {
            endpoint: stored.endpoint,
            auth_token: deobfuscate(&stored.auth_token_obfuscated)?,
            folder_filters: stored.folder_filters,
        })
    }

    /// Replace the persisted settings atomically (write temp, rename).
    pub async fn save(&self, settings: &Settings) -> Result<(), CoreError> {
        let _guard = self.write_lock.lock().await;

        let stored = StoredSettings {
            endpoint: settings.endpoint.clone(),
            auth_token_obfuscated: obfuscate(&settings.auth_token),
            folder_filters: settings.folder_filters.clone(),
        };
        let json = serde_json::to_vec_pretty(&stored)
            .map_err(|e| CoreError::Persistence(format!("Failed to encode settings: {e}")))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| CoreError::Persistence(format!("Failed to write settings file: {e}")))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| CoreError::Persistence(format!("Failed to replace settings file: {e}")))?;

        tracing::info!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}

/// XOR with a rolling key, hex-encoded. Reversible by construction.
fn obfuscate(token: &str) -> String {
    token
        .as_bytes()
        .iter()
        .zip(OBFUSCATION_KEY.iter().cycle())
        .map(|(b, k)| format!("{:02x}", b ^ k))
        .collect()
}

fn deobfuscate(hex: &str) -> Result<String, CoreError> {
    if hex.len() % 2 != 0 {
        return Err(CoreError::Persistence(
            "Malformed obfuscated token: odd length".into(),
        ));
    }
    let bytes: Result<Vec<u8>, _> = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
        .collect();
    let bytes =
        bytes.map_err(|e| CoreError::Persistence(format!("Malformed obfuscated token: {e}")))?;

    let plain: Vec<u8> = bytes
        .iter()
        .zip(OBFUSCATION_KEY.iter().cycle())
        .map(|(b, k)| b ^ k)
        .collect();
    String::from_utf8(plain)
        .map_err(|e| CoreError::Persistence(format!("Malformed obfuscated token: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn temp_store() -> SettingsStore {
        let path = std::env::temp_dir().join(format!("printseed-settings-{}.json", uuid::Uuid::new_v4()));
        SettingsStore::new(path)
    }

    #[test]
    fn obfuscation_round_trips() {
        for token in ["", "a", "secret-token-1234", "ünïcödé"] {
            assert_eq!(deobfuscate(&obfuscate(token)).unwrap(), token);
        }
    }

    #[test]
    fn obfuscated_form_is_not_the_plain_token() {
        let token = "secret-token";
        assert!(!obfuscate(token).contains(token));
    }

    #[test]
    fn odd_length_hex_is_rejected() {
        assert_matches!(deobfuscate("abc"), Err(CoreError::Persistence(_)));
    }

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let store = temp_store();
        let settings = store.load().await.unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = temp_store();
        let mut settings = Settings {
            endpoint: "http://printer.example/api/jobs".into(),
            auth_token: "tok-123".into(),
            folder_filters: BTreeMap::new(),
        };
        settings
            .folder_filters
            .insert("healthcare".into(), "/mnt/scans/medical".into());

        store.save(&settings).await.unwrap();
        assert_eq!(store.load().await.unwrap(), settings);

        tokio::fs::remove_file(&store.path).await.unwrap();
    }

    #[tokio::test]
    async fn token_is_not_plain_text_on_disk() {
        let store = temp_store();
        let settings = Settings {
            endpoint: "http://printer.example".into(),
            auth_token: "super-secret-token".into(),
            folder_filters: BTreeMap::new(),
        };
        store.save(&settings).await.unwrap();

        let raw = tokio::fs::read_to_string(&store.path).await.unwrap();
        assert!(!raw.contains("super-secret-token"));

        tokio::fs::remove_file(&store.path).await.unwrap();
    }

    #[tokio::test]
    async fn malformed_file_is_a_persistence_error() {
        let store = temp_store();
        tokio::fs::write(&store.path, b"not json").await.unwrap();
        assert_matches!(store.load().await, Err(CoreError::Persistence(_)));
        tokio::fs::remove_file(&store.path).await.unwrap();
    }
}
