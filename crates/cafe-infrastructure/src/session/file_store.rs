// ============================================================================
// Café Infrastructure - File Session Store
// File: crates/cafe-infrastructure/src/session/file_store.rs
// ============================================================================
//! Admin session persisted as a small JSON file

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use cafe_core::domain::{AdminRole, Session};
use cafe_core::error::ClientError;
use cafe_core::repositories::SessionStore;

/// On-disk layout; `user_info` is kept as a JSON string.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    auth_token: String,
    user_type: String,
    #[serde(default)]
    user_info: String,
}

impl From<&Session> for StoredSession {
    fn from(session: &Session) -> Self {
        Self {
            auth_token: session.auth_token.clone(),
            user_type: session.user_type.as_str().to_string(),
            user_info: session.user_info.to_string(),
        }
    }
}

pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(&self, text: &str) -> Option<Session> {
        let stored: StoredSession = match serde_json::from_str(text) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Ignoring unreadable session file {}: {}", self.path.display(), e);
                return None;
            }
        };

        if stored.auth_token.is_empty() {
            warn!("Ignoring session file {} without a token", self.path.display());
            return None;
        }
        let role = match stored.user_type.parse::<AdminRole>() {
            Ok(role) => role,
            Err(e) => {
                warn!("Ignoring session file {}: {}", self.path.display(), e);
                return None;
            }
        };

        Some(Session {
            auth_token: stored.auth_token,
            user_type: role,
            user_info: serde_json::from_str(&stored.user_info).unwrap_or(Value::Null),
        })
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, ClientError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ClientError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        Ok(self.decode(&text))
    }

    fn save(&self, session: &Session) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ClientError::Storage(format!("Failed to create {}: {}", parent.display(), e)))?;
        }

        let text = serde_json::to_string_pretty(&StoredSession::from(session))
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        fs::write(&self.path, text)
            .map_err(|e| ClientError::Storage(format!("Failed to write {}: {}", self.path.display(), e)))?;

        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Storage(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
