//! Local invite store, kept as a JSON array in `invites.json`.

pub mod errors;

use std::path::{Path, PathBuf};

use serde_json::Value;

pub use errors::InviteError;

pub trait InviteStore: Send + Sync {
    /// Drop every stored invite. Returns how many were removed.
    fn clear_invites(&self) -> Result<usize, InviteError>;
}

#[derive(Debug, Clone)]
pub struct FsInviteStore {
    path: PathBuf,
}

impl FsInviteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/invites.json`
    pub fn in_data_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("invites.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> Result<Vec<Value>, InviteError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| InviteError::ReadFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| InviteError::ReadFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn write(&self, invites: &[Value]) -> Result<(), InviteError> {
        let write_failed = |message: String| InviteError::WriteFailed {
            path: self.path.display().to_string(),
            message,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| write_failed(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(invites).map_err(|e| write_failed(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| write_failed(e.to_string()))
    }
}

impl InviteStore for FsInviteStore {
    fn clear_invites(&self) -> Result<usize, InviteError> {
        // A corrupted file is still cleared; the count is unknown then.
        let count = match self.list() {
            Ok(invites) => invites.len(),
            Err(e) => {
                tracing::warn!(
                    event = "core.invites.list_failed",
                    path = %self.path.display(),
                    error = %e
                );
                0
            }
        };

        self.write(&[])?;

        tracing::info!(
            event = "core.invites.clear_completed",
            path = %self.path.display(),
            count = count
        );
        Ok(count)
    }
}
