//! Node-address store.
//!
//! [`NodeSettings`] is a cheap, cloneable handle around the address the
//! client talks to. Every clone sees writes made through any other clone,
//! so the RPC client picks up a saved address on its next call.

pub mod errors;
pub mod persistence;

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

pub use errors::NodeSettingsError;
pub use persistence::{load_node_url, save_node_url, settings_file_path};

/// Address the node listens on when nothing else is configured.
pub const DEFAULT_NODE_URL: &str = "http://localhost:9009";

#[derive(Debug, Clone)]
pub struct NodeSettings {
    url: Arc<RwLock<String>>,
    file: Option<PathBuf>,
}

impl NodeSettings {
    /// Settings that live only for this process.
    pub fn in_memory(url: impl Into<String>) -> Self {
        Self {
            url: Arc::new(RwLock::new(url.into())),
            file: None,
        }
    }

    /// Load from the default settings file, falling back to `default_url`.
    pub fn load(default_url: &str) -> Self {
        Self::load_from(settings_file_path(), default_url)
    }

    /// Load from `path`; later `set_url` calls write back to it.
    pub fn load_from(path: PathBuf, default_url: &str) -> Self {
        let url = load_node_url(&path).unwrap_or_else(|| default_url.to_string());
        Self {
            url: Arc::new(RwLock::new(url)),
            file: Some(path),
        }
    }

    pub fn url(&self) -> String {
        match self.url.read() {
            Ok(url) => url.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Point the client at a new address.
    ///
    /// File-backed settings are written before the in-memory value changes,
    /// so a failed save leaves both untouched.
    pub fn set_url(&self, url: &str) -> Result<(), NodeSettingsError> {
        if let Some(path) = &self.file {
            save_node_url(path, url)?;
        }

        let mut current = self
            .url
            .write()
            .map_err(|_| NodeSettingsError::LockPoisoned)?;
        *current = url.to_string();

        tracing::info!(event = "core.node.url_changed", url = url);
        Ok(())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}
