use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::NodeSettingsError;

/// On-disk shape of `settings.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSettingsData {
    pub url: String,
}

/// Read the persisted node URL.
///
/// Returns `None` when the file is missing or unusable; a corrupted file is
/// logged at error level since the user's saved address is lost.
pub fn load_node_url(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<NodeSettingsData>(&content) {
            Ok(data) => Some(data.url),
            Err(e) => {
                tracing::error!(
                    event = "core.node.settings_parse_failed",
                    path = %path.display(),
                    error = %e,
                    "Node settings file contains invalid JSON - falling back to default address"
                );
                None
            }
        },
        Err(e) => {
            tracing::error!(
                event = "core.node.settings_load_failed",
                path = %path.display(),
                error = %e
            );
            None
        }
    }
}

pub fn save_node_url(path: &Path, url: &str) -> Result<(), NodeSettingsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| NodeSettingsError::SaveFailed {
            message: format!("Failed to create directory ({}): {}", parent.display(), e),
        })?;
    }

    let data = NodeSettingsData {
        url: url.to_string(),
    };
    let json =
        serde_json::to_string_pretty(&data).map_err(|e| NodeSettingsError::SaveFailed {
            message: format!("Failed to serialize node settings: {}", e),
        })?;

    std::fs::write(path, json).map_err(|e| NodeSettingsError::SaveFailed {
        message: format!("Failed to write settings file ({}): {}", path.display(), e),
    })?;

    tracing::info!(
        event = "core.node.settings_saved",
        path = %path.display(),
        url = url
    );

    Ok(())
}

/// Location of `settings.json`, overridable with `NODEDESK_SETTINGS_FILE`.
pub fn settings_file_path() -> PathBuf {
    if let Ok(path_str) = std::env::var("NODEDESK_SETTINGS_FILE")
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    match dirs::home_dir() {
        Some(home) => home.join(".nodedesk").join("settings.json"),
        None => {
            tracing::error!(
                event = "core.node.home_dir_not_found",
                fallback = ".",
                "Could not determine home directory - using current directory as fallback"
            );
            PathBuf::from(".").join(".nodedesk").join("settings.json")
        }
    }
}

#[doc(hidden)]
pub mod test_helpers {
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify NODEDESK_SETTINGS_FILE env var.
    pub static SETTINGS_FILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    /// RAII guard that removes NODEDESK_SETTINGS_FILE env var on drop.
    pub struct SettingsFileEnvGuard;

    impl SettingsFileEnvGuard {
        pub fn new(path: &std::path::Path) -> Self {
            // SAFETY: Caller must hold SETTINGS_FILE_ENV_LOCK to serialize access
            // from Rust test code.
            unsafe { std::env::set_var("NODEDESK_SETTINGS_FILE", path) };
            Self
        }
    }

    impl Drop for SettingsFileEnvGuard {
        fn drop(&mut self) {
            // SAFETY: Caller must hold SETTINGS_FILE_ENV_LOCK throughout guard lifetime.
            unsafe { std::env::remove_var("NODEDESK_SETTINGS_FILE") };
        }
    }
}
