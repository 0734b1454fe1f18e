//! Default values and resolved accessors for configuration types.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::types::{DeskConfig, NodeConfig, PollingConfig, StorageConfig};
use crate::node::DEFAULT_NODE_URL;
use crate::poll::Cadence;

pub const DEFAULT_EPOCH_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 10;
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 10;

fn cadence_from_secs(secs: u64) -> Cadence {
    if secs == 0 {
        Cadence::Disabled
    } else {
        Cadence::from_secs(secs)
    }
}

impl NodeConfig {
    pub fn default_url(&self) -> &str {
        self.default_url.as_deref().unwrap_or(DEFAULT_NODE_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_RPC_TIMEOUT_SECS))
    }
}

impl PollingConfig {
    pub fn epoch_cadence(&self) -> Cadence {
        cadence_from_secs(
            self.epoch_interval_secs
                .unwrap_or(DEFAULT_EPOCH_INTERVAL_SECS),
        )
    }

    pub fn sync_cadence(&self) -> Cadence {
        cadence_from_secs(self.sync_interval_secs.unwrap_or(DEFAULT_SYNC_INTERVAL_SECS))
    }
}

impl StorageConfig {
    /// Configured data dir, else `~/.nodedesk`, else `./.nodedesk`.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        match dirs::home_dir() {
            Some(home) => home.join(".nodedesk"),
            None => {
                tracing::warn!(
                    event = "core.config.home_dir_not_found",
                    fallback = ".",
                    "Could not determine home directory - using current directory as fallback"
                );
                PathBuf::from(".").join(".nodedesk")
            }
        }
    }
}

impl DeskConfig {
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir()
    }
}
