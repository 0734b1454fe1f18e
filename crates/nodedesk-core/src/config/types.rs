//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```toml
//! [node]
//! default_url = "http://localhost:9009"
//! api_key = "my-node-key"
//!
//! [polling]
//! epoch_interval_secs = 60
//! sync_interval_secs = 10
//!
//! [storage]
//! data_dir = "/home/me/.nodedesk"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.nodedesk/config.toml`
/// 2. Project config: `./.nodedesk/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DeskConfig {
    #[serde(default)]
    pub node: NodeConfig,

    #[serde(default)]
    pub polling: PollingConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

/// Node connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NodeConfig {
    /// Address used by "use default" and when no address was saved yet.
    /// Default: `http://localhost:9009`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_url: Option<String>,

    /// API key sent with every RPC call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// RPC request timeout in seconds. Default: 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Status polling cadences. Zero disables the corresponding poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PollingConfig {
    /// Seconds between `dna_epoch` refreshes. Default: 60.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch_interval_secs: Option<u64>,

    /// Seconds between transaction lookups. Default: 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_interval_secs: Option<u64>,
}

/// Where local caches live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Default: `~/.nodedesk`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}
