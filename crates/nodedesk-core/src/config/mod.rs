//! # Configuration System
//!
//! Hierarchical TOML configuration for nodedesk.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.nodedesk/config.toml`
//! 3. **Project config** - `./.nodedesk/config.toml`
//! 4. **CLI arguments** - `--default-url`, `--data-dir`, `--timeout` (highest priority)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use nodedesk_core::config::DeskConfig;
//!
//! fn example() -> Result<(), nodedesk_core::errors::ConfigError> {
//!     let config = DeskConfig::load_hierarchy()?;
//!     println!("default node: {}", config.node.default_url());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{DeskConfig, NodeConfig, PollingConfig, StorageConfig};
pub use validation::{is_valid_node_url, validate_config};

use crate::errors::ConfigError;

impl DeskConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Merge two configurations, with override_config taking precedence.
    pub fn merge(base: Self, override_config: Self) -> Self {
        loading::merge_configs(base, override_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_config(self)
    }
}
