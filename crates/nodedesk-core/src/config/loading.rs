//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.nodedesk/config.toml` (global user preferences)
//! 3. **Project config** - `./.nodedesk/config.toml` (directory-specific overrides)
//! 4. **CLI arguments** - `--default-url`, `--data-dir`, `--timeout` (highest priority)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{DeskConfig, NodeConfig, PollingConfig, StorageConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".nodedesk";
const CONFIG_FILE: &str = "config.toml";

/// Path of the user config file, if a home directory exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Path of the project config file under the current directory.
pub fn project_config_path() -> Result<PathBuf, ConfigError> {
    Ok(std::env::current_dir()?.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file cannot be parsed or the merged
/// configuration fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<DeskConfig, ConfigError> {
    let project = project_config_path()?;
    load_hierarchy_from(user_config_path().as_deref(), Some(&project))
}

/// Load and merge the given user and project config files over defaults.
pub fn load_hierarchy_from(
    user: Option<&Path>,
    project: Option<&Path>,
) -> Result<DeskConfig, ConfigError> {
    let mut config = DeskConfig::default();

    for path in [user, project].into_iter().flatten() {
        match load_config_file(path) {
            Ok(file_config) => {
                debug!(
                    event = "core.config.file_loaded",
                    path = %path.display()
                );
                config = merge_configs(config, file_config);
            }
            Err(ConfigError::ConfigNotFound { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<DeskConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: DeskConfig, override_config: DeskConfig) -> DeskConfig {
    DeskConfig {
        node: NodeConfig {
            default_url: override_config.node.default_url.or(base.node.default_url),
            api_key: override_config.node.api_key.or(base.node.api_key),
            timeout_secs: override_config.node.timeout_secs.or(base.node.timeout_secs),
        },
        polling: PollingConfig {
            epoch_interval_secs: override_config
                .polling
                .epoch_interval_secs
                .or(base.polling.epoch_interval_secs),
            sync_interval_secs: override_config
                .polling
                .sync_interval_secs
                .or(base.polling.sync_interval_secs),
        },
        storage: StorageConfig {
            data_dir: override_config.storage.data_dir.or(base.storage.data_dir),
        },
    }
}
