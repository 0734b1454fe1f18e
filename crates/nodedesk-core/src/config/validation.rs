use crate::config::types::DeskConfig;
use crate::errors::ConfigError;
use crate::poll::MAX_PERIOD;

/// Longest RPC timeout accepted, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Whether `url` looks like an HTTP(S) node address.
pub fn is_valid_node_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.chars().any(char::is_whitespace))
}

/// Validate a merged configuration.
pub fn validate_config(config: &DeskConfig) -> Result<(), ConfigError> {
    if let Some(url) = &config.node.default_url
        && !is_valid_node_url(url)
    {
        return Err(ConfigError::InvalidNodeUrl { url: url.clone() });
    }

    if config.node.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "node.timeout_secs must be greater than zero".to_string(),
        });
    }

    if let Some(secs) = config.node.timeout_secs
        && secs > MAX_TIMEOUT_SECS
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("node.timeout_secs must be at most {}", MAX_TIMEOUT_SECS),
        });
    }

    for (name, secs) in [
        ("polling.epoch_interval_secs", config.polling.epoch_interval_secs),
        ("polling.sync_interval_secs", config.polling.sync_interval_secs),
    ] {
        if let Some(secs) = secs
            && secs > MAX_PERIOD.as_secs()
        {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must be at most {}", name, MAX_PERIOD.as_secs()),
            });
        }
    }

    if let Some(dir) = &config.storage.data_dir
        && dir.as_os_str().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "storage.data_dir cannot be empty".to_string(),
        });
    }

    Ok(())
}
