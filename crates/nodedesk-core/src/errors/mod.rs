use std::error::Error;

/// Base trait for all application errors
pub trait DeskError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type DeskResult<T> = Result<T, Box<dyn DeskError>>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found at '{path}'")]
    ConfigNotFound { path: String },

    #[error("Failed to parse config file: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid node URL '{url}': must start with http:// or https://")]
    InvalidNodeUrl { url: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DeskError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidNodeUrl { .. } => "INVALID_NODE_URL",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. }
                | ConfigError::InvalidNodeUrl { .. }
                | ConfigError::InvalidConfiguration { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desk_result() {
        let _result: DeskResult<i32> = Ok(42);
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::InvalidNodeUrl {
            url: "localhost:9009".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid node URL 'localhost:9009': must start with http:// or https://"
        );
        assert_eq!(error.error_code(), "INVALID_NODE_URL");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_config_parse_error() {
        let error = ConfigError::ConfigParseError {
            message: "invalid TOML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse config file: invalid TOML syntax"
        );
        assert_eq!(error.error_code(), "CONFIG_PARSE_ERROR");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_config_io_error_is_not_user_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ConfigError::from(io_err);
        assert_eq!(error.error_code(), "CONFIG_IO_ERROR");
        assert!(!error.is_user_error());
    }
}
