use crate::errors::DeskError;

#[derive(Debug, thiserror::Error)]
pub enum NodeSettingsError {
    #[error("Failed to save node settings: {message}")]
    SaveFailed { message: String },

    #[error("Node settings lock poisoned")]
    LockPoisoned,
}

impl DeskError for NodeSettingsError {
    fn error_code(&self) -> &'static str {
        match self {
            NodeSettingsError::SaveFailed { .. } => "NODE_SETTINGS_SAVE_FAILED",
            NodeSettingsError::LockPoisoned => "NODE_SETTINGS_LOCK_POISONED",
        }
    }
}
