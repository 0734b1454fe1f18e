use crate::errors::DeskError;

#[derive(Debug, thiserror::Error)]
pub enum InviteError {
    #[error("Failed to read invites file '{path}': {message}")]
    ReadFailed { path: String, message: String },

    #[error("Failed to write invites file '{path}': {message}")]
    WriteFailed { path: String, message: String },
}

impl DeskError for InviteError {
    fn error_code(&self) -> &'static str {
        match self {
            InviteError::ReadFailed { .. } => "INVITES_READ_FAILED",
            InviteError::WriteFailed { .. } => "INVITES_WRITE_FAILED",
        }
    }
}
