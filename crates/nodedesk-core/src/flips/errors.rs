use crate::errors::DeskError;

#[derive(Debug, thiserror::Error)]
pub enum FlipError {
    #[error("Failed to read flips directory '{path}': {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to remove flip '{path}': {source}")]
    RemoveFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to archive flip '{path}': {source}")]
    ArchiveFailed {
        path: String,
        source: std::io::Error,
    },
}

impl DeskError for FlipError {
    fn error_code(&self) -> &'static str {
        match self {
            FlipError::ReadFailed { .. } => "FLIPS_READ_FAILED",
            FlipError::RemoveFailed { .. } => "FLIPS_REMOVE_FAILED",
            FlipError::ArchiveFailed { .. } => "FLIPS_ARCHIVE_FAILED",
        }
    }
}
