use crate::errors::DeskError;
use crate::flips::FlipError;
use crate::invites::InviteError;
use crate::node::NodeSettingsError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Node address cannot be empty")]
    EmptyNodeAddress,
    #[error(transparent)]
    NodeSettings(#[from] NodeSettingsError),
    #[error(transparent)]
    Flips(#[from] FlipError),
    #[error(transparent)]
    Invites(#[from] InviteError),
}

impl DeskError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::EmptyNodeAddress => "NODE_ADDRESS_EMPTY",
            DispatchError::NodeSettings(e) => e.error_code(),
            DispatchError::Flips(e) => e.error_code(),
            DispatchError::Invites(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::EmptyNodeAddress => true,
            DispatchError::NodeSettings(e) => e.is_user_error(),
            DispatchError::Flips(e) => e.is_user_error(),
            DispatchError::Invites(e) => e.is_user_error(),
        }
    }
}
