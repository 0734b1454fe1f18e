use serde::{Deserialize, Serialize};

/// All settings actions that can be dispatched through the store.
///
/// Commands use owned types so they can be serialized and sent across
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Point the client at a new node address.
    SaveNodeAddress { url: String },
    /// Reset the node address to the configured default.
    UseDefaultNodeAddress,
    /// Delete every locally stored flip.
    ClearFlips,
    /// Move locally stored flips into the archive.
    ArchiveFlips,
    /// Delete every locally stored invite.
    ClearInvites,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serde_roundtrip() {
        let cmd = Command::SaveNodeAddress {
            url: "http://localhost:9010".to_string(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let deserialized: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, deserialized);
    }

    #[test]
    fn test_unit_command_json_shape() {
        assert_eq!(
            serde_json::to_string(&Command::ClearFlips).unwrap(),
            r#""ClearFlips""#
        );
    }
}
