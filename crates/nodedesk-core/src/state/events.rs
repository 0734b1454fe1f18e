use serde::{Deserialize, Serialize};

/// State changes produced by successfully dispatched commands.
///
/// Each variant describes what happened. Failures use the `Result` error
/// channel, not the event stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The client now talks to `url`.
    NodeAddressChanged { url: String },
    /// Local flips were deleted.
    FlipsCleared { count: usize },
    /// Local flips were moved to the archive.
    FlipsArchived { count: usize },
    /// Local invites were deleted.
    InvitesCleared { count: usize },
}
