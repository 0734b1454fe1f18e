use std::sync::Arc;

use tracing::{debug, error, info};

use crate::flips::FlipStore;
use crate::invites::InviteStore;
use crate::node::NodeSettings;
use crate::notify::{Notification, Notifier};
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;

/// Store implementation behind the settings screen.
///
/// Every collaborator is injected, so the same store drives the CLI against
/// the filesystem and tests against in-memory doubles.
pub struct SettingsStore {
    node: NodeSettings,
    flips: Arc<dyn FlipStore>,
    invites: Arc<dyn InviteStore>,
    notifier: Arc<dyn Notifier>,
    default_url: String,
}

impl SettingsStore {
    pub fn new(
        node: NodeSettings,
        flips: Arc<dyn FlipStore>,
        invites: Arc<dyn InviteStore>,
        notifier: Arc<dyn Notifier>,
        default_url: impl Into<String>,
    ) -> Self {
        Self {
            node,
            flips,
            invites,
            notifier,
            default_url: default_url.into(),
        }
    }

    pub fn node(&self) -> &NodeSettings {
        &self.node
    }

    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    fn save_node_address(&self, url: &str) -> Result<Vec<Event>, DispatchError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(DispatchError::EmptyNodeAddress);
        }

        self.node.set_url(url)?;
        self.notifier.notify(&Notification::with_body(
            "Settings saved!",
            format!("Now running at {}", url),
        ));
        Ok(vec![Event::NodeAddressChanged {
            url: url.to_string(),
        }])
    }
}

impl Store for SettingsStore {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let result = match cmd {
            Command::SaveNodeAddress { url } => self.save_node_address(&url),
            Command::UseDefaultNodeAddress => {
                let url = self.default_url.clone();
                self.save_node_address(&url)
            }
            Command::ClearFlips => self.flips.clear().map_err(DispatchError::from).map(|count| {
                self.notifier.notify(&Notification::new("Flips deleted"));
                vec![Event::FlipsCleared { count }]
            }),
            Command::ArchiveFlips => {
                self.flips
                    .archive()
                    .map_err(DispatchError::from)
                    .map(|count| {
                        self.notifier.notify(&Notification::new("Flips archived"));
                        vec![Event::FlipsArchived { count }]
                    })
            }
            Command::ClearInvites => {
                self.invites
                    .clear_invites()
                    .map_err(DispatchError::from)
                    .map(|count| {
                        self.notifier.notify(&Notification::new("Invites removed"));
                        vec![Event::InvitesCleared { count }]
                    })
            }
        };

        match &result {
            Ok(events) => info!(
                event = "core.state.dispatch_completed",
                event_count = events.len()
            ),
            Err(e) => error!(event = "core.state.dispatch_failed", error = %e),
        }

        result
    }
}
