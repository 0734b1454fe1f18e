//! nodedesk-core: Core library for a node operator's desk
//!
//! This library provides the business logic behind the nodedesk CLI: the
//! persisted node address, local flip and invite caches, and periodic
//! node status polling.
//!
//! # Main Entry Points
//!
//! - [`poll`] - Interval runner and the periodic-poll adapter
//! - [`state`] - Settings commands dispatched through a [`Store`]
//! - [`rpc`] - JSON-RPC client and fetch pairs for node methods
//! - [`status`] - Epoch and transaction monitors
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod flips;
pub mod invites;
pub mod logging;
pub mod node;
pub mod notify;
pub mod poll;
pub mod rpc;
pub mod state;
pub mod status;

// Re-export commonly used types at crate root for convenience
pub use config::DeskConfig;
pub use flips::{FlipStore, FsFlipStore};
pub use invites::{FsInviteStore, InviteStore};
pub use node::{DEFAULT_NODE_URL, NodeSettings};
pub use notify::{DesktopNotifier, Notification, Notifier};
pub use poll::{Cadence, FetchPair, IntervalRunner, PollError, Poller, Trigger};
pub use rpc::{HttpRpcClient, RpcClient, RpcError, RpcState};
pub use state::{Command, DispatchError, Event, SettingsStore, Store};
pub use status::{EpochMonitor, SyncMonitor};

// Re-export logging initialization
pub use logging::init_logging;
