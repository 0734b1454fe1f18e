use std::path::PathBuf;
use std::sync::Arc;

use clap::ArgMatches;
use tracing::{error, info, warn};

use nodedesk_core::config::{DeskConfig, NodeConfig, StorageConfig};
use nodedesk_core::{
    Command, DesktopNotifier, Event, FsFlipStore, FsInviteStore, NodeSettings, Notification,
    Notifier, SettingsStore, Store,
};

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> DeskConfig {
    match DeskConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.nodedesk/config.toml and ./.nodedesk/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            DeskConfig::default()
        }
    }
}

/// Config values given as global flags; unset flags leave fields `None`.
pub(crate) fn cli_overrides(matches: &ArgMatches) -> DeskConfig {
    DeskConfig {
        node: NodeConfig {
            default_url: matches.get_one::<String>("default-url").cloned(),
            api_key: None,
            timeout_secs: matches.get_one::<u64>("timeout").copied(),
        },
        storage: StorageConfig {
            data_dir: matches.get_one::<PathBuf>("data-dir").cloned(),
        },
        ..Default::default()
    }
}

/// Config files merged with command-line overrides, which win.
///
/// File problems fall back to defaults with a warning; an invalid override
/// is an error since the user typed it on this very command line.
pub(crate) fn load_config(matches: &ArgMatches) -> Result<DeskConfig, Box<dyn std::error::Error>> {
    let config = DeskConfig::merge(load_config_with_warning(), cli_overrides(matches));
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e);
        error!(event = "cli.config.override_invalid", error = %e);
        return Err(e.into());
    }
    Ok(config)
}

/// Prints every notification to stdout, and to the desktop with `--notify`.
pub(crate) struct CliNotifier {
    desktop: Option<DesktopNotifier>,
}

impl CliNotifier {
    pub(crate) fn new(desktop: bool) -> Self {
        Self {
            desktop: desktop.then_some(DesktopNotifier),
        }
    }
}

impl Notifier for CliNotifier {
    fn notify(&self, notification: &Notification) {
        match &notification.body {
            Some(body) => println!("{} {}", notification.title, body),
            None => println!("{}", notification.title),
        }
        if let Some(desktop) = &self.desktop {
            desktop.notify(notification);
        }
    }
}

pub(crate) fn build_settings_store(config: &DeskConfig, notify: bool) -> SettingsStore {
    let data_dir = config.data_dir();
    let default_url = config.node.default_url();

    SettingsStore::new(
        NodeSettings::load(default_url),
        Arc::new(FsFlipStore::in_data_dir(&data_dir)),
        Arc::new(FsInviteStore::in_data_dir(&data_dir)),
        Arc::new(CliNotifier::new(notify)),
        default_url,
    )
}

/// Dispatch one settings command against the on-disk stores.
pub(crate) fn dispatch_command(
    matches: &ArgMatches,
    command: Command,
) -> Result<Vec<Event>, Box<dyn std::error::Error>> {
    let notify = matches.get_flag("notify");
    let config = load_config(matches)?;
    let mut store = build_settings_store(&config, notify);

    info!(event = "cli.dispatch_started", command = ?command);

    match store.dispatch(command) {
        Ok(events) => {
            info!(event = "cli.dispatch_completed", events = events.len());
            Ok(events)
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            error!(event = "cli.dispatch_failed", error = %e);
            Err(e.into())
        }
    }
}
