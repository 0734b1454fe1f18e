use clap::ArgMatches;
use tracing::error;

use nodedesk_core::events;

pub mod helpers;

mod flips;
mod invites;
mod settings;
mod status;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("settings", sub_matches)) => settings::handle_settings_command(sub_matches),
        Some(("flips", sub_matches)) => flips::handle_flips_command(sub_matches),
        Some(("invites", sub_matches)) => invites::handle_invites_command(sub_matches),
        Some(("status", sub_matches)) => status::handle_status_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}
