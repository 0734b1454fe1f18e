use clap::ArgMatches;
use tracing::{error, info};

use nodedesk_core::{Command, Event};

use super::helpers::dispatch_command;

pub(crate) fn handle_invites_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    if matches.subcommand_name() != Some("clear") {
        error!(event = "cli.invites.command_unknown");
        return Err("Unknown invites command".into());
    }

    info!(event = "cli.invites_clear_started");

    for event in dispatch_command(matches, Command::ClearInvites)? {
        if let Event::InvitesCleared { count } = event {
            println!("Removed {} invite(s)", count);
        }
    }

    info!(event = "cli.invites_clear_completed");
    Ok(())
}
