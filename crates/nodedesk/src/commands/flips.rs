use clap::ArgMatches;
use tracing::{error, info};

use nodedesk_core::{Command, Event};

use super::helpers::dispatch_command;

pub(crate) fn handle_flips_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let command = match matches.subcommand_name() {
        Some("clear") => Command::ClearFlips,
        Some("archive") => Command::ArchiveFlips,
        _ => {
            error!(event = "cli.flips.command_unknown");
            return Err("Unknown flips command".into());
        }
    };

    info!(event = "cli.flips_started", command = ?command);

    for event in dispatch_command(matches, command)? {
        match event {
            Event::FlipsCleared { count } => println!("Removed {} flip(s)", count),
            Event::FlipsArchived { count } => println!("Archived {} flip(s)", count),
            _ => {}
        }
    }

    info!(event = "cli.flips_completed");
    Ok(())
}
