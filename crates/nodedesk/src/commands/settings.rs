use std::path::PathBuf;

use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use nodedesk_core::node::settings_file_path;
use nodedesk_core::{Command, Event, NodeSettings};

use super::helpers::{dispatch_command, load_config};

#[derive(Serialize)]
struct SettingsOutput {
    node_url: String,
    default_url: String,
    settings_file: PathBuf,
    data_dir: PathBuf,
}

pub(crate) fn handle_settings_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("show", sub_matches)) => handle_show(sub_matches),
        Some(("set-node", sub_matches)) => {
            let url = sub_matches
                .get_one::<String>("url")
                .ok_or("Node address argument is required")?;
            apply(
                sub_matches,
                Command::SaveNodeAddress {
                    url: url.to_string(),
                },
            )
        }
        Some(("use-default", sub_matches)) => apply(sub_matches, Command::UseDefaultNodeAddress),
        _ => {
            error!(event = "cli.settings.command_unknown");
            Err("Unknown settings command".into())
        }
    }
}

fn handle_show(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let config = load_config(matches)?;
    let default_url = config.node.default_url().to_string();

    let output = SettingsOutput {
        node_url: NodeSettings::load(&default_url).url(),
        default_url,
        settings_file: settings_file_path(),
        data_dir: config.data_dir(),
    };

    info!(event = "cli.settings_show_completed", node_url = output.node_url.as_str());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Node address:  {}", output.node_url);
        println!("Default:       {}", output.default_url);
        println!("Settings file: {}", output.settings_file.display());
        println!("Data dir:      {}", output.data_dir.display());
    }

    Ok(())
}

fn apply(matches: &ArgMatches, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    for event in dispatch_command(matches, command)? {
        if let Event::NodeAddressChanged { url } = event {
            info!(event = "cli.settings_node_changed", url = url.as_str());
        }
    }
    Ok(())
}
