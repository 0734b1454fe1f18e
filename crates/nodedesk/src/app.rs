use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("nodedesk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Configure a node connection, manage local caches and watch node status")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("notify")
                .long("notify")
                .help("Also send a desktop notification when a change is applied")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("default-url")
                .long("default-url")
                .value_name("URL")
                .help("Default node address (overrides config)")
                .global(true),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_name("DIR")
                .help("Directory holding flips and invites (overrides config)")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECS")
                .help("RPC request timeout in seconds (overrides config)")
                .value_parser(value_parser!(u64))
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("settings")
                .about("Show or change the node address")
                .subcommand_required(true)
                .subcommand(
                    Command::new("show")
                        .about("Print the current node address and storage locations")
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .help("Output in JSON format")
                                .action(ArgAction::SetTrue)
                        )
                )
                .subcommand(
                    Command::new("set-node")
                        .about("Save a new node address")
                        .arg(
                            Arg::new("url")
                                .help("Node address, e.g. http://localhost:9009")
                                .required(true)
                                .index(1)
                        )
                )
                .subcommand(
                    Command::new("use-default")
                        .about("Reset the node address to the configured default")
                )
        )
        .subcommand(
            Command::new("flips")
                .about("Manage locally stored flips")
                .subcommand_required(true)
                .subcommand(Command::new("clear").about("Delete all local flips"))
                .subcommand(
                    Command::new("archive")
                        .about("Move all local flips into a timestamped archive folder")
                )
        )
        .subcommand(
            Command::new("invites")
                .about("Manage locally stored invites")
                .subcommand_required(true)
                .subcommand(Command::new("clear").about("Remove all local invites"))
        )
        .subcommand(
            Command::new("status")
                .about("Show the node's current epoch and optionally a transaction")
                .arg(
                    Arg::new("hash")
                        .long("hash")
                        .help("Transaction hash to look up")
                )
                .arg(
                    Arg::new("watch")
                        .long("watch")
                        .short('w')
                        .help("Keep polling and redraw until Ctrl+C")
                        .action(ArgAction::SetTrue)
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "nodedesk");
    }

    #[test]
    fn test_cli_set_node_command() {
        let matches = build_cli()
            .try_get_matches_from(vec!["nodedesk", "settings", "set-node", "http://10.0.0.2:9009"])
            .unwrap();

        let settings = matches.subcommand_matches("settings").unwrap();
        let set_node = settings.subcommand_matches("set-node").unwrap();
        assert_eq!(
            set_node.get_one::<String>("url").unwrap(),
            "http://10.0.0.2:9009"
        );
    }

    #[test]
    fn test_cli_set_node_requires_url() {
        let matches = build_cli().try_get_matches_from(vec!["nodedesk", "settings", "set-node"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_settings_requires_subcommand() {
        let matches = build_cli().try_get_matches_from(vec!["nodedesk", "settings"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_flips_subcommands() {
        for action in ["clear", "archive"] {
            let matches = build_cli()
                .try_get_matches_from(vec!["nodedesk", "flips", action])
                .unwrap();
            let flips = matches.subcommand_matches("flips").unwrap();
            assert_eq!(flips.subcommand_name(), Some(action));
        }
    }

    #[test]
    fn test_cli_invites_clear() {
        let matches = build_cli()
            .try_get_matches_from(vec!["nodedesk", "invites", "clear"])
            .unwrap();
        let invites = matches.subcommand_matches("invites").unwrap();
        assert_eq!(invites.subcommand_name(), Some("clear"));
    }

    #[test]
    fn test_cli_status_with_hash_and_watch() {
        let matches = build_cli()
            .try_get_matches_from(vec!["nodedesk", "status", "--hash", "0xabc", "--watch"])
            .unwrap();
        let status = matches.subcommand_matches("status").unwrap();
        assert_eq!(status.get_one::<String>("hash").unwrap(), "0xabc");
        assert!(status.get_flag("watch"));
    }

    #[test]
    fn test_cli_status_defaults() {
        let matches = build_cli()
            .try_get_matches_from(vec!["nodedesk", "status"])
            .unwrap();
        let status = matches.subcommand_matches("status").unwrap();
        assert!(status.get_one::<String>("hash").is_none());
        assert!(!status.get_flag("watch"));
    }

    #[test]
    fn test_cli_verbose_flag_default_false() {
        let matches = build_cli()
            .try_get_matches_from(vec!["nodedesk", "flips", "clear"])
            .unwrap();
        assert!(!matches.get_flag("verbose"));
        assert!(!matches.get_flag("notify"));
    }

    #[test]
    fn test_cli_config_overrides() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "nodedesk",
                "--default-url",
                "http://10.0.0.9:9009",
                "status",
                "--data-dir",
                "/tmp/desk",
                "--timeout",
                "3",
            ])
            .unwrap();
        let status = matches.subcommand_matches("status").unwrap();
        assert_eq!(
            status.get_one::<String>("default-url").unwrap(),
            "http://10.0.0.9:9009"
        );
        assert_eq!(
            status.get_one::<PathBuf>("data-dir").unwrap(),
            &PathBuf::from("/tmp/desk")
        );
        assert_eq!(*status.get_one::<u64>("timeout").unwrap(), 3);
    }

    #[test]
    fn test_cli_timeout_must_be_numeric() {
        let matches =
            build_cli().try_get_matches_from(vec!["nodedesk", "status", "--timeout", "soon"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(vec!["nodedesk", "flips", "clear", "-v", "--notify"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
        assert!(matches.get_flag("notify"));
    }
}
