//! Integration tests for `nodedesk settings`.

mod common;

use std::fs;

use common::{Sandbox, stderr, stdout};

#[test]
fn test_set_node_persists_and_reports() {
    let sandbox = Sandbox::new();

    let output = sandbox.run_ok(&["settings", "set-node", "  http://10.0.0.7:9009  "]);
    assert_eq!(
        stdout(&output).trim(),
        "Settings saved! Now running at http://10.0.0.7:9009"
    );

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(sandbox.settings_file()).unwrap()).unwrap();
    assert_eq!(saved["url"], "http://10.0.0.7:9009");

    let show = sandbox.run_ok(&["settings", "show"]);
    assert!(stdout(&show).contains("Node address:  http://10.0.0.7:9009"));
}

#[test]
fn test_use_default_resets_to_configured_default() {
    let sandbox = Sandbox::with_config("[node]\ndefault_url = \"http://192.168.1.5:9009\"\n");
    sandbox.run_ok(&["settings", "set-node", "http://10.0.0.7:9009"]);

    let output = sandbox.run_ok(&["settings", "use-default"]);
    assert_eq!(
        stdout(&output).trim(),
        "Settings saved! Now running at http://192.168.1.5:9009"
    );

    let show = sandbox.run_ok(&["settings", "show"]);
    assert!(stdout(&show).contains("Node address:  http://192.168.1.5:9009"));
}

#[test]
fn test_empty_node_address_is_rejected() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["settings", "set-node", "   "]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("Node address cannot be empty"),
        "Expected empty address error, got: {}",
        stderr(&output)
    );
    assert!(!stdout(&output).contains("Settings saved!"));
    assert!(!sandbox.settings_file().exists());
}
