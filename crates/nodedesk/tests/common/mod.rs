//! Shared sandbox for CLI integration tests.
//!
//! Every run gets its own HOME, working directory and settings file so tests
//! never touch the real `~/.nodedesk`.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    /// A sandbox whose project config points the data dir inside it.
    pub fn new() -> Self {
        Self::with_config("")
    }

    /// A sandbox with `extra` appended to the project config.
    pub fn with_config(extra: &str) -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(root.path().join("home")).expect("Failed to create home dir");
        fs::create_dir_all(root.path().join("work/.nodedesk")).expect("Failed to create config dir");

        let sandbox = Self { root };
        let config = format!(
            "[storage]\ndata_dir = {:?}\n{}",
            sandbox.data_dir().display().to_string(),
            extra
        );
        sandbox.write_project_config(&config);
        sandbox
    }

    pub fn write_project_config(&self, content: &str) {
        fs::write(self.workdir().join(".nodedesk/config.toml"), content)
            .expect("Failed to write project config");
    }

    pub fn workdir(&self) -> PathBuf {
        self.root.path().join("work")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.path().join("settings.json")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_nodedesk"))
            .current_dir(self.workdir())
            .env("HOME", self.root.path().join("home"))
            .env("NODEDESK_SETTINGS_FILE", self.settings_file())
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .expect("Failed to execute nodedesk")
    }

    pub fn run_ok(&self, args: &[&str]) -> Output {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "nodedesk {:?} failed with exit code {:?}. stderr: {}",
            args,
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn write_json(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(path, content).expect("Failed to write file");
}
