//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Directory holding test fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a fixture as text.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).expect("fixture should exist")
}

/// Copy a fixture into a fresh temp directory.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &path).expect("Failed to copy fixture");
    (temp_dir, path)
}

/// remind binary isolated from the user's config and environment.
///
/// The config file path points into `home`, which starts out empty.
pub fn remind(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("remind").expect("remind binary should build");
    cmd.env("REMIND_CONFIG", config_path(home))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("CLIPPINGS_FILE_PATH")
        .env_remove("SENDER_EMAIL")
        .env_remove("RECIPIENT_EMAIL");
    cmd
}

/// Config file location used by [`remind`].
pub fn config_path(home: &TempDir) -> PathBuf {
    home.path().join("config.toml")
}

/// Write a config file for [`remind`].
pub fn write_config(home: &TempDir, content: &str) {
    fs::write(config_path(home), content).expect("Failed to write config");
}
