//! Integration tests for the config command (CLI)

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{config_path, remind, write_config};

#[test]
fn config_path_honours_override() {
    let home = TempDir::new().unwrap();
    remind(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            config_path(&home).display().to_string(),
        ));
}

#[test]
fn config_show_without_file_prints_defaults() {
    let home = TempDir::new().unwrap();
    remind(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[digest]"))
        .stdout(predicate::str::contains("count = 3"))
        .stdout(predicate::str::contains("variant = \"minimal\""));
}

#[test]
fn config_show_includes_environment_overrides() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[digest]\ncount = 5\n");

    remind(&home)
        .env("RECIPIENT_EMAIL", "me@example.com")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("count = 5"))
        .stdout(predicate::str::contains("recipient = \"me@example.com\""));
}

#[test]
fn config_init_creates_file_once() {
    let home = TempDir::new().unwrap();

    remind(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file created"));
    assert!(config_path(&home).exists());

    remind(&home)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    remind(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn invalid_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[clippings]\nvariant = \"fancy\"\n");

    remind(&home)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));
}
