//! Integration tests for the send and list commands (CLI)

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixtures_dir, remind, write_config};

const QUOTES: [&str; 3] = ["Quote 1", "Quote 2", "Quote 3"];

fn fixture(name: &str) -> String {
    fixtures_dir().join(name).display().to_string()
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    remind(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn unknown_variant_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    remind(&home)
        .args(["send", "--variant", "fancy"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("fancy"));
}

#[test]
fn completions_are_generated() {
    let home = TempDir::new().unwrap();
    remind(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("remind"));
}

// ============================================================================
// Send Tests
// ============================================================================

#[test]
fn send_prints_minimal_digest() {
    let home = TempDir::new().unwrap();
    let output = remind(&home)
        .args(["send", "-c", &fixture("quotes.txt"), "-n", "2", "--seed", "4"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parts: Vec<&str> = stdout.trim_end().split("\n\n").collect();
    assert_eq!(parts.len(), 2);
    assert_ne!(parts[0], parts[1]);
    assert!(parts.iter().all(|p| QUOTES.contains(p)));
}

#[test]
fn send_with_same_seed_is_reproducible() {
    let home = TempDir::new().unwrap();
    let run = || {
        remind(&home)
            .args(["send", "-c", &fixture("My Clippings.txt"), "-n", "2", "--seed", "99"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn send_reads_clippings_path_from_environment() {
    let home = TempDir::new().unwrap();
    remind(&home)
        .env("CLIPPINGS_FILE_PATH", fixture("quotes.txt"))
        .args(["send", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Quote "));
}

#[test]
fn send_without_clippings_path_explains_how_to_set_it() {
    let home = TempDir::new().unwrap();
    remind(&home)
        .arg("send")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CLIPPINGS_FILE_PATH"));
}

#[test]
fn send_missing_file_fails_with_path() {
    let home = TempDir::new().unwrap();
    remind(&home)
        .args(["send", "-c", "/nonexistent/My Clippings.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read clippings"))
        .stderr(predicate::str::contains("/nonexistent/My Clippings.txt"));
}

#[test]
fn send_more_than_available_fails_without_output() {
    let home = TempDir::new().unwrap();
    remind(&home)
        .args(["send", "-c", &fixture("quotes.txt"), "-n", "10"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Requested 10 records but only 3 are available",
        ));
}

#[test]
fn send_structured_uses_builtin_template() {
    let home = TempDir::new().unwrap();
    remind(&home)
        .args([
            "send",
            "-c",
            &fixture("My Clippings.txt"),
            "--variant",
            "structured",
            "-n",
            "4",
            "--seed",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "-- Meditations (Marcus Aurelius), page 17, added Friday, 9 June 2023 07:03:51",
        ))
        .stdout(predicate::str::contains("Don't live with broken windows."));
}

#[test]
fn send_structured_malformed_aborts_without_output() {
    let home = TempDir::new().unwrap();
    remind(&home)
        .args(["send", "-c", &fixture("malformed.txt"), "--variant", "structured", "-n", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Failed to extract page from clipping #2",
        ));
}

#[test]
fn send_structured_can_skip_malformed() {
    let home = TempDir::new().unwrap();
    remind(&home)
        .args([
            "send",
            "-c",
            &fixture("malformed.txt"),
            "--variant",
            "structured",
            "--skip-malformed",
            "-n",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fear is the mind-killer."));
}

#[test]
fn send_to_file_writes_full_message() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("digest.eml");

    remind(&home)
        .args([
            "send",
            "-c",
            &fixture("My Clippings.txt"),
            "--variant",
            "structured",
            "-n",
            "4",
            "--template",
            &fixture("digest.html"),
            "--via",
            "file",
            "-o",
            &out.display().to_string(),
            "--from",
            "remind@example.com",
            "--to",
            "me@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote digest to"));

    let message = std::fs::read_to_string(&out).unwrap();
    assert!(message.starts_with("From: remind@example.com\nTo: me@example.com\n"));
    assert!(message.contains("Subject: Here is your REMINDer\n"));
    assert!(message.contains("Content-Type: text/html; charset=utf-8\n"));
    assert!(message.contains("wonder &amp; live"));
}

#[test]
fn send_via_file_needs_output() {
    let home = TempDir::new().unwrap();
    remind(&home)
        .args(["send", "-c", &fixture("quotes.txt"), "-n", "1", "--via", "file"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("output path"));
}

#[cfg(unix)]
#[test]
fn send_via_configured_command() {
    let home = TempDir::new().unwrap();
    let mailbox = home.path().join("mailbox.txt");
    write_config(
        &home,
        &format!(
            r#"
[clippings]
path = "{clippings}"

[digest]
count = 1

[delivery]
method = "command"
subject = "Daily quote"
command = ["sh", "-c", "cat > '{mailbox}'"]
"#,
            clippings = fixture("quotes.txt"),
            mailbox = mailbox.display()
        ),
    );

    remind(&home)
        .env("RECIPIENT_EMAIL", "me@example.com")
        .env("SENDER_EMAIL", "remind@example.com")
        .arg("send")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sent digest to me@example.com via sh"));

    let mail = std::fs::read_to_string(mailbox).unwrap();
    assert!(mail.contains("From: remind@example.com\n"));
    assert!(mail.contains("Subject: Daily quote\n"));
    let body = mail.split("\n\n").nth(1).unwrap().trim_end();
    assert!(QUOTES.contains(&body));
}

#[cfg(unix)]
#[test]
fn send_reports_failing_mail_command() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        "[delivery]\nmethod = \"command\"\nrecipient = \"me@example.com\"\ncommand = [\"sh\", \"-c\", \"cat >/dev/null; echo refused >&2; exit 3\"]\n",
    );

    remind(&home)
        .args(["send", "-c", &fixture("quotes.txt"), "-n", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("status 3"))
        .stderr(predicate::str::contains("refused"));
}

#[test]
fn send_appends_to_log_file() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("logs").join("remind.log");

    remind(&home)
        .args([
            "-v",
            "--log-file",
            &log.display().to_string(),
            "send",
            "-c",
            &fixture("quotes.txt"),
            "-n",
            "1",
        ])
        .assert()
        .success();

    let logged = std::fs::read_to_string(log).unwrap();
    assert!(logged.contains("digest delivered"));
}

#[test]
fn debug_logging_reports_config_source_and_variant() {
    let home = TempDir::new().unwrap();
    remind(&home)
        .args(["-vv", "list", "-c", &fixture("quotes.txt")])
        .assert()
        .success()
        .stderr(predicate::str::contains("no config file, using defaults"))
        .stderr(predicate::str::contains("reading clippings"))
        .stderr(predicate::str::contains("\"minimal\""));

    write_config(&home, "[digest]\ncount = 1\n");
    remind(&home)
        .args(["-vv", "list", "-c", &fixture("quotes.txt")])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded config file"));
}

// ============================================================================
// List Tests
// ============================================================================

#[test]
fn list_prints_minimal_records_in_export_layout() {
    let home = TempDir::new().unwrap();
    remind(&home)
        .args(["list", "-c", &fixture("quotes.txt")])
        .assert()
        .success()
        .stdout("Quote 1\n==========\nQuote 2\n==========\nQuote 3\n==========\n");
}

#[test]
fn list_structured_json() {
    let home = TempDir::new().unwrap();
    let output = remind(&home)
        .args([
            "list",
            "-c",
            &fixture("My Clippings.txt"),
            "--variant",
            "structured",
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[1]["author"], "Daniel Kahneman");
    assert_eq!(records[1]["page"], "201");
}

#[test]
fn list_whitespace_export_prints_nothing() {
    let home = TempDir::new().unwrap();
    let blank = home.path().join("blank.txt");
    std::fs::write(&blank, "  \n\n\t\n").unwrap();

    remind(&home)
        .args(["list", "-c", &blank.display().to_string()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
