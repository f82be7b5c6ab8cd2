//! Integration tests for the chanmod CLI
//!
//! Each test runs the binary against a temporary data directory and a
//! config path that does not exist, so no user state is touched.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a chanmod command bound to `dir`
fn chanmod(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("chanmod"));
    cmd.arg("--config")
        .arg(dir.join("config.toml"))
        .arg("--data-dir")
        .arg(dir.join("data"))
        .arg("--server")
        .arg("irc.test.net");
    cmd
}

// =============================================================================
// RULE MANAGEMENT
// =============================================================================

#[test]
fn test_add_show_delete_cycle() {
    let temp = TempDir::new().unwrap();

    chanmod(temp.path())
        .args(["rule", "add", "#test", "spam"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added /spam/ as a rule."));

    chanmod(temp.path())
        .args(["rule", "show", "#test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current channel rules: /spam/"));

    chanmod(temp.path())
        .args(["rule", "del", "#test", "spam"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted /spam/ from the rules."));

    chanmod(temp.path())
        .args(["rule", "del", "#test", "spam"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No such rule to delete."));
}

#[test]
fn test_rules_written_under_server_directory() {
    let temp = TempDir::new().unwrap();

    chanmod(temp.path()).args(["rule", "add", "#test", "spam"]).assert().success();

    let file = temp.path().join("data").join("irc.test.net").join("rules.toml");
    let content = fs::read_to_string(file).unwrap();
    assert!(content.contains("\"#test\""));
    assert!(content.contains("spam"));
}

#[test]
fn test_json_format_flag() {
    let temp = TempDir::new().unwrap();

    chanmod(temp.path())
        .args(["--format", "json", "rule", "add", "#test", "spam"])
        .assert()
        .success();

    assert!(temp.path().join("data/irc.test.net/rules.json").exists());
}

#[test]
fn test_invalid_pattern_fails() {
    let temp = TempDir::new().unwrap();

    chanmod(temp.path())
        .args(["rule", "add", "#test", "(spam"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern /(spam/"));

    chanmod(temp.path())
        .args(["rule", "show", "#test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/(spam/").not());
}

#[test]
fn test_json_reply() {
    let temp = TempDir::new().unwrap();

    let output = chanmod(temp.path())
        .args(["--json", "rule", "show", "#empty"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["reply"], "Current channel rules: ");
    assert_eq!(json["private"], false);
}

// =============================================================================
// LISTENING
// =============================================================================

#[test]
fn test_listen_escalates_and_exempts_admins() {
    let temp = TempDir::new().unwrap();
    chanmod(temp.path()).args(["rule", "add", "#test", "spam"]).assert().success();

    let output = chanmod(temp.path())
        .args(["listen", "--admin", "root"])
        .write_stdin(
            "#test alice this is SPAM\n\
             #test alice this is SPAM\n\
             #test root this is SPAM\n\
             #test bob hello there\n",
        )
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "KICK #test alice :First rule violation.",
            "MODE #test +b alice!*@*",
            "KICK #test alice :Second rule violation.",
        ]
    );
}

#[test]
fn test_listen_admins_from_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "admins = [\"root\"]\n").unwrap();
    chanmod(temp.path()).args(["rule", "add", "#test", "spam"]).assert().success();

    chanmod(temp.path())
        .arg("listen")
        .write_stdin("#test root spam spam spam\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_listen_skips_malformed_lines() {
    let temp = TempDir::new().unwrap();
    chanmod(temp.path()).args(["rule", "add", "#test", "spam"]).assert().success();

    chanmod(temp.path())
        .arg("listen")
        .write_stdin("garbage\n\n#test alice spam\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("KICK #test alice :First rule violation."));
}

#[test]
fn test_listen_survives_invalid_utf8() {
    let temp = TempDir::new().unwrap();
    chanmod(temp.path()).args(["rule", "add", "#test", "spam"]).assert().success();

    chanmod(temp.path())
        .arg("listen")
        .write_stdin(b"#test bob \xff\xfe bad\n#test alice spam\n".to_vec())
        .assert()
        .success()
        .stdout("KICK #test alice :First rule violation.\n");
}

#[test]
fn test_listen_json() {
    let temp = TempDir::new().unwrap();
    chanmod(temp.path()).args(["rule", "add", "#test", "spam"]).assert().success();

    let output = chanmod(temp.path())
        .args(["--json", "listen"])
        .write_stdin("#test alice spam\n#test alice spam\n")
        .output()
        .unwrap();

    let records: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["action"], "kick");
    assert_eq!(records[1]["action"], "ban");
    assert_eq!(records[2]["reason"], "Second rule violation.");
    assert_eq!(records[2]["channel"], "#test");
}

#[test]
fn test_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "admins = 3\n").unwrap();

    chanmod(temp.path())
        .args(["rule", "show", "#test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();

    chanmod(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!("chanmod ", env!("CARGO_PKG_VERSION"))));
}
