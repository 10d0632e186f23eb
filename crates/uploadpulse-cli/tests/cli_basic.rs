//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Only
//! commands that need no network or stored credentials are exercised.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "uploadpulse-cli", "--"])
        .args(args)
        .env("UPLOADPULSE_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_help_lists_subcommands() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("evaluate"));
    assert!(stdout.contains("analytics"));
    assert!(stdout.contains("forecast"));
}

#[test]
fn test_config_show_is_valid_json() {
    let (stdout, _, code) = run_cli(&["config", "show"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("config show must print JSON");
    assert!(parsed["cadence"]["target_interval_days"].is_number());
}

#[test]
fn test_unknown_subcommand_fails() {
    let (_, _, code) = run_cli(&["definitely-not-a-command"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let (_, stderr, code) = run_cli(&["config", "set", "nope.nope", "1"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown config key"));
}
