//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Only the
//! offline subcommands are exercised here; the network-backed pipeline is
//! covered by the core crate's mocked client tests.

use std::io::Write;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "dockwatch-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_help() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Dockwatch departure alert bot"));
}

#[test]
fn test_shift_at_fixed_time() {
    let config = write_config(
        r#"
[roster.shifts]
night = ["300", "400"]

[roster.days_off]
300 = [6]
"#,
    );

    // 2025-03-10 05:30 is the night shift's post-midnight stretch; the
    // reference day is Sunday 2025-03-09, so "300" is off.
    let (stdout, _, code) = run_cli(&[
        "shift",
        "--config",
        config.path().to_str().unwrap(),
        "--at",
        "10/03/2025 05:30",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Turno 3"));
    assert!(stdout.contains("2025-03-09"));
    assert!(stdout.contains("on duty: 400"));
}

#[test]
fn test_shift_rejects_malformed_time() {
    let config = write_config("");
    let (_, stderr, code) = run_cli(&[
        "shift",
        "--config",
        config.path().to_str().unwrap(),
        "--at",
        "tomorrow-ish",
    ]);
    assert!(code != 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_config_show_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let (stdout, _, code) = run_cli(&[
        "config",
        "show",
        "--config",
        missing.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("worksheet = \"Base Pending Tratado\""));
    assert!(stdout.contains("range = \"A:F\""));
}

#[test]
fn test_run_without_env_fails_cleanly() {
    let config = write_config("");
    let output = Command::new("cargo")
        .args(["run", "-p", "dockwatch-cli", "--"])
        .args(["run", "--config", config.path().to_str().unwrap()])
        .env_remove("DOCKWATCH_WEBHOOK_URL")
        .env_remove("DOCKWATCH_SPREADSHEET_ID")
        .env_remove("DOCKWATCH_SHEET_CREDENTIALS")
        .output()
        .expect("Failed to execute CLI command");

    assert!(output.status.code().unwrap_or(-1) != 0);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DOCKWATCH_WEBHOOK_URL"));
}
