//! Integration tests for the sheetview CLI

use std::process::Command;

fn run_sheetview(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "sheetview", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_sheetview(&["--help"]);

    assert!(success);
    assert!(stdout.contains("sheetview"));
    assert!(stdout.contains("--query"));
    assert!(stdout.contains("--sort"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_sheetview(&["--version"]);

    assert!(success);
    assert!(stdout.contains("sheetview"));
}

#[test]
fn test_misconfigured_source_fails_with_warning() {
    let (stdout, _, success) = run_sheetview(&["not-a-published-link"]);

    assert!(!success);
    assert!(stdout.contains("Defina um link CSV publicado"));
}

#[test]
fn test_misconfigured_source_json_report() {
    let (stdout, _, success) =
        run_sheetview(&["not-a-published-link", "--output", "json"]);

    assert!(!success);
    assert!(stdout.contains("\"phase\""));
    assert!(stdout.contains("Uninitialized"));
    assert!(stdout.contains("\"severity\": \"warn\""));
}

#[test]
fn test_rejects_unknown_output_format() {
    let (_, stderr, success) = run_sheetview(&["http://example.invalid/x.csv", "--output", "xml"]);

    assert!(!success);
    assert!(stderr.contains("invalid value"));
}

#[test]
fn test_desc_requires_sort() {
    let (_, stderr, success) = run_sheetview(&["http://example.invalid/x.csv", "--desc"]);

    assert!(!success);
    assert!(stderr.contains("--sort"));
}
