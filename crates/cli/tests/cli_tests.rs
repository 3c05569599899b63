//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

/// Nothing listens on the discard port, so every fetch fails fast.
const UNREACHABLE_URL: &str = "http://127.0.0.1:9/wiki/";

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("wikireader")
}

fn read_settings(path: &std::path::Path) -> serde_json::Value {
    let json = std::fs::read_to_string(path).expect("settings should be written");
    serde_json::from_str(&json).expect("settings should be JSON")
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--didyouknow"))
        .stdout(predicate::str::contains("--language"));
}

#[test]
fn test_cli_invalid_mode() {
    cmd()
        .args(["-m", "verbose", "rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mode"));
}

#[test]
fn test_cli_sections_are_exclusive() {
    cmd().args(["--news", "--today"]).assert().failure();
}

#[test]
fn test_cli_section_and_article_are_exclusive() {
    cmd().args(["--didyouknow", "rust"]).assert().failure();
}

#[test]
fn test_cli_search_requires_article() {
    cmd().arg("--search").assert().failure();
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wikireader"));
}

#[test]
fn test_cli_fetch_failure_exits_nonzero_without_output() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");

    cmd()
        .args(["--config", settings.to_str().unwrap(), "-u", UNREACHABLE_URL, "rust"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read Rust"));
}

#[test]
fn test_cli_settings_saved_after_failure() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");

    cmd()
        .args(["--config", settings.to_str().unwrap(), "-m", "terse", "-u", UNREACHABLE_URL, "--news"])
        .assert()
        .failure();

    let saved = read_settings(&settings);
    assert_eq!(saved["mode"], "terse");
    assert_eq!(saved["source_url"], UNREACHABLE_URL);
    assert_eq!(saved["language"], "en");
}

#[test]
fn test_cli_settings_remembered_between_runs() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");

    cmd()
        .args(["--config", settings.to_str().unwrap(), "-m", "full", "-u", UNREACHABLE_URL, "rust"])
        .assert()
        .failure();

    cmd()
        .args(["--config", settings.to_str().unwrap(), "--today"])
        .assert()
        .failure();

    let saved = read_settings(&settings);
    assert_eq!(saved["mode"], "full");
    assert_eq!(saved["source_url"], UNREACHABLE_URL);
}

#[test]
fn test_cli_corrupt_settings_are_replaced() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");
    std::fs::write(&settings, "[Output]\nmode = summary\n").unwrap();

    cmd()
        .args(["--config", settings.to_str().unwrap(), "-u", UNREACHABLE_URL, "rust"])
        .assert()
        .failure();

    let saved = read_settings(&settings);
    assert_eq!(saved["mode"], "summary");
    assert_eq!(saved["source_url"], UNREACHABLE_URL);
}

#[test]
fn test_cli_verbose() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");

    cmd()
        .args(["-v", "--config", settings.to_str().unwrap(), "-u", UNREACHABLE_URL, "rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wikireader"));
}
