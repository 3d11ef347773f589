// Command-line surface tests: help, version and usage errors.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pylint_md() -> Command {
    Command::cargo_bin("pylint-md").expect("binary should exist")
}

#[test]
fn help_flag_prints_usage_and_succeeds() {
    pylint_md()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("--location"))
        .stdout(predicate::str::contains("--output_file"));
}

#[test]
fn version_flag_prints_name() {
    pylint_md()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pylint-md"));
}

#[test]
fn missing_location_is_a_usage_error() {
    pylint_md()
        .args(["-o", "report.md"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("required"));
}

#[test]
fn missing_output_file_is_a_usage_error() {
    let dir = TempDir::new().expect("temp dir should be created");
    pylint_md()
        .arg("-l")
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("required"));
}

#[test]
fn unknown_option_is_a_usage_error() {
    pylint_md()
        .args(["-l", ".", "-o", "report.md", "--bogus"])
        .assert()
        .code(2);
}

#[test]
fn output_file_and_check_are_mutually_exclusive() {
    pylint_md()
        .args(["-l", ".", "-o", "report.md", "--check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn nonexistent_location_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let out = dir.path().join("report.md");
    pylint_md()
        .env("HOME", dir.path())
        .arg("-l")
        .arg(dir.path().join("absent"))
        .arg("-o")
        .arg(&out)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
    assert!(!out.exists());
}
