// Integration tests for the sentiment-report CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// argument handling, exit codes and stdout/stderr output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the sentiment-report binary.
fn sentiment_report() -> Command {
    Command::cargo_bin("sentiment-report").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    sentiment_report()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sentiment-report"));
}

#[test]
fn cli_help_flag() {
    sentiment_report()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("market-sentiment"));
}

#[test]
fn subcommand_is_required() {
    sentiment_report()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn show_rejects_unparseable_date() {
    sentiment_report()
        .args(["show", "--date", "next-tuesday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a recognised date"));
}

#[test]
fn show_rejects_unknown_format() {
    sentiment_report()
        .args(["show", "--format", "sarif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_and_verbose_conflict() {
    sentiment_report()
        .args(["-q", "-v", "thresholds"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
