//! Integration tests for the `stamp` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the parse and
//! now subcommands through the actual binary, including stdin piping,
//! output modes, error handling, and a parse/format pipeline roundtrip.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Parse subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_datetime_argument() {
    Command::cargo_bin("stamp")
        .unwrap()
        .args(["parse", "2016-02-01T00:00:00-11:00"])
        .assert()
        .success()
        .stdout("2016-02-01T11:00:00.000Z\n");
}

#[test]
fn parse_datetime_from_stdin() {
    Command::cargo_bin("stamp")
        .unwrap()
        .arg("parse")
        .write_stdin("2016-04-05T10:01:04.555Z\n")
        .assert()
        .success()
        .stdout("2016-04-05T10:01:04.555Z\n");
}

#[test]
fn parse_date_is_midnight_utc() {
    Command::cargo_bin("stamp")
        .unwrap()
        .args(["parse", "2016-12-17"])
        .assert()
        .success()
        .stdout("2016-12-17T00:00:00.000Z\n");
}

#[test]
fn parse_time_keeps_clock_time() {
    // The date comes from the wall clock; the UTC clock time is fixed.
    Command::cargo_bin("stamp")
        .unwrap()
        .args(["parse", "11:00:12Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("T11:00:12.000Z"));
}

#[test]
fn parse_form_flag_overrides_detection() {
    Command::cargo_bin("stamp")
        .unwrap()
        .args(["parse", "--form", "time", "11:00:12Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("T11:00:12.000Z"));
}

#[test]
fn parse_millis_flag_prints_epoch_millis() {
    Command::cargo_bin("stamp")
        .unwrap()
        .args(["parse", "--millis", "2016-02-01T00:00:00Z"])
        .assert()
        .success()
        .stdout("1454284800000\n");
}

#[test]
fn parse_json_flag_prints_record() {
    Command::cargo_bin("stamp")
        .unwrap()
        .args(["parse", "--json", "2016-02-01T00:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"millis\":1454284800000"))
        .stdout(predicate::str::contains("2016-02-01T00:00:00.000Z"));
}

#[test]
fn parse_json_output_is_valid_json() {
    let output = Command::cargo_bin("stamp")
        .unwrap()
        .args(["parse", "--json", "2017-01-07T11:25:00+01:00"])
        .output()
        .expect("parse --json should run");
    assert!(output.status.success());

    let record: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("output must be valid JSON");
    assert_eq!(record["rfc3339"], "2017-01-07T10:25:00.000Z");
    assert_eq!(record["input"], "2017-01-07T11:25:00+01:00");
}

#[test]
fn parse_invalid_input_fails() {
    Command::cargo_bin("stamp")
        .unwrap()
        .args(["parse", "definitely-not-a-date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn parse_millis_and_json_conflict() {
    Command::cargo_bin("stamp")
        .unwrap()
        .args(["parse", "--millis", "--json", "2016-12-17"])
        .assert()
        .failure();
}

// ─────────────────────────────────────────────────────────────────────────────
// Now subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn now_prints_datetime_shape() {
    Command::cargo_bin("stamp")
        .unwrap()
        .arg("now")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z\n$").unwrap());
}

#[test]
fn now_date_form() {
    Command::cargo_bin("stamp")
        .unwrap()
        .args(["now", "--form", "date"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{4}-\d{2}-\d{2}\n$").unwrap());
}

#[test]
fn now_time_form() {
    Command::cargo_bin("stamp")
        .unwrap()
        .args(["now", "--form", "time"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{2}:\d{2}:\d{2}\.\d{3}Z\n$").unwrap());
}

// ─────────────────────────────────────────────────────────────────────────────
// Roundtrip
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn now_output_parses_back_unchanged() {
    let now_output = Command::cargo_bin("stamp")
        .unwrap()
        .arg("now")
        .output()
        .expect("now should succeed");
    assert!(now_output.status.success());
    let text = String::from_utf8(now_output.stdout).expect("output should be UTF-8");

    Command::cargo_bin("stamp")
        .unwrap()
        .arg("parse")
        .write_stdin(text.clone())
        .assert()
        .success()
        .stdout(text);
}

// ─────────────────────────────────────────────────────────────────────────────
// Edge cases
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    Command::cargo_bin("stamp")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("now"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("stamp")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("unrecognized")));
}

#[test]
fn parse_empty_stdin_fails() {
    Command::cargo_bin("stamp")
        .unwrap()
        .arg("parse")
        .write_stdin("")
        .assert()
        .failure();
}
