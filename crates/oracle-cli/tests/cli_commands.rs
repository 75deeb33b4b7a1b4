//! End-to-end runs of the `oracle` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SINGLE_LEVEL: &str = r#"{
  "version": "1.0.0",
  "locale": "en-US",
  "levels": [
    {
      "key": "GLITCH",
      "label": "Glitch",
      "emoji": "?",
      "probability": 1.0,
      "color": "yellow",
      "style": "scanlines",
      "copy_examples": ["X"],
      "haptics": "buzz"
    }
  ]
}"#;

const HALF_TABLE: &str = r#"{
  "version": "1.0.0",
  "locale": "en-US",
  "levels": [
    {
      "key": "BASIC",
      "label": "Fine",
      "emoji": "-",
      "probability": 0.5,
      "color": "blue",
      "style": "calm_blue",
      "copy_examples": ["Steady."],
      "haptics": "neutral"
    }
  ]
}"#;

/// Write a levels document into a fresh temp directory.
fn levels_file(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("levels.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

fn oracle() -> Command {
    let mut cmd = Command::cargo_bin("oracle").unwrap();
    cmd.env_remove("ORACLE_FORTUNE_LEVELS");
    cmd
}

// ---------------------------------------------------------------------------
// luck
// ---------------------------------------------------------------------------

#[test]
fn luck_json_for_fixed_day() {
    oracle()
        .args(["luck", "--date", "2025-01-01", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""date": "2025-01-01""#)
                .and(predicate::str::contains(r#""LOVE": 2"#))
                .and(predicate::str::contains(r#""HEALTH": 3"#)),
        );
}

#[test]
fn luck_table_lists_every_metric() {
    oracle()
        .args(["luck", "--date", "2025-01-01"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Love")
                .and(predicate::str::contains("Money"))
                .and(predicate::str::contains("Career"))
                .and(predicate::str::contains("Health")),
        );
}

#[test]
fn luck_date_follows_offset_calendar() {
    oracle()
        .args(["luck", "--date", "2025-06-30", "--offset", "+14:00", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""date": "2025-06-30""#));
}

#[test]
fn luck_rejects_bad_date() {
    oracle()
        .args(["luck", "--date", "2025-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn invalid_offset_fails() {
    oracle()
        .args(["luck", "--offset", "tomorrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid UTC offset"));
}

// ---------------------------------------------------------------------------
// decide
// ---------------------------------------------------------------------------

#[test]
fn decide_is_deterministic() {
    let run = || {
        oracle()
            .args(["decide", "lunch?", "--at", "2025-01-01T12:34:56Z", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let first = run();
    assert_eq!(first, run());
    let text = String::from_utf8(first).unwrap();
    assert!(text.contains(r#""result": "YES""#), "{text}");
    assert!(text.contains(r#""question": "lunch?""#), "{text}");
}

#[test]
fn decide_without_question_omits_it() {
    oracle()
        .args(["decide", "--at", "2025-01-01T00:00:00Z", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("question").not());
}

#[test]
fn decide_plain_output() {
    oracle()
        .args(["decide", "lunch?", "--at", "2025-01-01T12:34:56Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lunch?").and(predicate::str::contains("YES")));
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_from_single_level_table() {
    let (_dir, path) = levels_file(SINGLE_LEVEL);
    oracle()
        .args(["draw", "--at", "2025-01-01T08:00:00Z", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Glitch").and(predicate::str::contains("X")));
}

#[test]
fn draw_honours_levels_env_var() {
    let (_dir, path) = levels_file(SINGLE_LEVEL);
    oracle()
        .env("ORACLE_FORTUNE_LEVELS", &path)
        .args(["draw", "--at", "2025-01-01T08:00:00Z", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""key": "GLITCH""#));
}

#[test]
fn draw_with_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    oracle()
        .args(["draw", "-c"])
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// ---------------------------------------------------------------------------
// levels
// ---------------------------------------------------------------------------

#[test]
fn levels_lists_bundled_table() {
    oracle()
        .arg("levels")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("ULTRA")
                .and(predicate::str::contains("ERROR"))
                .and(predicate::str::contains("bundled")),
        );
}

#[test]
fn levels_rejects_table_that_does_not_sum_to_one() {
    let (_dir, path) = levels_file(HALF_TABLE);
    oracle()
        .args(["levels", "-c"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid fortune level probabilities"));
}

#[test]
fn levels_rejects_malformed_json() {
    let (_dir, path) = levels_file("{ not json");
    oracle()
        .args(["levels", "-c"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to decode"));
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_reports_every_level() {
    oracle()
        .args(["stats", "--from", "2025-01-01", "-n", "200"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("200 days")
                .and(predicate::str::contains("SUPER"))
                .and(predicate::str::contains("GLITCH")),
        );
}

#[test]
fn stats_json_for_single_level_table() {
    let (_dir, path) = levels_file(SINGLE_LEVEL);
    oracle()
        .args(["stats", "--from", "2025-01-01", "-n", "30", "--json", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""days": 30"#)
                .and(predicate::str::contains(r#""observed": 1.0"#)),
        );
}

#[test]
fn stats_rejects_zero_days() {
    oracle()
        .args(["stats", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn stats_run_past_calendar_end_is_an_error() {
    oracle()
        .args(["stats", "--from", "9999-12-01", "-n", "100000000"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("error:")
                .and(predicate::str::contains("supported date range")),
        );
}

