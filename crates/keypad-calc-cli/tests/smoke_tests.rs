//! Smoke tests for the keypad-calc binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn keypad_calc() -> Command {
    let mut cmd = Command::cargo_bin("keypad-calc").expect("keypad-calc binary should exist");
    cmd.env_remove("RUST_LOG").env_remove("KEYPAD_CALC_CONFIG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    keypad_calc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_help_flag() {
    keypad_calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--keys"))
        .stdout(predicate::str::contains("--precision"));
}

// ============================================================================
// Scripted Mode
// ============================================================================

#[test]
fn test_keys_addition() {
    keypad_calc()
        .args(["--keys", "12 + 3 ="])
        .assert()
        .success()
        .stdout("15\n");
}

#[test]
fn test_keys_chained_left_to_right() {
    keypad_calc()
        .args(["--keys", "6 / 3 x 4 ="])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_keys_pending_operation_prints_history() {
    keypad_calc()
        .args(["--keys", "7 -"])
        .assert()
        .success()
        .stdout("7\n7 −\n");
}

#[test]
fn test_keys_formatting() {
    keypad_calc()
        .args(["--keys", "1 / 3 ="])
        .assert()
        .success()
        .stdout("0.3333333\n");
}

#[test]
fn test_keys_divide_by_zero() {
    keypad_calc()
        .args(["--keys", "5 / 0 ="])
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::contains("Error: Cannot divide by zero"));
}

#[test]
fn test_keys_unknown_key_fails() {
    keypad_calc()
        .args(["--keys", "1 + banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key: banana"));
}

#[test]
fn test_precision_flag() {
    keypad_calc()
        .args(["--precision", "2", "--keys", "2 / 3 ="])
        .assert()
        .success()
        .stdout("0.67\n");
}

#[test]
fn test_precision_out_of_range() {
    keypad_calc()
        .args(["--precision", "99", "--keys", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("precision 99 exceeds maximum of 15"));
}

#[test]
fn test_json_output() {
    keypad_calc()
        .args(["--keys", "4 x 5 =", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""display": "20""#))
        .stdout(predicate::str::contains(r#""expression": "4 × 5""#));
}

#[test]
fn test_json_requires_keys() {
    keypad_calc().arg("--json").assert().failure();
}

// ============================================================================
// Config File
// ============================================================================

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keypad.json");
    fs::write(&path, r#"{"precision": 3}"#).unwrap();

    keypad_calc()
        .arg("--config")
        .arg(&path)
        .args(["--keys", "2 / 3 ="])
        .assert()
        .success()
        .stdout("0.667\n");
}

#[test]
fn test_config_file_tape_too_large() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keypad.json");
    fs::write(&path, r#"{"tape_capacity": 18446744073709551615}"#).unwrap();

    keypad_calc()
        .arg("--config")
        .arg(&path)
        .args(["--keys", "1 + 1 ="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tape capacity 18446744073709551615 exceeds maximum of 10000"));
}

#[test]
fn test_keys_overflow_reports_and_continues() {
    let huge = "9".repeat(400);
    keypad_calc()
        .args(["--keys", &format!("{huge} x 5 + 3 =")])
        .assert()
        .success()
        .stdout("8\n")
        .stderr(predicate::str::contains("Error: Number is too large"));
}

#[test]
fn test_config_file_missing() {
    keypad_calc()
        .args(["--config", "/nonexistent/keypad.json", "--keys", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
