//! End-to-end tests for the `mario` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `mario` with logging and config isolated from the developer's machine.
fn mario(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mario").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("DRILLS_PYRAMID__MARKER")
        .env("NO_COLOR", "1")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path());
    cmd
}

#[test]
fn three_rows() {
    let home = TempDir::new().unwrap();
    mario(&home)
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout("How many rows?   #\n ##\n###\n");
}

#[test]
fn one_row() {
    let home = TempDir::new().unwrap();
    mario(&home)
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout("How many rows? #\n");
}

#[test]
fn reprompts_until_at_least_one() {
    let home = TempDir::new().unwrap();
    mario(&home)
        .write_stdin("0\n-4\nten\n2\n")
        .assert()
        .success()
        .stdout(format!("{} #\n##\n", "How many rows? ".repeat(4)));
}

#[test]
fn marker_flag() {
    let home = TempDir::new().unwrap();
    mario(&home)
        .args(["--marker", "*"])
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout("How many rows?  *\n**\n");
}

#[test]
fn marker_from_config_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("drills.toml");
    fs::write(&path, "[pyramid]\nmarker = \"@\"\n").unwrap();

    mario(&home)
        .arg("--config")
        .arg(&path)
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout("How many rows?  @\n@@\n");
}

#[test]
fn marker_from_environment() {
    let home = TempDir::new().unwrap();
    mario(&home)
        .env("DRILLS_PYRAMID__MARKER", "+")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout("How many rows?  +\n++\n");
}

#[test]
fn bad_config_marker_is_config_error() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("drills.toml");
    fs::write(&path, "[pyramid]\nmarker = \"<>\"\n").unwrap();

    mario(&home)
        .arg("--config")
        .arg(&path)
        .write_stdin("2\n")
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("pyramid.marker"));
}

#[test]
fn missing_config_file_is_config_error() {
    let home = TempDir::new().unwrap();
    mario(&home)
        .args(["--config", "/no/such/drills.toml"])
        .assert()
        .code(4);
}

#[test]
fn verbose_logs_go_to_stderr() {
    let home = TempDir::new().unwrap();
    mario(&home)
        .arg("-v")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout("How many rows?  #\n##\n")
        .stderr(predicate::str::contains("rendering pyramid"));
}

#[test]
fn closed_input_fails_with_user_error() {
    let home = TempDir::new().unwrap();
    mario(&home)
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("How many rows?"))
        .stderr(predicate::str::contains("echo 8 | mario"))
        .stderr(predicate::str::contains("cash").not());
}
