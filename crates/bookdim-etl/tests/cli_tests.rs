//! CLI smoke tests for the bookdim-etl binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_describes_the_pipeline() {
    Command::cargo_bin("bookdim-etl")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dimensional table ETL"))
        .stdout(predicate::str::contains("--max-retries"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("bookdim-etl")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookdim-etl"));
}

#[test]
fn test_unknown_flag_fails() {
    Command::cargo_bin("bookdim-etl")
        .unwrap()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
