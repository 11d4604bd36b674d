//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `gridslice` binary to verify that
//! argument parsing, help text, and error handling work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("gridslice").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("index"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gridslice"));
}

// ---------------------------------------------------------------------------
// demo / config
// ---------------------------------------------------------------------------

#[test]
fn demo_prints_every_expression() {
    cmd()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1. M\n"))
        .stdout(predicate::str::contains("2. M[1, 1]\n11\n"))
        .stdout(predicate::str::contains("16. M[-2::-2]"))
        .stdout(predicate::str::contains("21. M[[1, 4], [1, 4]]"));
}

#[test]
fn demo_respects_print_limits() {
    cmd()
        .args(["demo", "--max-rows", "1", "--max-cols", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[\n  0  ...   9\n\n ...\n\n 90  ...  99\n]"));
}

#[test]
fn config_prints_default_json() {
    cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rows\": 10"))
        .stdout(predicate::str::contains("\"expressions\""))
        .stdout(predicate::str::contains("\"max_rows\": null"));
}

#[test]
fn demo_nonexistent_config_errors() {
    cmd()
        .args(["demo", "--config", "/nonexistent/config.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

// ---------------------------------------------------------------------------
// index
// ---------------------------------------------------------------------------

#[test]
fn index_requires_expression() {
    cmd().arg("index").assert().failure();
}

#[test]
fn index_scalar() {
    cmd()
        .args(["index", "1, 1"])
        .assert()
        .success()
        .stdout("M[1, 1]\n11\n");
}

#[test]
fn index_negative_row_expression() {
    cmd()
        .args(["index", "--rows", "2", "--cols", "2", "-1"])
        .assert()
        .success()
        .stdout("M[-1]\n[\n 2  3\n]\n");
}

#[test]
fn index_custom_values() {
    cmd()
        .args(["index", "--rows", "2", "--cols", "3", "--values", "a,b,c,d,e,f", ":, [2, 0]"])
        .assert()
        .success()
        .stdout("M[:, [2, 0]]\n[\n c  a\n\n f  d\n]\n");
}

#[test]
fn index_out_of_range_fails() {
    cmd()
        .args(["index", "10, 0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn index_shape_mismatch_fails() {
    cmd()
        .args(["index", "--rows", "3", "--cols", "3", "--values", "1,2", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to build a 3x3 matrix"));
}

#[test]
fn index_overflowing_dimensions_fail() {
    let huge = usize::MAX.to_string();
    cmd()
        .args(["index", "--rows", huge.as_str(), "--cols", "2", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("element count overflows"));
}

#[test]
fn index_huge_step() {
    cmd()
        .args(["index", "--rows", "3", "--cols", "2", "1::9223372036854775807"])
        .assert()
        .success()
        .stdout("M[1::9223372036854775807]\n[\n 2  3\n]\n");
}

#[test]
fn demo_with_huge_print_limit_prints_everything() {
    cmd()
        .args(["demo", "--max-rows", "18446744073709551615"])
        .assert()
        .success()
        .stdout(predicate::str::contains("21. M[[1, 4], [1, 4]]"));
}
