//! Tests for CLI flags and error reporting.

use crate::skip_without_git;
use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    let t = Test::new();

    let output = t.help();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("Usage"));
    assert!(out.contains("--token"));
}

#[test]
fn test_short_help_flag() {
    let t = Test::new();

    let output = t.cmd().arg("-h").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "--token");
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_fails() {
    let t = Test::new();

    t.cmd()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_positional_arguments_rejected() {
    let t = Test::new();

    t.cmd().arg("commit").assert().failure();
}

#[test]
fn test_outside_repository_exits_1() {
    skip_without_git!();
    let t = Test::new();

    let output = t.run();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "not a git repository");
    assert_stdout_contains(&output, "inside a git repository");
}

#[test]
fn test_no_stack_trace_on_error() {
    skip_without_git!();
    let t = Test::new();

    let output = t.run();
    let err = stderr(&output);
    assert!(!err.contains("panicked"));
    assert!(!err.contains("RUST_BACKTRACE"));
}
