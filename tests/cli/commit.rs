//! Tests for the default commit flow through the binary.

use crate::skip_without_git;
use crate::support::*;

#[test]
fn test_no_changes_exits_cleanly() {
    skip_without_git!();
    let t = Test::repo();

    let output = t.run();
    assert_exit_code(&output, 0);
    assert_stderr_contains(&output, "no changes to commit");
}

#[test]
fn test_no_changes_after_commit() {
    skip_without_git!();
    let t = Test::repo_with_staged_change();
    t.git(&["commit", "--quiet", "-m", "docs"]);

    let output = t.run();
    assert_exit_code(&output, 0);
    assert_stderr_contains(&output, "no changes to commit");
    // nothing new was committed
    assert_eq!(t.git(&["rev-list", "--count", "HEAD"]).trim(), "2");
}

#[test]
fn test_changes_without_terminal_fail() {
    skip_without_git!();
    let t = Test::repo_with_staged_change();

    let output = t.run();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "interactive terminal");
    assert_eq!(t.git(&["rev-list", "--count", "HEAD"]).trim(), "1");
}

#[test]
fn test_corrupt_token_reported_as_missing() {
    skip_without_git!();
    let t = Test::repo_with_staged_change();
    let token = t.token_path();
    std::fs::create_dir_all(token.parent().unwrap()).unwrap();
    std::fs::write(&token, "this is not an envelope").unwrap();

    let output = t.run();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "ignoring stored api key");
    assert_stderr_contains(&output, "no api key found");
    // the unreadable file is left alone
    assert!(token.exists());
}
