//! Tests for `--token` through the binary.

use crate::support::*;

#[test]
fn test_token_menu_requires_terminal() {
    let t = Test::new();

    let output = t.token();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "interactive terminal");
    assert!(!t.token_path().exists());
}

#[test]
fn test_token_menu_works_outside_repository() {
    let t = Test::new();

    let output = t.token();
    let err = stderr(&output);
    assert!(!err.contains("not a git repository"));
}
