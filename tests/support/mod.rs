//! Test support utilities for ai-cz integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod commands;
pub mod skip;
pub mod stubs;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary working dir and home dir. Child
/// processes get both through `.current_dir()` and env vars, so tests can
/// run in parallel.
pub struct Test {
    /// Temporary working directory (optionally a git repository)
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment whose working dir is a fresh git repository.
    pub fn repo() -> Self {
        let t = Self::new();
        t.git(&["init", "--quiet"]);
        t.git(&["config", "user.name", "Test User"]);
        t.git(&["config", "user.email", "test@example.com"]);
        t.git(&["config", "commit.gpgsign", "false"]);
        t
    }

    /// Create a repository with one commit and a staged modification.
    pub fn repo_with_staged_change() -> Self {
        let t = Self::repo();
        t.write("README.md", "# demo\n");
        t.git(&["add", "README.md"]);
        t.git(&["commit", "--quiet", "-m", "initial"]);
        t.write("README.md", "# demo\n\nInstall with cargo.\n");
        t.git(&["add", "README.md"]);
        t
    }

    /// Write a file relative to the working dir.
    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.dir.path().join(name), contents).expect("failed to write file");
    }

    /// Run git in the working dir, panicking on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .env("HOME", self.home.path())
            .env("GIT_CEILING_DIRECTORIES", ceiling(self.dir.path()))
            .output()
            .expect("failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Token file location under the temp home.
    pub fn token_path(&self) -> std::path::PathBuf {
        self.home.path().join(".config").join("ai-cz").join("token.enc")
    }
}

/// Parent directory, so git never discovers a repository above the temp dir.
pub fn ceiling(dir: &Path) -> std::ffi::OsString {
    dir.parent().unwrap_or(dir).as_os_str().to_owned()
}
