//! Command helper methods for Test.

use super::{ceiling, Test};
use assert_cmd::Command;
use std::process::Output;

/// Base URL nothing listens on, so no test ever reaches the real service.
pub const DEAD_API_BASE: &str = "http://127.0.0.1:9/v1beta";

impl Test {
    /// Create an ai-cz command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test working directory
    /// - git repository discovery stopped at the temp dir
    /// - the suggestion service pointed at a closed port
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ai-cz").expect("failed to find ai-cz binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("GIT_CEILING_DIRECTORIES", ceiling(self.dir.path()));
        cmd.env("AI_CZ_API_BASE", DEAD_API_BASE);
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("AI_CZ_CONFIG_HOME");
        cmd.env_remove("AI_CZ_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for running `ai-cz` with no flags.
    pub fn run(&self) -> Output {
        self.cmd().output().expect("failed to run ai-cz")
    }

    /// Shortcut for `ai-cz --token`.
    pub fn token(&self) -> Output {
        self.cmd()
            .arg("--token")
            .output()
            .expect("failed to run ai-cz --token")
    }

    /// Shortcut for `ai-cz --help`.
    pub fn help(&self) -> Output {
        self.cmd()
            .arg("--help")
            .output()
            .expect("failed to run ai-cz --help")
    }
}
