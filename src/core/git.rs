//! Version-control access.
//!
//! Thin wrapper over the `git` binary. The workflow only depends on the
//! [`Vcs`] trait so it can run against a stub in tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::debug;

use crate::error::{GitError, Result};

/// Repository operations the commit workflow needs.
pub trait Vcs {
    /// Whether the working directory is inside a work tree.
    fn is_repository(&self) -> bool;

    /// Diff of staged changes (`git diff --cached`).
    fn staged_diff(&self) -> Result<String>;

    /// Diff of unstaged changes to tracked files (`git diff`).
    fn unstaged_diff(&self) -> Result<String>;

    /// Stage every change, including untracked files.
    fn stage_all(&self) -> Result<()>;

    /// Commit staged changes with `message`.
    fn commit(&self, message: &str) -> Result<()>;
}

/// The system `git` binary.
#[derive(Debug, Clone)]
pub struct Git {
    program: PathBuf,
    dir: Option<PathBuf>,
}

impl Git {
    /// Find `git` on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotInstalled` if no executable is found.
    pub fn locate() -> Result<Self> {
        let program = which::which("git").map_err(|_| GitError::NotInstalled)?;
        debug!(git = %program.display(), "located git");
        Ok(Self { program, dir: None })
    }

    /// Run commands in `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = Some(dir.as_ref().to_path_buf());
        self
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        debug!(args = ?args, "git");
        let output = self
            .command()
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(GitError::Spawn)?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: args.first().copied().unwrap_or_default().to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(output)
    }

    fn stdout(&self, args: &[&str]) -> Result<String> {
        let output = self.run(args)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Vcs for Git {
    fn is_repository(&self) -> bool {
        self.command()
            .args(["rev-parse", "--is-inside-work-tree"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn staged_diff(&self) -> Result<String> {
        self.stdout(&["diff", "--cached", "--no-color", "--no-ext-diff"])
    }

    fn unstaged_diff(&self) -> Result<String> {
        self.stdout(&["diff", "--no-color", "--no-ext-diff"])
    }

    fn stage_all(&self) -> Result<()> {
        self.run(&["add", "--all"]).map(|_| ())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "--message", message]).map(|_| ())
    }
}
