//! Command-line interface.

pub mod commit;
pub mod output;
pub mod prompt;
pub mod token;

use clap::Parser;

use crate::core::config::Settings;
use crate::core::git::Git;
use crate::core::store::Filesystem;
use crate::core::suggest::Gemini;
use crate::error::{Error, GitError, PromptError, Result, StoreError};
use commit::{CommitFlow, Outcome};
use prompt::Terminal;

/// ai-cz - AI-assisted conventional commits.
#[derive(Parser, Debug)]
#[command(
    name = "ai-cz",
    about = "Generate conventional commit messages from your diff with AI",
    version,
    after_help = "Run without flags inside a git repository to create a commit."
)]
pub struct Cli {
    /// Manage the stored API key
    #[arg(long)]
    pub token: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Execute the command selected by `cli`.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = Settings::from_env()?;

    if cli.token {
        let prompt = Terminal::new();
        let store = Filesystem::new(&settings.config_root)?;
        token::execute(&prompt, &store)?;
        return Ok(());
    }

    let git = Git::locate()?;
    let prompt = Terminal::new();
    let store = Filesystem::new(&settings.config_root)?;
    let generator = Gemini::from_settings(&settings)?;

    let flow = CommitFlow {
        vcs: &git,
        prompt: &prompt,
        store: &store,
        generator: &generator,
    };

    match flow.run()? {
        Outcome::Committed(_) => output::success("committed"),
        Outcome::NoChanges => {
            output::warn("no changes to commit");
            output::hint("edit some files, or stage them with: git add");
        }
        Outcome::Aborted => output::dimmed("commit aborted"),
    }
    Ok(())
}

/// Follow-up advice printed under an error, if there is any.
pub fn hint_for(e: &Error) -> Option<&'static str> {
    match e {
        Error::Git(GitError::NotInstalled) => Some("install git and make sure it is on PATH"),
        Error::Git(GitError::NotARepository) => Some("run ai-cz inside a git repository"),
        Error::Prompt(PromptError::NotInteractive) => {
            Some("run ai-cz from an interactive terminal")
        }
        Error::Store(StoreError::WriteFailed(_)) => {
            Some("check that the ai-cz config directory is writable")
        }
        Error::Store(StoreError::NoHomeDir) => Some("set HOME or AI_CZ_CONFIG_HOME"),
        _ => None,
    }
}
