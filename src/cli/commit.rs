//! Default command: turn the current diff into a conventional commit.

use tracing::{debug, info};

use crate::cli::output;
use crate::cli::prompt::{self, Prompter};
use crate::core::commit_type::{self, COMMIT_TYPES};
use crate::core::git::Vcs;
use crate::core::store::TokenStore;
use crate::core::suggest::{self, Generator, SuggestionSet};
use crate::core::types::Credential;
use crate::error::{GitError, Result};

const OTHER_TYPE: &str = "other type…";
const NO_SCOPE: &str = "(no scope)";
const CUSTOM_SCOPE: &str = "custom scope…";
const CUSTOM_MESSAGE: &str = "custom message…";

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A commit was created with this message.
    Committed(String),
    /// Neither staged nor unstaged changes exist.
    NoChanges,
    /// The user declined to stage or to commit.
    Aborted,
}

enum Changes {
    Diff(String),
    None,
    Declined,
}

/// The commit workflow and its collaborators.
pub struct CommitFlow<'a> {
    pub vcs: &'a dyn Vcs,
    pub prompt: &'a dyn Prompter,
    pub store: &'a dyn TokenStore,
    pub generator: &'a dyn Generator,
}

impl CommitFlow<'_> {
    /// Run the workflow end to end.
    ///
    /// # Errors
    ///
    /// `GitError::NotARepository` outside a work tree; git failures while
    /// reading diffs, staging or committing; prompt failures; filesystem
    /// errors while saving a new API key.
    pub fn run(&self) -> Result<Outcome> {
        if !self.vcs.is_repository() {
            return Err(GitError::NotARepository.into());
        }

        let diff = match self.collect_diff()? {
            Changes::Diff(diff) => diff,
            Changes::None => return Ok(Outcome::NoChanges),
            Changes::Declined => return Ok(Outcome::Aborted),
        };

        let credential = self.credential()?;

        output::progress("Analyzing changes");
        let (suggestions, failure) = suggest::suggest(self.generator, &diff, &credential);
        output::progress_done(failure.is_none());
        if let Some(e) = failure {
            output::warn(&format!("suggestion service unavailable: {}", e));
            output::hint("using default suggestions");
        }

        let message = self.resolve(&suggestions)?;
        output::preview(&message);

        if !self.prompt.confirm("Commit with this message?", true)? {
            return Ok(Outcome::Aborted);
        }

        self.vcs.commit(&message)?;
        info!(message = %message, "committed");
        Ok(Outcome::Committed(message))
    }

    /// Staged diff, or the unstaged diff after the user agrees to stage it.
    fn collect_diff(&self) -> Result<Changes> {
        let staged = self.vcs.staged_diff()?;
        if !staged.trim().is_empty() {
            debug!(bytes = staged.len(), "using staged diff");
            return Ok(Changes::Diff(staged));
        }

        let unstaged = self.vcs.unstaged_diff()?;
        if unstaged.trim().is_empty() {
            return Ok(Changes::None);
        }

        if !self
            .prompt
            .confirm("No staged changes. Stage all changes?", true)?
        {
            return Ok(Changes::Declined);
        }

        self.vcs.stage_all()?;
        output::success("staged all changes");

        let staged = self.vcs.staged_diff()?;
        debug!(bytes = staged.len(), "using freshly staged diff");
        Ok(Changes::Diff(if staged.trim().is_empty() {
            unstaged
        } else {
            staged
        }))
    }

    /// Stored API key, or a newly entered one (optionally saved).
    fn credential(&self) -> Result<Credential> {
        if let Some(credential) = self.store.get() {
            return Ok(credential);
        }

        output::warn("no api key found");
        let value = self.prompt.password("Enter your Gemini API key", &prompt::api_key)?;
        let credential = Credential::new(value);

        if self.prompt.confirm("Save this API key for future use?", true)? {
            self.store.set(&credential)?;
            output::success(&format!("api key saved ({})", credential));
        }
        Ok(credential)
    }

    /// Resolve type, scope and message into the final commit string.
    fn resolve(&self, suggestions: &SuggestionSet) -> Result<String> {
        let kind = self.choose_type(&suggestions.types)?;
        let scope = self.choose_scope(&suggestions.scopes)?;
        let message = self.choose_message(&suggestions.messages)?;
        Ok(commit_type::format_commit(&kind, &scope, &message))
    }

    fn choose_type(&self, suggested: &[String]) -> Result<String> {
        let mut items: Vec<String> = suggested.iter().map(String::as_str).map(type_label).collect();
        items.push(OTHER_TYPE.to_string());

        let picked = self.prompt.select("Select commit type", &items, 0)?;
        if let Some(kind) = suggested.get(picked) {
            return Ok(kind.clone());
        }

        let catalog: Vec<String> = COMMIT_TYPES.iter().map(ToString::to_string).collect();
        let picked = self.prompt.select("Select commit type", &catalog, 0)?;
        Ok(COMMIT_TYPES
            .get(picked)
            .map(|t| t.name.to_string())
            .unwrap_or_default())
    }

    fn choose_scope(&self, suggested: &[String]) -> Result<String> {
        let mut items = suggested.to_vec();
        items.push(NO_SCOPE.to_string());
        items.push(CUSTOM_SCOPE.to_string());

        let picked = self.prompt.select("Select scope", &items, 0)?;
        if let Some(scope) = suggested.get(picked) {
            return Ok(scope.clone());
        }
        if picked == suggested.len() {
            return Ok(String::new());
        }
        self.prompt.input("Scope (leave empty for none)", &prompt::any)
    }

    fn choose_message(&self, suggested: &[String]) -> Result<String> {
        let mut items = suggested.to_vec();
        items.push(CUSTOM_MESSAGE.to_string());

        let picked = self.prompt.select("Select commit message", &items, 0)?;
        if let Some(message) = suggested.get(picked) {
            return Ok(message.clone());
        }
        self.prompt.input("Commit message", &prompt::non_empty)
    }
}

/// Menu label for a suggested type; unknown types show bare.
fn type_label(name: &str) -> String {
    match commit_type::lookup(name) {
        Some(t) => t.to_string(),
        None => name.to_string(),
    }
}
