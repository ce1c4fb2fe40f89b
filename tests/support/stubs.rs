//! In-process stand-ins for git, the terminal and the suggestion service.

use std::cell::RefCell;
use std::collections::VecDeque;

use ai_cz::cli::prompt::{Prompter, Validator};
use ai_cz::core::cipher::derive_key;
use ai_cz::core::git::Vcs;
use ai_cz::core::store::Filesystem;
use ai_cz::core::suggest::Generator;
use ai_cz::core::types::Credential;
use ai_cz::error::{GitError, ProviderError, Result};
use tempfile::TempDir;

/// A token store in a temp dir with a fixed key.
pub fn temp_store(dir: &TempDir) -> Filesystem {
    Filesystem::with_key(dir.path(), derive_key("linux", "x64", "/home/test"))
}

/// Scripted repository state.
#[derive(Default)]
pub struct StubVcs {
    pub repository: bool,
    pub staged: RefCell<String>,
    pub unstaged: String,
    pub fail_commit: bool,
    pub staged_all: RefCell<usize>,
    pub commits: RefCell<Vec<String>>,
}

impl StubVcs {
    pub fn repo(staged: &str, unstaged: &str) -> Self {
        Self {
            repository: true,
            staged: RefCell::new(staged.to_string()),
            unstaged: unstaged.to_string(),
            ..Default::default()
        }
    }
}

impl Vcs for StubVcs {
    fn is_repository(&self) -> bool {
        self.repository
    }

    fn staged_diff(&self) -> Result<String> {
        Ok(self.staged.borrow().clone())
    }

    fn unstaged_diff(&self) -> Result<String> {
        Ok(self.unstaged.clone())
    }

    fn stage_all(&self) -> Result<()> {
        *self.staged_all.borrow_mut() += 1;
        *self.staged.borrow_mut() = self.unstaged.clone();
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        if self.fail_commit {
            return Err(GitError::CommandFailed {
                command: "commit".into(),
                stderr: "hook rejected".into(),
            }
            .into());
        }
        self.commits.borrow_mut().push(message.to_string());
        Ok(())
    }
}

/// One scripted answer.
#[derive(Debug, Clone)]
pub enum Answer {
    Select(usize),
    Confirm(bool),
    Text(&'static str),
}

/// Answers prompts from a script, recording what was asked.
#[derive(Default)]
pub struct Scripted {
    answers: RefCell<VecDeque<Answer>>,
    pub asked: RefCell<Vec<String>>,
    pub menus: RefCell<Vec<Vec<String>>>,
}

impl Scripted {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Default::default()
        }
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> Answer {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {}", prompt))
    }
}

impl Prompter for Scripted {
    fn select(&self, prompt: &str, items: &[String], _default: usize) -> Result<usize> {
        self.menus.borrow_mut().push(items.to_vec());
        match self.next(prompt) {
            Answer::Select(i) => {
                assert!(i < items.len(), "index {} out of range for {:?}", i, items);
                Ok(i)
            }
            other => panic!("expected select for {:?}, scripted {:?}", prompt, other),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        match self.next(prompt) {
            Answer::Confirm(b) => Ok(b),
            other => panic!("expected confirm for {:?}, scripted {:?}", prompt, other),
        }
    }

    fn input(&self, prompt: &str, validate: Validator<'_>) -> Result<String> {
        match self.next(prompt) {
            Answer::Text(s) => {
                validate(s).expect("scripted input failed validation");
                Ok(s.to_string())
            }
            other => panic!("expected input for {:?}, scripted {:?}", prompt, other),
        }
    }

    fn password(&self, prompt: &str, validate: Validator<'_>) -> Result<String> {
        self.input(prompt, validate)
    }
}

/// Suggestion service returning a canned response or failing.
pub struct StubGenerator {
    response: std::result::Result<String, u16>,
    pub calls: RefCell<Vec<(String, String)>>,
}

impl StubGenerator {
    pub fn ok(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            response: Err(status),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Generator for StubGenerator {
    fn generate(
        &self,
        prompt: &str,
        credential: &Credential,
    ) -> std::result::Result<String, ProviderError> {
        self.calls
            .borrow_mut()
            .push((prompt.to_string(), credential.expose().to_string()));
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(ProviderError::Api {
                status: *status,
                message: "API key not valid".into(),
            }),
        }
    }
}
