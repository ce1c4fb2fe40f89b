//! Interactive prompts.

use std::io::{self, IsTerminal};

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};

use crate::error::{PromptError, Result};

/// Validation callback: `Err` carries the message shown to the user.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Interactive questions asked during a run.
pub trait Prompter {
    /// Pick one of `items`; returns its index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Free-text answer that passes `validate`.
    fn input(&self, prompt: &str, validate: Validator<'_>) -> Result<String>;

    /// Hidden answer that passes `validate`.
    fn password(&self, prompt: &str, validate: Validator<'_>) -> Result<String>;
}

/// Prompts on the controlling terminal.
///
/// Every prompt fails with `PromptError::NotInteractive` when stdin is not a
/// terminal, so runs that never ask anything work in scripts.
#[derive(Default)]
pub struct Terminal {
    theme: ColorfulTheme,
}

impl Terminal {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_interactive(&self) -> Result<()> {
        if io::stdin().is_terminal() {
            Ok(())
        } else {
            Err(PromptError::NotInteractive.into())
        }
    }
}

impl Prompter for Terminal {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        self.ensure_interactive()?;
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| PromptError::from(e).into())
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        self.ensure_interactive()?;
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| PromptError::from(e).into())
    }

    fn input(&self, prompt: &str, validate: Validator<'_>) -> Result<String> {
        self.ensure_interactive()?;
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|s: &String| validate(s.as_str()))
            .interact_text()
            .map_err(PromptError::from)?;
        Ok(answer.trim().to_string())
    }

    fn password(&self, prompt: &str, validate: Validator<'_>) -> Result<String> {
        self.ensure_interactive()?;
        let answer = Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|s: &String| validate(s.as_str()))
            .interact()
            .map_err(PromptError::from)?;
        Ok(answer.trim().to_string())
    }
}

/// Accept anything.
pub fn any(_: &str) -> std::result::Result<(), String> {
    Ok(())
}

/// Reject blank answers.
pub fn non_empty(s: &str) -> std::result::Result<(), String> {
    if s.trim().is_empty() {
        Err("a value is required".to_string())
    } else {
        Ok(())
    }
}

/// API keys: non-empty, no inner whitespace.
pub fn api_key(s: &str) -> std::result::Result<(), String> {
    non_empty(s)?;
    if s.trim().chars().any(char::is_whitespace) {
        return Err("api key must not contain spaces".to_string());
    }
    Ok(())
}
