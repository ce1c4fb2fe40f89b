//! `--token`: manage the stored API key.

use crate::cli::output;
use crate::cli::prompt::{self, Prompter};
use crate::core::store::TokenStore;
use crate::core::types::Credential;
use crate::error::Result;

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Set,
    Clear,
    Status,
    Back,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Set, Action::Clear, Action::Status, Action::Back];

    fn label(self) -> &'static str {
        match self {
            Action::Set => "Set API key",
            Action::Clear => "Clear API key",
            Action::Status => "View status",
            Action::Back => "Back",
        }
    }
}

/// Show the menu and perform the chosen action once.
pub fn execute(prompt: &dyn Prompter, store: &dyn TokenStore) -> Result<Action> {
    let items: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
    let picked = prompt.select("API key", &items, 0)?;
    let action = Action::ALL.get(picked).copied().unwrap_or(Action::Back);

    match action {
        Action::Set => set(prompt, store)?,
        Action::Clear => clear(prompt, store)?,
        Action::Status => status(store),
        Action::Back => {}
    }
    Ok(action)
}

fn set(prompt: &dyn Prompter, store: &dyn TokenStore) -> Result<()> {
    let value = prompt.password("Enter your Gemini API key", &prompt::api_key)?;
    let credential = Credential::new(value);
    store.set(&credential)?;
    output::success(&format!("api key saved ({})", credential));
    Ok(())
}

fn clear(prompt: &dyn Prompter, store: &dyn TokenStore) -> Result<()> {
    if !store.location().exists() {
        output::dimmed("no api key stored");
        return Ok(());
    }
    if prompt.confirm("Remove the stored API key?", false)? {
        store.clear()?;
        output::success("api key removed");
    }
    Ok(())
}

fn status(store: &dyn TokenStore) {
    let location = store.location();
    output::header("API key");
    match store.get() {
        Some(credential) => {
            output::kv("status ", "stored");
            output::kv("api key", &credential);
        }
        None if location.exists() => {
            output::kv("status ", "unreadable");
            output::hint(&format!("re-enter it with {}", output::cmd("ai-cz --token")));
        }
        None => output::kv("status ", "not set"),
    }
    output::kv("file   ", output::path(&location.display().to_string()));
}
