//! Runtime settings.
//!
//! ai-cz keeps no configuration file; everything besides the encrypted token
//! comes from the environment and is resolved once at startup.

use std::path::PathBuf;
use tracing::debug;

use crate::core::constants;
use crate::error::{Result, StoreError};

/// Settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// User config root; the token lives in `<root>/ai-cz/token.enc`.
    pub config_root: PathBuf,
    /// Model used for suggestions.
    pub model: String,
    /// Service base URL.
    pub api_base: String,
}

impl Settings {
    /// Resolve settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoHomeDir` if no config root override is set and
    /// the home directory cannot be determined.
    pub fn from_env() -> Result<Self> {
        let config_root = match non_empty_var(constants::CONFIG_HOME_ENV) {
            Some(root) => PathBuf::from(root),
            None => default_config_root()?,
        };
        let model = non_empty_var(constants::MODEL_ENV)
            .unwrap_or_else(|| constants::DEFAULT_MODEL.to_string());
        let api_base = non_empty_var(constants::API_BASE_ENV)
            .unwrap_or_else(|| constants::DEFAULT_API_BASE.to_string());

        debug!(
            config_root = %config_root.display(),
            model = %model,
            api_base = %api_base,
            "resolved settings"
        );

        Ok(Self {
            config_root,
            model,
            api_base,
        })
    }
}

/// `$HOME/.config`, on every platform.
pub fn default_config_root() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    Ok(home.join(".config"))
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
