//! Constants used throughout ai-cz.
//!
//! Centralizes magic strings and configuration values.

/// Application directory under the user config root (`~/.config/ai-cz`).
pub const APP_DIR: &str = "ai-cz";

/// Encrypted token file name inside [`APP_DIR`].
pub const TOKEN_FILE: &str = "token.enc";

/// Separator between the IV and ciphertext fields of an envelope.
pub const ENVELOPE_SEPARATOR: char = ':';

/// Environment variable overriding the user config root.
pub const CONFIG_HOME_ENV: &str = "AI_CZ_CONFIG_HOME";

/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "AI_CZ_MODEL";

/// Environment variable overriding the service base URL.
pub const API_BASE_ENV: &str = "AI_CZ_API_BASE";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "AI_CZ_LOG";

/// Default model for suggestions.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default Generative Language API base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Sampling temperature for suggestion requests.
pub const TEMPERATURE: f32 = 0.2;

/// Requested number of type and scope candidates.
pub const TARGET_TYPES: usize = 3;
pub const TARGET_SCOPES: usize = 3;

/// Requested number of message candidates.
pub const TARGET_MESSAGES: usize = 2;

/// Diffs longer than this (in chars) are truncated before prompting.
pub const MAX_DIFF_CHARS: usize = 30_000;

/// Number of characters shown at each end of a masked credential.
pub const MASK_VISIBLE: usize = 4;
