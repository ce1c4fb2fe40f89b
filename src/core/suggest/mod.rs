//! Commit suggestions from a text-generation service.
//!
//! One request per diff. The service is asked for JSON with `types`,
//! `scopes` and `messages` arrays; whatever comes back is sanitized into a
//! [`SuggestionSet`]. Any failure degrades to [`SuggestionSet::fallback`].

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::commit_type;
use crate::core::constants::{MAX_DIFF_CHARS, TARGET_MESSAGES, TARGET_SCOPES, TARGET_TYPES};
use crate::core::types::Credential;
use crate::error::ProviderError;

pub mod gemini;

pub use gemini::Gemini;

/// Ranked candidates for each part of a commit message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuggestionSet {
    pub types: Vec<String>,
    pub scopes: Vec<String>,
    pub messages: Vec<String>,
}

impl SuggestionSet {
    /// Suggestions used when the service cannot be reached or understood.
    pub fn fallback() -> Self {
        Self {
            types: vec!["feat".into(), "fix".into(), "chore".into()],
            scopes: Vec::new(),
            messages: vec!["update code".into(), "improve functionality".into()],
        }
    }
}

/// A text-generation backend.
///
/// Implementations send `prompt` and return the raw response text.
pub trait Generator {
    fn generate(&self, prompt: &str, credential: &Credential) -> Result<String, ProviderError>;
}

/// Produce suggestions for `diff`, falling back on any failure.
///
/// Never fails. When the fallback set is returned, the second element holds
/// the reason.
pub fn suggest(
    generator: &dyn Generator,
    diff: &str,
    credential: &Credential,
) -> (SuggestionSet, Option<ProviderError>) {
    match try_suggest(generator, diff, credential) {
        Ok(set) => (set, None),
        Err(e) => {
            warn!("suggestion service failed, using defaults: {}", e);
            (SuggestionSet::fallback(), Some(e))
        }
    }
}

/// Produce suggestions for `diff`, reporting failures.
pub fn try_suggest(
    generator: &dyn Generator,
    diff: &str,
    credential: &Credential,
) -> Result<SuggestionSet, ProviderError> {
    let prompt = build_prompt(diff);
    debug!(prompt_len = prompt.len(), "requesting suggestions");

    let text = generator.generate(&prompt, credential)?;
    let set = parse_response(&text)?;

    debug!(
        types = set.types.len(),
        scopes = set.scopes.len(),
        messages = set.messages.len(),
        "parsed suggestions"
    );
    Ok(set)
}

/// Build the instruction sent to the service.
pub fn build_prompt(diff: &str) -> String {
    let types = commit_type::names().collect::<Vec<_>>().join(", ");
    let diff = truncate_diff(diff);

    format!(
        "You are an expert at writing conventional commit messages.\n\
         Analyze the following git diff and suggest commit message parts.\n\
         \n\
         Allowed commit types: {types}\n\
         \n\
         Rules:\n\
         - Suggest the {nt} most fitting commit types, best first, only from the allowed list.\n\
         - Suggest {ns} short scopes (at most 2 words each) naming the affected area.\n\
         - Suggest {nm} commit messages: imperative mood, lowercase, no trailing period, \
           no type or scope prefix.\n\
         - Respond with JSON only, exactly of the form \
           {{\"types\": [string], \"scopes\": [string], \"messages\": [string]}}.\n\
         \n\
         Git diff:\n\
         ```diff\n\
         {diff}\n\
         ```\n",
        types = types,
        nt = TARGET_TYPES,
        ns = TARGET_SCOPES,
        nm = TARGET_MESSAGES,
        diff = diff,
    )
}

/// Cap a diff at [`MAX_DIFF_CHARS`] characters.
pub fn truncate_diff(diff: &str) -> Cow<'_, str> {
    match diff.char_indices().nth(MAX_DIFF_CHARS) {
        None => Cow::Borrowed(diff),
        Some((cut, _)) => {
            debug!(original = diff.len(), kept = cut, "truncating diff");
            Cow::Owned(format!("{}\n[diff truncated]", &diff[..cut]))
        }
    }
}

/// Parse and sanitize the service's response text.
///
/// # Errors
///
/// `ProviderError::InvalidJson` if the text is not JSON, and
/// `ProviderError::NotAnObject` if the JSON is not an object. Missing or
/// non-array keys become empty lists.
pub fn parse_response(text: &str) -> Result<SuggestionSet, ProviderError> {
    let value: Value = serde_json::from_str(strip_code_fence(text))?;
    let object = value.as_object().ok_or(ProviderError::NotAnObject)?;

    let list = |key: &str| -> Vec<String> {
        match object.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    };

    Ok(SuggestionSet {
        types: clean(list("types"), |s| s.to_lowercase()),
        scopes: clean(list("scopes"), str::to_string),
        messages: clean(list("messages"), |s| s.trim_end_matches('.').trim_end().to_string()),
    })
}

/// Trim, normalize, drop empties and drop duplicates (first wins).
fn clean(items: Vec<String>, normalize: impl Fn(&str) -> String) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let item = normalize(item.trim());
        if !item.is_empty() && !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Remove a surrounding Markdown code fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // drop the info string (e.g. `json`) on the opening line
    let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
