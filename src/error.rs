//! Error types.
//!
//! Each domain gets its own enum; [`Error`] wraps them so callers can match
//! on the domain and `?` works across module boundaries.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// Token storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no api key stored at {0}")]
    NotFound(String),

    #[error("malformed token file: {0}")]
    MalformedEnvelope(String),

    #[error("stored api key could not be decrypted: {0}")]
    Decryption(String),

    #[error("failed to read token file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("failed to write token file: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("unable to determine home directory")]
    NoHomeDir,
}

/// Encryption and envelope errors.
///
/// These stay inside the store: a token that fails to open is reported as
/// [`StoreError::MalformedEnvelope`] or [`StoreError::Decryption`].
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("envelope must be two colon-separated hex fields")]
    InvalidEnvelope,

    #[error("invalid hex in envelope: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("initialization vector must be 16 bytes, got {0}")]
    InvalidIv(usize),

    #[error("bad padding or wrong key")]
    BadPadding,

    #[error("decrypted value is not valid utf-8")]
    InvalidUtf8,
}

/// Suggestion service errors.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("service returned no text")]
    EmptyResponse,

    #[error("response is not valid json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("response json is not an object")]
    NotAnObject,
}

/// Version-control errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found in PATH")]
    NotInstalled,

    #[error("not a git repository")]
    NotARepository,

    #[error("git {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("failed to run git: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Interactive prompt errors.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("an interactive terminal is required")]
    NotInteractive,

    #[error("prompt failed: {0}")]
    Dialog(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
