//! Encrypted API key storage.
//!
//! A store holds exactly one credential. Reads never fail from the caller's
//! point of view: a missing, malformed or undecryptable token is reported by
//! [`TokenStore::load`] with a typed reason, and [`TokenStore::get`] turns any
//! of those into `None`.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement `load`, `set`, `clear` and `location`
//! 2. Add the implementation in a new file next to `fs.rs`
//! 3. Re-export from this module

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::core::types::Credential;
use crate::error::{Result, StoreError};

mod fs;

pub use fs::Filesystem;

/// Storage for a single encrypted credential.
pub trait TokenStore {
    /// Load and decrypt the stored credential.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if nothing is stored, otherwise the reason the
    /// stored value could not be read back.
    fn load(&self) -> std::result::Result<Credential, StoreError>;

    /// Encrypt and persist a credential, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` on filesystem errors. A failed write
    /// leaves the previous token file untouched.
    fn set(&self, credential: &Credential) -> Result<()>;

    /// Remove the stored credential. Removing nothing is not an error.
    fn clear(&self) -> Result<()>;

    /// Where the credential lives, for display.
    fn location(&self) -> PathBuf;

    /// The stored credential, or `None` if absent or unreadable.
    fn get(&self) -> Option<Credential> {
        match self.load() {
            Ok(credential) => {
                debug!(credential = %credential, "loaded stored api key");
                Some(credential)
            }
            Err(StoreError::NotFound(path)) => {
                debug!(path = %path, "no stored api key");
                None
            }
            Err(e) => {
                warn!("ignoring stored api key: {}", e);
                None
            }
        }
    }

    /// Whether a readable credential is stored.
    fn has_credential(&self) -> bool {
        self.get().is_some()
    }
}
