//! Filesystem token storage.
//!
//! Stores the envelope in `<config_root>/ai-cz/token.enc`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::TokenStore;
use crate::core::cipher::{self, EncryptionKey};
use crate::core::constants::{APP_DIR, TOKEN_FILE};
use crate::core::types::Credential;
use crate::error::{Result, StoreError};

/// Filesystem-backed token store.
#[derive(Debug)]
pub struct Filesystem {
    dir: PathBuf,
    key: EncryptionKey,
}

impl Filesystem {
    /// Store rooted at `config_root`, keyed to the current machine.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoHomeDir` if the machine key cannot be derived.
    pub fn new(config_root: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_key(config_root, cipher::machine_key()?))
    }

    /// Store rooted at `config_root` using an explicit key.
    pub fn with_key(config_root: impl AsRef<Path>, key: EncryptionKey) -> Self {
        Self {
            dir: config_root.as_ref().join(APP_DIR),
            key,
        }
    }

    /// Path of the token file.
    pub fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn write_atomic(&self, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.token_path();
        let tmp = path.with_extension("enc.tmp");

        let result = write_private(&tmp, contents).and_then(|_| fs::rename(&tmp, &path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result
    }
}

/// Write a file readable only by the owner (0600 on Unix).
fn write_private(path: &Path, contents: &str) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;

    // mode() only applies on creation; a leftover file keeps its old bits
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

impl TokenStore for Filesystem {
    fn load(&self) -> std::result::Result<Credential, StoreError> {
        let path = self.token_path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(path.display().to_string()));
            }
            Err(e) => return Err(StoreError::ReadFailed(e)),
        };

        let envelope = cipher::Envelope::parse(contents.trim())
            .map_err(|e| StoreError::MalformedEnvelope(e.to_string()))?;
        let value = cipher::open(&envelope, &self.key)
            .map_err(|e| StoreError::Decryption(e.to_string()))?;

        Ok(Credential::new(value))
    }

    fn set(&self, credential: &Credential) -> Result<()> {
        let sealed = cipher::encrypt(credential.expose(), &self.key);
        self.write_atomic(&sealed)
            .map_err(StoreError::WriteFailed)?;

        info!(
            credential = %credential,
            path = %self.token_path().display(),
            "stored api key"
        );
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(self.token_path()) {
            Ok(()) => {
                info!("removed stored api key");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no stored api key to remove");
                Ok(())
            }
            Err(e) => Err(StoreError::WriteFailed(e).into()),
        }
    }

    fn location(&self) -> PathBuf {
        self.token_path()
    }
}
