//! Machine-bound key derivation.
//!
//! The key is `SHA-256(platform || arch || home)`, used directly as the
//! AES-256 key. No salt and no stretching: this keeps the token unreadable to
//! casual inspection of the file, not to someone running code as the same user.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::error::StoreError;

/// Key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// A derived 32-byte encryption key. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptionKey([u8; KEY_LEN]);

impl EncryptionKey {
    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl From<[u8; KEY_LEN]> for EncryptionKey {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncryptionKey(..)")
    }
}

impl Drop for EncryptionKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Derive the key from explicit inputs.
///
/// Pure function: identical inputs always yield identical keys.
pub fn derive_key(platform: &str, arch: &str, home: &str) -> EncryptionKey {
    let mut hasher = Sha256::new();
    hasher.update(platform.as_bytes());
    hasher.update(arch.as_bytes());
    hasher.update(home.as_bytes());
    EncryptionKey(hasher.finalize().into())
}

/// Derive the key for the current machine and user account.
///
/// # Errors
///
/// Returns `StoreError::NoHomeDir` if the home directory cannot be determined.
pub fn machine_key() -> Result<EncryptionKey, StoreError> {
    let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    Ok(derive_key(
        platform_id(),
        arch_id(),
        &home.to_string_lossy(),
    ))
}

/// Platform identifier in Node's `os.platform()` naming.
///
/// Existing token files were keyed with these names, so they must not change.
pub fn platform_id() -> &'static str {
    node_platform(std::env::consts::OS)
}

/// Architecture identifier in Node's `os.arch()` naming.
pub fn arch_id() -> &'static str {
    node_arch(std::env::consts::ARCH)
}

fn node_platform(os: &'static str) -> &'static str {
    match os {
        "macos" => "darwin",
        "windows" => "win32",
        "solaris" | "illumos" => "sunos",
        other => other,
    }
}

fn node_arch(arch: &'static str) -> &'static str {
    match arch {
        "x86_64" => "x64",
        "aarch64" => "arm64",
        "x86" => "ia32",
        "powerpc64" => "ppc64",
        "powerpc" => "ppc",
        "loongarch64" => "loong64",
        other => other,
    }
}
