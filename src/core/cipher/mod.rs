//! Token encryption.
//!
//! AES-256-CBC with PKCS#7 padding under a machine-derived key. Each
//! encryption draws a fresh random IV, so encrypting the same value twice
//! yields different envelopes.
//!
//! ```ignore
//! let key = derive_key("linux", "x64", "/home/alice");
//! let sealed = encrypt("AIza...", &key);
//! assert_eq!(decrypt(&sealed, &key)?, "AIza...");
//! ```

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::generic_array::GenericArray;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::CipherError;

mod envelope;
mod key;

pub use envelope::{Envelope, IV_LEN};
pub use key::{arch_id, derive_key, machine_key, platform_id, EncryptionKey, KEY_LEN};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypt `plaintext` into an envelope string.
pub fn encrypt(plaintext: &str, key: &EncryptionKey) -> String {
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);
    seal(plaintext, key, iv).to_string()
}

/// Encrypt with a caller-supplied IV.
pub fn seal(plaintext: &str, key: &EncryptionKey, iv: [u8; IV_LEN]) -> Envelope {
    let ciphertext = Aes256CbcEnc::new(
        GenericArray::from_slice(key.as_bytes()),
        GenericArray::from_slice(&iv),
    )
    .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    Envelope { iv, ciphertext }
}

/// Decrypt an envelope string.
///
/// # Errors
///
/// Returns `CipherError` if the envelope is malformed, the padding does not
/// verify (usually a different key), or the plaintext is not UTF-8.
pub fn decrypt(sealed: &str, key: &EncryptionKey) -> Result<String, CipherError> {
    open(&Envelope::parse(sealed)?, key)
}

/// Decrypt a parsed envelope.
pub fn open(envelope: &Envelope, key: &EncryptionKey) -> Result<String, CipherError> {
    let plaintext = Aes256CbcDec::new(
        GenericArray::from_slice(key.as_bytes()),
        GenericArray::from_slice(&envelope.iv),
    )
    .decrypt_padded_vec_mut::<Pkcs7>(&envelope.ciphertext)
    .map_err(|_| CipherError::BadPadding)?;

    String::from_utf8(plaintext).map_err(|_| CipherError::InvalidUtf8)
}
