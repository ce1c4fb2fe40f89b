//! On-disk envelope: `hex(iv):hex(ciphertext)`.

use std::fmt;
use std::str::FromStr;

use crate::core::constants::ENVELOPE_SEPARATOR;
use crate::error::CipherError;

/// AES block / IV length in bytes.
pub const IV_LEN: usize = 16;

/// An IV and the ciphertext it was used with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub iv: [u8; IV_LEN],
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Parse an envelope string.
    ///
    /// Accepts exactly two non-empty hex fields separated by `:`; the first
    /// must decode to 16 bytes.
    pub fn parse(s: &str) -> Result<Self, CipherError> {
        let mut fields = s.split(ENVELOPE_SEPARATOR);
        let (iv_hex, ct_hex) = match (fields.next(), fields.next(), fields.next()) {
            (Some(iv), Some(ct), None) if !iv.is_empty() && !ct.is_empty() => (iv, ct),
            _ => return Err(CipherError::InvalidEnvelope),
        };

        let iv_bytes = hex::decode(iv_hex)?;
        let iv: [u8; IV_LEN] = iv_bytes
            .as_slice()
            .try_into()
            .map_err(|_| CipherError::InvalidIv(iv_bytes.len()))?;
        let ciphertext = hex::decode(ct_hex)?;

        Ok(Self { iv, ciphertext })
    }
}

impl FromStr for Envelope {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            hex::encode(self.iv),
            ENVELOPE_SEPARATOR,
            hex::encode(&self.ciphertext)
        )
    }
}
