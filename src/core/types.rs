//! Domain types.

use std::fmt;

use zeroize::Zeroizing;

use crate::core::constants::MASK_VISIBLE;

/// An API credential.
///
/// The value is wiped from memory on drop. `Display` and `Debug` only ever
/// show the masked form; use [`Credential::expose`] to get the raw value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(Zeroizing<String>);

impl Credential {
    /// Wrap a raw credential string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Raw credential value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Masked form: first and last few characters, e.g. `AIza…9xQk`.
    ///
    /// Credentials too short to mask meaningfully render as `****`.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= MASK_VISIBLE * 2 {
            return "****".to_string();
        }
        let head: String = chars[..MASK_VISIBLE].iter().collect();
        let tail: String = chars[chars.len() - MASK_VISIBLE..].iter().collect();
        format!("{}…{}", head, tail)
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}
