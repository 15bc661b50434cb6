use std::fmt;
use std::str::FromStr;

use crate::errors::ClassicCryptoError;
use crate::hill::HillCipher;
use crate::substitution::Substitution;
use crate::vigenere::Vigenere;

/// Common interface of every classical cipher in this crate.
///
/// Both directions normalize their input (ASCII letters only, upper-cased)
/// and return upper-case letters.
pub trait Cipher {
    fn encrypt(&self, plaintext: &str) -> Result<String, ClassicCryptoError>;
    fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CipherKind {
    Hill,
    Vigenere,
    Substitution,
}

impl CipherKind {
    pub const ALL: [CipherKind; 3] = [
        CipherKind::Hill,
        CipherKind::Vigenere,
        CipherKind::Substitution,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CipherKind::Hill => "hill",
            CipherKind::Vigenere => "vigenere",
            CipherKind::Substitution => "substitution",
        }
    }

    /// Validates `key` for this kind and returns a ready cipher.
    pub fn build(&self, key: &str) -> Result<Box<dyn Cipher + Send + Sync>, ClassicCryptoError> {
        Ok(match self {
            CipherKind::Hill => Box::new(HillCipher::try_with(key)?),
            CipherKind::Vigenere => Box::new(Vigenere::try_with(key)?),
            CipherKind::Substitution => Box::new(Substitution::try_with(key)?),
        })
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = ClassicCryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CipherKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ClassicCryptoError::InvalidParameters(format!(
                    "unknown cipher '{}', expected one of: hill, vigenere, substitution",
                    s
                ))
            })
    }
}
