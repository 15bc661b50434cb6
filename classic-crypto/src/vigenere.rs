//! Polyalphabetic shift cipher: letter `i` is shifted by key letter `i mod |key|`.

use crate::cipher::Cipher;
use crate::errors::ClassicCryptoError;
use crate::ring::{Ring, Vector};
use crate::text::{from_indices, to_indices, upper_only};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    shifts: Vector,
    ring: Ring,
}

impl Vigenere {
    pub fn try_with(raw_key: &str) -> Result<Self, ClassicCryptoError> {
        let letters = upper_only(raw_key).ok_or(ClassicCryptoError::EmptyKey)?;

        Ok(Vigenere {
            shifts: to_indices(&letters),
            ring: Ring::latin(),
        })
    }

    /// The effective key letters.
    pub fn key_string(&self) -> String {
        from_indices(&self.shifts)
    }

    fn shift(&self, raw: &str, op: impl Fn(i64, i64) -> i64) -> Result<String, ClassicCryptoError> {
        let letters = upper_only(raw).ok_or(ClassicCryptoError::EmptyMessage)?;
        let shifted: Vector = to_indices(&letters)
            .into_iter()
            .zip(self.shifts.iter().cycle())
            .map(|(value, &shift)| op(value, shift))
            .collect();

        Ok(from_indices(&shifted))
    }
}

impl Cipher for Vigenere {
    fn encrypt(&self, plaintext: &str) -> Result<String, ClassicCryptoError> {
        self.shift(plaintext, |p, k| self.ring.add(p, k))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError> {
        self.shift(ciphertext, |c, k| self.ring.sub(c, k))
    }
}
