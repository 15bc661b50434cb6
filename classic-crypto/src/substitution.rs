//! Mono-alphabetic substitution cipher.
//!
//! The key lists 26 distinct letters; the i-th key letter stands for the
//! i-th alphabet letter. Encryption maps each key letter to its alphabet
//! letter and decryption maps back.

use std::collections::HashMap;

use crate::cipher::Cipher;
use crate::errors::ClassicCryptoError;
use crate::preset::alphabet::{ALPHABET_SIZE, LATIN_ALPHABET};
use crate::text::upper_only;

use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    forward: HashMap<char, char>,
    reverse: HashMap<char, char>,
}

impl Substitution {
    /// # Errors
    ///
    /// * `EmptyKey` if the key has no letters.
    /// * `InvalidSubstitutionKey` if the key is not a permutation of the 26 letters.
    pub fn try_with(raw_key: &str) -> Result<Self, ClassicCryptoError> {
        let letters = upper_only(raw_key).ok_or(ClassicCryptoError::EmptyKey)?;
        if letters.len() != ALPHABET_SIZE as usize {
            return Err(ClassicCryptoError::InvalidSubstitutionKey(format!(
                "key \"{}\" is not {} characters long",
                letters, ALPHABET_SIZE
            )));
        }
        if let Some(repeated) = letters.chars().duplicates().next() {
            return Err(ClassicCryptoError::InvalidSubstitutionKey(format!(
                "key \"{}\" repeats letter '{}'",
                letters, repeated
            )));
        }

        let forward: HashMap<char, char> = letters.chars().zip(LATIN_ALPHABET.chars()).collect();
        let reverse = forward.iter().map(|(&k, &v)| (v, k)).collect();

        Ok(Substitution { forward, reverse })
    }

    fn map_with(
        table: &HashMap<char, char>,
        raw: &str,
    ) -> Result<String, ClassicCryptoError> {
        let letters = upper_only(raw).ok_or(ClassicCryptoError::EmptyMessage)?;
        // Tables cover the whole alphabet, so every normalized letter has an entry
        Ok(letters.chars().filter_map(|ch| table.get(&ch).copied()).collect())
    }
}

impl Cipher for Substitution {
    fn encrypt(&self, plaintext: &str) -> Result<String, ClassicCryptoError> {
        Self::map_with(&self.forward, plaintext)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError> {
        Self::map_with(&self.reverse, ciphertext)
    }
}
