//! # Hill cipher
//!
//! Encrypts blocks of `order` letters by multiplying them, as column vectors,
//! with an invertible key matrix modulo 26. Blocks are processed left to
//! right and independently of each other (no chaining).

pub mod key_recovery;

use std::fmt;

use crate::cipher::Cipher;
use crate::errors::ClassicCryptoError;
use crate::ring::{Ring, SquareMatrix, Vector, exact_square_root};
use crate::text::{from_indices, to_indices, upper_only};

use rand::Rng;

pub use key_recovery::{find_key, find_key_string};

/// Smallest usable key order.
pub const MIN_ORDER: usize = 2;

/// Largest order [`HillCipher::generate`] will produce.
pub const MAX_ORDER: usize = crate::ring::matrix::MAX_RANDOM_ORDER;

/// A Hill cipher holding a key matrix that is invertible modulo 26.
///
/// The inverse is derived once at construction and reused by every decryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillCipher {
    key: SquareMatrix,
    inverse_key: SquareMatrix,
    ring: Ring,
}

impl HillCipher {
    /// Builds a cipher from key text, read row-major into a square matrix.
    ///
    /// # Errors
    ///
    /// * `EmptyKey` if the key has no letters.
    /// * `InvalidKeyLength` if the letter count is not a perfect square of order >= 2.
    /// * `KeyNotInvertible` if the determinant shares a factor with 26.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::hill::HillCipher;
    /// # use classic_crypto::Cipher;
    /// let cipher = HillCipher::try_with("gyb nqk urp").unwrap();
    /// assert_eq!(cipher.encrypt("ACT").unwrap(), "POH");
    /// assert_eq!(cipher.decrypt("POH").unwrap(), "ACT");
    /// ```
    pub fn try_with(raw_key: &str) -> Result<Self, ClassicCryptoError> {
        let letters = upper_only(raw_key).ok_or(ClassicCryptoError::EmptyKey)?;
        let order = exact_square_root(letters.len())
            .filter(|&order| order >= MIN_ORDER)
            .ok_or(ClassicCryptoError::InvalidKeyLength(letters.len()))?;

        let key = SquareMatrix::try_with(order, &to_indices(&letters))?;
        Self::from_matrix(key)
    }

    /// Builds a cipher from an existing matrix, e.g. one returned by [`find_key`].
    ///
    /// Entries are reduced mod 26 before use.
    pub fn from_matrix(key: SquareMatrix) -> Result<Self, ClassicCryptoError> {
        let ring = Ring::latin();
        let order = key.order();
        if order < MIN_ORDER {
            return Err(ClassicCryptoError::InvalidKeyLength(order * order));
        }

        let key = key.reduced(&ring);
        let inverse_key = key.inverse_mod(&ring).map_err(|_| {
            ClassicCryptoError::KeyNotInvertible {
                modulus: ring.modulus(),
                determinant: key.determinant_mod(&ring),
            }
        })?;
        log::debug!("hill key of order {} accepted", order);

        Ok(HillCipher {
            key,
            inverse_key,
            ring,
        })
    }

    /// Draws a random invertible key of order `MIN_ORDER..=MAX_ORDER`.
    pub fn generate<R: Rng + ?Sized>(
        order: usize,
        rng: &mut R,
    ) -> Result<Self, ClassicCryptoError> {
        if order < MIN_ORDER {
            return Err(ClassicCryptoError::InvalidKeyLength(order * order));
        }
        if order > MAX_ORDER {
            return Err(ClassicCryptoError::InvalidParameters(format!(
                "generated key order must be at most {}, got {}",
                MAX_ORDER, order
            )));
        }
        let key = SquareMatrix::random_invertible_mod(order, &Ring::latin(), rng)?;
        Self::from_matrix(key)
    }

    pub fn key(&self) -> &SquareMatrix {
        &self.key
    }

    pub fn inverse_key(&self) -> &SquareMatrix {
        &self.inverse_key
    }

    /// Block size, equal to the key order.
    pub fn order(&self) -> usize {
        self.key.order()
    }

    /// The key as letters, row-major.
    pub fn key_string(&self) -> String {
        self.key.to_display_string()
    }

    /// Encrypts one block of `order` alphabet indices.
    pub fn encrypt_block(&self, block: &[i64]) -> Result<Vector, ClassicCryptoError> {
        self.key.vector_product_mod(&self.ring, block)
    }

    /// Decrypts one block of `order` alphabet indices.
    pub fn decrypt_block(&self, block: &[i64]) -> Result<Vector, ClassicCryptoError> {
        self.inverse_key.vector_product_mod(&self.ring, block)
    }

    /// Normalizes a message and checks it splits into whole blocks.
    fn verify_text(&self, raw: &str) -> Result<String, ClassicCryptoError> {
        let letters = upper_only(raw).ok_or(ClassicCryptoError::EmptyMessage)?;
        if letters.len() % self.order() != 0 {
            return Err(ClassicCryptoError::LengthNotMultiple {
                length: letters.len(),
                order: self.order(),
            });
        }
        Ok(letters)
    }

    fn apply(&self, matrix: &SquareMatrix, letters: &str) -> Result<String, ClassicCryptoError> {
        let indices = to_indices(letters);
        let mut output = Vec::with_capacity(indices.len());

        for (i, block) in indices.chunks(matrix.order()).enumerate() {
            let product = matrix.vector_product_mod(&self.ring, block)?;
            log::trace!("block {}: {:?} -> {:?}", i, block, product);
            output.extend(product);
        }

        Ok(from_indices(&output))
    }
}

impl Cipher for HillCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String, ClassicCryptoError> {
        let letters = self.verify_text(plaintext)?;
        self.apply(&self.key, &letters)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError> {
        let letters = self.verify_text(ciphertext)?;
        self.apply(&self.inverse_key, &letters)
    }
}

impl fmt::Display for HillCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}
