//! Implementation of scalar ops using modular arithmetic.

use crate::errors::ClassicCryptoError;

use super::helper::{gcd, mod_inverse};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::ToPrimitive;

/// Represents the ring Z_n every cipher operation is reduced into.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1 and fit into an `i64`.
    pub fn try_with(modulus: u64) -> Result<Self, ClassicCryptoError> {
        if modulus <= 1 || modulus > i64::MAX as u64 {
            return Err(ClassicCryptoError::InvalidModulus(format!(
                "Modulus must be in 2..=i64::MAX, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// The ring of the 26-letter Latin alphabet.
    pub fn latin() -> Self {
        Ring {
            modulus: crate::preset::alphabet::ALPHABET_SIZE,
        }
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(13).unwrap();
    /// assert_eq!(ring.modulus(), 13);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduces a value into the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.reduce(27), 1);
    /// assert_eq!(ring.reduce(-3), 23);
    /// assert_eq!(ring.reduce(0), 0);
    /// assert_eq!(ring.reduce(26), 0);
    /// ```
    pub fn reduce(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        let rem = value % m;
        if rem < 0 {
            return rem + m;
        }

        rem
    }

    /// Reduces an arbitrarily large integer, e.g. an exact determinant.
    pub fn reduce_big(&self, value: &BigInt) -> i64 {
        let m = BigInt::from(self.modulus);
        // mod_floor keeps the sign of the divisor, so the result is in [0, m)
        value.mod_floor(&m).to_i64().unwrap_or_default()
    }

    /// Computes `(a + b) mod modulus`.
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.reduce(a) as i128;
        let b_norm = self.reduce(b) as i128;

        ((a_norm + b_norm) % self.modulus as i128) as i64
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.sub(7, 5), 2);
    /// assert_eq!(ring.sub(3, 5), 24);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        self.add(a, self.neg(b))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo
    /// operation.
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.reduce(a);
        let b_norm = self.reduce(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        result as i64
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        let a_norm = self.reduce(a);
        if a_norm == 0 {
            return 0;
        }

        self.modulus as i64 - a_norm
    }

    /// Returns true if `a` has a multiplicative inverse, i.e. `gcd(a mod n, n) == 1`.
    pub fn is_unit(&self, a: i64) -> bool {
        gcd(self.reduce(a), self.modulus as i64) == 1
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::NotInvertible` if the inverse does not exist.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.inv(3).unwrap(), 9); // 3 * 9 = 27 = 1 mod 26
    /// assert_eq!(ring.inv(25).unwrap(), 25);
    /// assert!(ring.inv(13).is_err()); // gcd(13, 26) = 13
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, ClassicCryptoError> {
        let a_norm = self.reduce(a);

        mod_inverse(a_norm, self.modulus as i64).ok_or_else(|| {
            ClassicCryptoError::NotInvertible(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm,
                self.modulus,
                gcd(a_norm, self.modulus as i64)
            ))
        })
    }
}

impl Default for Ring {
    fn default() -> Self {
        Ring::latin()
    }
}
