//! Known-plaintext key recovery for the Hill cipher.
//!
//! With `order` plaintext blocks stacked as the rows of `P` and their
//! ciphertext blocks as the rows of `C`, encryption reads `C = P · Kᵀ`, so
//! `K = (P⁻¹ · C)ᵀ` whenever `P` is invertible modulo 26.

use crate::errors::ClassicCryptoError;
use crate::hill::MIN_ORDER;
use crate::ring::{Ring, SquareMatrix, exact_square_root};
use crate::text::{to_indices, upper_only};

/// Reads a known text into a square matrix, one block per row.
fn sample_matrix(raw: &str) -> Result<SquareMatrix, ClassicCryptoError> {
    let letters = upper_only(raw).ok_or(ClassicCryptoError::EmptyMessage)?;
    let order = exact_square_root(letters.len())
        .filter(|&order| order >= MIN_ORDER)
        .ok_or(ClassicCryptoError::InvalidSampleLength(letters.len()))?;

    SquareMatrix::try_with(order, &to_indices(&letters))
}

/// Recovers the key matrix that maps `plaintext` to `ciphertext`.
///
/// Both texts must normalize to the same perfect-square length `order²`
/// (order >= 2), i.e. exactly `order` blocks.
///
/// # Errors
///
/// * `EmptyMessage` if either text has no letters.
/// * `InvalidSampleLength` if a letter count is not a perfect square of order >= 2.
/// * `OrderMismatch` if the two texts give different orders.
/// * `PlaintextNotInvertible` if the plaintext matrix has no inverse modulo 26.
///
/// # Example
///
/// ```
/// # use classic_crypto::hill::find_key;
/// let key = find_key("HELP", "HIAT").unwrap();
/// assert_eq!(key.to_display_string(), "DDCF");
/// ```
pub fn find_key(plaintext: &str, ciphertext: &str) -> Result<SquareMatrix, ClassicCryptoError> {
    let ring = Ring::latin();
    let p = sample_matrix(plaintext)?;
    let c = sample_matrix(ciphertext)?;

    if p.order() != c.order() {
        return Err(ClassicCryptoError::OrderMismatch {
            plaintext: p.order(),
            ciphertext: c.order(),
        });
    }

    let p_inv = p
        .inverse_mod(&ring)
        .map_err(|_| ClassicCryptoError::PlaintextNotInvertible {
            modulus: ring.modulus(),
            determinant: p.determinant_mod(&ring),
        })?;

    let key = p_inv.product_mod(&ring, &c)?.transpose();
    log::debug!("recovered hill key of order {}", key.order());

    Ok(key)
}

/// Same as [`find_key`], rendered as key letters in row-major order.
pub fn find_key_string(plaintext: &str, ciphertext: &str) -> Result<String, ClassicCryptoError> {
    Ok(find_key(plaintext, ciphertext)?.to_display_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovers_textbook_key() -> Result<(), ClassicCryptoError> {
        let key = find_key("ACTBCDKLM", "POHFXVYKV")?;
        assert_eq!(key.rows(), &vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]);
        assert_eq!(find_key_string("act bcd klm", "poh fxv ykv")?, "GYBNQKURP");
        Ok(())
    }

    #[test]
    fn test_sample_length_validation() {
        assert!(matches!(
            find_key("ACT", "POH"),
            Err(ClassicCryptoError::InvalidSampleLength(3))
        ));
        assert!(matches!(
            find_key("", "POHP"),
            Err(ClassicCryptoError::EmptyMessage)
        ));
        assert!(matches!(
            find_key("HELP", "???"),
            Err(ClassicCryptoError::EmptyMessage)
        ));
        assert!(matches!(
            find_key("H", "H"),
            Err(ClassicCryptoError::InvalidSampleLength(1))
        ));
    }

    #[test]
    fn test_order_mismatch() {
        assert!(matches!(
            find_key("HELP", "POHFXVYKV"),
            Err(ClassicCryptoError::OrderMismatch {
                plaintext: 2,
                ciphertext: 3
            })
        ));
    }

    #[test]
    fn test_plaintext_not_invertible() {
        // Three identical blocks give a singular plaintext matrix
        assert!(matches!(
            find_key("ACTACTACT", "POHPOHPOH"),
            Err(ClassicCryptoError::PlaintextNotInvertible {
                modulus: 26,
                determinant: 0
            })
        ));
        // det = 4 mod 26
        assert!(matches!(
            find_key("ACTIONSAT", "POHHQVXIV"),
            Err(ClassicCryptoError::PlaintextNotInvertible { determinant: 4, .. })
        ));
    }
}
