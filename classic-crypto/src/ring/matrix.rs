//! Immutable square matrices over the integers with arithmetic modulo a [`Ring`].

use std::fmt;

use crate::errors::ClassicCryptoError;
use crate::preset::alphabet::index_to_letter;
use crate::ring::matrix_ops::{determinant, matrix_mul, matrix_vector_mul, minor, transpose};
use crate::ring::{Matrix, Ring, Vector};

use itertools::{Itertools, iproduct};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Attempts made by [`SquareMatrix::random_invertible_mod`] before giving up.
const MAX_KEYGEN_ATTEMPTS: usize = 1000;

/// Largest order [`SquareMatrix::random_invertible_mod`] will draw.
pub const MAX_RANDOM_ORDER: usize = 16;

/// An `order × order` integer matrix.
///
/// Entries are kept as given; every `*_mod` operation reduces on the fly and
/// returns a new matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSquareMatrix")]
pub struct SquareMatrix {
    order: usize,
    data: Matrix,
}

#[derive(Deserialize)]
struct RawSquareMatrix {
    order: usize,
    data: Matrix,
}

impl TryFrom<RawSquareMatrix> for SquareMatrix {
    type Error = ClassicCryptoError;

    fn try_from(raw: RawSquareMatrix) -> Result<Self, Self::Error> {
        let matrix = SquareMatrix::from_rows(raw.data)?;
        if matrix.order != raw.order {
            return Err(ClassicCryptoError::SizeMismatch(format!(
                "Declared order {} but data has {} rows",
                raw.order, matrix.order
            )));
        }
        Ok(matrix)
    }
}

impl SquareMatrix {
    /// Builds a matrix from `order²` row-major values.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::SizeMismatch` if `order` is zero or the
    /// value count is not `order²`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::SquareMatrix;
    /// let m = SquareMatrix::try_with(2, &[1, 2, 3, 4]).unwrap();
    /// assert_eq!(m.get(1, 0), 3);
    /// assert!(SquareMatrix::try_with(2, &[1, 2, 3]).is_err());
    /// ```
    pub fn try_with(order: usize, values: &[i64]) -> Result<Self, ClassicCryptoError> {
        if order == 0 || order.checked_mul(order) != Some(values.len()) {
            return Err(ClassicCryptoError::SizeMismatch(format!(
                "Expected {}² values, got {}",
                order,
                values.len()
            )));
        }

        let data = values.chunks(order).map(<[i64]>::to_vec).collect();
        Ok(SquareMatrix { order, data })
    }

    /// Builds a matrix from explicit rows.
    pub fn from_rows(rows: Matrix) -> Result<Self, ClassicCryptoError> {
        let order = rows.len();
        if order == 0 {
            return Err(ClassicCryptoError::SizeMismatch(
                "Matrix must have at least one row".into(),
            ));
        }
        if let Some((i, row)) = rows.iter().find_position(|row| row.len() != order) {
            return Err(ClassicCryptoError::SizeMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                order
            )));
        }

        Ok(SquareMatrix { order, data: rows })
    }

    pub fn identity(order: usize) -> Result<Self, ClassicCryptoError> {
        Self::from_rows(crate::ring::matrix_ops::identity_matrix(order))
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn rows(&self) -> &Matrix {
        &self.data
    }

    /// Entry at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.data[i][j]
    }

    /// Entries in row-major order.
    pub fn values(&self) -> Vector {
        self.data.iter().flatten().copied().collect()
    }

    /// Exact determinant over the integers.
    pub fn determinant(&self) -> BigInt {
        determinant(&self.data)
    }

    /// Determinant reduced into `[0, n)`.
    pub fn determinant_mod(&self, ring: &Ring) -> i64 {
        ring.reduce_big(&self.determinant())
    }

    fn cofactor(&self, i: usize, j: usize) -> BigInt {
        let det = determinant(&minor(&self.data, i, j));
        if (i + j) % 2 == 0 { det } else { -det }
    }

    /// Matrix of signed minors: entry `(i, j)` is `(-1)^(i+j) * det(minor(i, j))`.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::CalculationOverflow` if a cofactor does not fit into `i64`.
    pub fn cofactor_matrix(&self) -> Result<SquareMatrix, ClassicCryptoError> {
        let n = self.order;
        let values = iproduct!(0..n, 0..n)
            .map(|(i, j)| {
                self.cofactor(i, j)
                    .to_i64()
                    .ok_or(ClassicCryptoError::CalculationOverflow)
            })
            .collect::<Result<Vector, _>>()?;

        SquareMatrix::try_with(n, &values)
    }

    /// Transpose of the cofactor matrix; `M * adj(M) = det(M) * I`.
    pub fn adjugate(&self) -> Result<SquareMatrix, ClassicCryptoError> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    pub fn transpose(&self) -> SquareMatrix {
        SquareMatrix {
            order: self.order,
            data: transpose(&self.data),
        }
    }

    /// Copy with every entry reduced into `[0, n)`.
    pub fn reduced(&self, ring: &Ring) -> SquareMatrix {
        SquareMatrix {
            order: self.order,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&v| ring.reduce(v)).collect())
                .collect(),
        }
    }

    /// True iff `gcd(det mod n, n) == 1`.
    pub fn is_invertible_mod(&self, ring: &Ring) -> bool {
        ring.is_unit(self.determinant_mod(ring))
    }

    /// Inverse modulo `n`: `det⁻¹ · adj(M)`, every entry reduced into `[0, n)`.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::NotInvertible` if the determinant shares a factor with `n`.
    pub fn inverse_mod(&self, ring: &Ring) -> Result<SquareMatrix, ClassicCryptoError> {
        let det = self.determinant_mod(ring);
        let det_inv = ring.inv(det).map_err(|_| {
            ClassicCryptoError::NotInvertible(format!(
                "Matrix determinant {} is not invertible modulo {}",
                det,
                ring.modulus()
            ))
        })?;

        let n = self.order;
        // adj[i][j] = cofactor(j, i); reduce before scaling so large orders never overflow
        let values: Vector = iproduct!(0..n, 0..n)
            .map(|(i, j)| ring.mul(ring.reduce_big(&self.cofactor(j, i)), det_inv))
            .collect();

        SquareMatrix::try_with(n, &values)
    }

    /// `self × other` modulo `n`.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::DimensionMismatch` if the orders differ.
    pub fn product_mod(
        &self,
        ring: &Ring,
        other: &SquareMatrix,
    ) -> Result<SquareMatrix, ClassicCryptoError> {
        if self.order != other.order {
            return Err(ClassicCryptoError::DimensionMismatch(format!(
                "Matrix orders must match for multiplication ({} vs {})",
                self.order, other.order
            )));
        }

        Ok(SquareMatrix {
            order: self.order,
            data: matrix_mul(&self.data, &other.data, ring)?,
        })
    }

    /// `self · v` for a column vector `v` of length `order`, modulo `n`.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::SizeMismatch` if the vector length differs from the order.
    pub fn vector_product_mod(
        &self,
        ring: &Ring,
        vector: &[i64],
    ) -> Result<Vector, ClassicCryptoError> {
        matrix_vector_mul(&self.data, vector, ring)
    }

    /// Renders the entries as letters in row-major order.
    ///
    /// Entries are reduced mod 26 first, so any matrix renders to valid letters.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::SquareMatrix;
    /// let m = SquareMatrix::try_with(2, &[7, 8, 37, -15]).unwrap();
    /// assert_eq!(m.to_display_string(), "HILL");
    /// ```
    pub fn to_display_string(&self) -> String {
        let ring = Ring::latin();
        self.data
            .iter()
            .flatten()
            .map(|&v| index_to_letter(ring.reduce(v)))
            .collect()
    }

    /// Draws uniformly random matrices with entries in `[0, n)` until one is invertible.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidParameters` for order zero or above
    /// [`MAX_RANDOM_ORDER`], and `ClassicCryptoError::NotInvertible` if no
    /// invertible matrix was found in time.
    pub fn random_invertible_mod<R: Rng + ?Sized>(
        order: usize,
        ring: &Ring,
        rng: &mut R,
    ) -> Result<SquareMatrix, ClassicCryptoError> {
        if order == 0 || order > MAX_RANDOM_ORDER {
            return Err(ClassicCryptoError::InvalidParameters(format!(
                "Matrix order must be in 1..={}, got {}",
                MAX_RANDOM_ORDER, order
            )));
        }
        let size = order.checked_mul(order).ok_or_else(|| {
            ClassicCryptoError::InvalidParameters(format!("Matrix order {} is too large", order))
        })?;

        let modulus = ring.modulus() as i64;
        for attempt in 0..MAX_KEYGEN_ATTEMPTS {
            let values: Vector = (0..size)
                .map(|_| rng.random_range(0..modulus))
                .collect();
            let candidate = SquareMatrix::try_with(order, &values)?;
            if candidate.is_invertible_mod(ring) {
                log::debug!(
                    "found invertible {order}×{order} matrix after {} draws",
                    attempt + 1
                );
                return Ok(candidate);
            }
        }

        Err(ClassicCryptoError::NotInvertible(format!(
            "could not draw an invertible {}×{} matrix mod {} after {} tries",
            order,
            order,
            ring.modulus(),
            MAX_KEYGEN_ATTEMPTS
        )))
    }
}

impl fmt::Display for SquareMatrix {
    /// One row per line, entries separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .iter()
            .flatten()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);

        let text = self
            .data
            .iter()
            .map(|row| row.iter().map(|v| format!("{v:>width$}")).join(" "))
            .join("\n");
        f.write_str(&text)
    }
}
