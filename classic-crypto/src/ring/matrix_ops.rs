use crate::errors::ClassicCryptoError;
use crate::ring::{Matrix, Ring, Vector};

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Largest order evaluated by cofactor expansion; bigger matrices use Bareiss elimination.
pub const LAPLACE_MAX_ORDER: usize = 6;

/// A·x where A is an m×n matrix and x is a length–n vector.
/// Returns an m‐vector.
pub fn matrix_vector_mul(
    a: &Matrix,
    x: &[i64],
    ring: &Ring,
) -> Result<Vector, ClassicCryptoError> {
    let m = a.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    let n = a[0].len();
    if x.len() != n {
        return Err(ClassicCryptoError::SizeMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    let mut y = vec![0i64; m];
    for i in 0..m {
        if a[i].len() != n {
            return Err(ClassicCryptoError::SizeMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                a[i].len(),
                n
            )));
        }
        let mut sum = 0i64;
        for j in 0..n {
            let term = ring.mul(a[i][j], x[j]);
            sum = ring.add(sum, term);
        }
        y[i] = sum;
    }
    Ok(y)
}

/// Computes the matrix product `C = AB` modulo `m`, where `m` is the modulus of the ring.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionMismatch` if the inner dimensions of the matrices do
/// not match or if rows within the matrices have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, ClassicCryptoError> {
    let n = a.len(); // rows in A
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = a[0].len(); // cols in A

    if b.len() != m_common {
        return Err(ClassicCryptoError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }
    let p = b.first().map_or(0, Vec::len); // cols in B

    let mut c = vec![vec![0; p]; n];

    for i in 0..n {
        if a[i].len() != m_common {
            return Err(ClassicCryptoError::DimensionMismatch(format!(
                "Matrix A row {} has incorrect length (expected {})",
                i, m_common
            )));
        }
        for j in 0..p {
            let mut sum = 0i64;
            #[allow(clippy::needless_range_loop)]
            for k in 0..m_common {
                if b[k].len() != p {
                    return Err(ClassicCryptoError::DimensionMismatch(format!(
                        "Matrix B row {} has incorrect length (expected {})",
                        k, p
                    )));
                }
                let term = ring.mul(a[i][k], b[k][j]);
                sum = ring.add(sum, term);
            }
            c[i][j] = sum;
        }
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// Returns the transpose of a square matrix.
pub fn transpose(a: &Matrix) -> Matrix {
    let n = a.len();
    (0..n).map(|j| (0..n).map(|i| a[i][j]).collect()).collect()
}

/// The matrix with `row` and `col` removed.
pub fn minor(a: &Matrix, row: usize, col: usize) -> Matrix {
    a.iter()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Exact determinant of a square matrix.
///
/// Small orders go through cofactor expansion, larger ones through Bareiss
/// elimination. The empty matrix has determinant 1.
pub fn determinant(a: &Matrix) -> BigInt {
    if a.len() <= LAPLACE_MAX_ORDER {
        laplace_determinant(a)
    } else {
        bareiss_determinant(a)
    }
}

/// Recursive cofactor (Laplace) expansion along the first row:
/// `det(M) = Σ_j (-1)^j * M[0][j] * det(minor(0, j))`.
pub fn laplace_determinant(a: &Matrix) -> BigInt {
    match a.len() {
        0 => BigInt::one(),
        1 => BigInt::from(a[0][0]),
        2 => {
            BigInt::from(a[0][0]) * BigInt::from(a[1][1])
                - BigInt::from(a[0][1]) * BigInt::from(a[1][0])
        }
        _ => a[0]
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(|(j, &v)| {
                let term = BigInt::from(v) * laplace_determinant(&minor(a, 0, j));
                if j % 2 == 0 { term } else { -term }
            })
            .sum(),
    }
}

/// Fraction-free Gaussian elimination. Every division is exact, so the
/// result equals the cofactor expansion.
pub fn bareiss_determinant(a: &Matrix) -> BigInt {
    let n = a.len();
    if n == 0 {
        return BigInt::one();
    }

    let mut m: Vec<Vec<BigInt>> = a
        .iter()
        .map(|row| row.iter().map(|&v| BigInt::from(v)).collect())
        .collect();
    let mut negate = false;
    let mut prev = BigInt::one();

    for k in 0..n - 1 {
        if m[k][k].is_zero() {
            // Find a pivot below; a zero column means a singular matrix
            match (k + 1..n).find(|&i| !m[i][k].is_zero()) {
                Some(i) => {
                    m.swap(k, i);
                    negate = !negate;
                }
                None => return BigInt::zero(),
            }
        }
        for i in k + 1..n {
            for j in k + 1..n {
                let value = (&m[i][j] * &m[k][k] - &m[i][k] * &m[k][j]) / &prev;
                m[i][j] = value;
            }
        }
        prev = m[k][k].clone();
    }

    let det = m[n - 1][n - 1].clone();
    if negate { -det } else { det }
}
