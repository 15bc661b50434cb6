#[derive(thiserror::Error, Debug)]
pub enum ClassicCryptoError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, n) != 1).
    #[error("NotInvertible: {0}")]
    NotInvertible(String),
    /// Error when creating a ring with an invalid modulus (n <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// A flat value list or vector does not match the matrix order.
    #[error("SizeMismatch: {0}")]
    SizeMismatch(String),
    /// Two matrix operands have different orders.
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    #[error("Internal error: exact cofactor does not fit into i64")]
    CalculationOverflow,

    #[error("effective key is empty")]
    EmptyKey,
    #[error("effective message is empty")]
    EmptyMessage,
    #[error("effective key size must be a square number of order >= 2, got {0} letters")]
    InvalidKeyLength(usize),
    #[error("key is not invertible modulo {modulus} (determinant {determinant})")]
    KeyNotInvertible { modulus: u64, determinant: i64 },
    #[error(
        "message length {length} is not a multiple of key order {order}, consider adding padding"
    )]
    LengthNotMultiple { length: usize, order: usize },

    #[error("known text size must be a square number of order >= 2, got {0} letters")]
    InvalidSampleLength(usize),
    #[error("plaintext order {plaintext} differs from ciphertext order {ciphertext}")]
    OrderMismatch { plaintext: usize, ciphertext: usize },
    #[error("plaintext matrix is not invertible modulo {modulus} (determinant {determinant})")]
    PlaintextNotInvertible { modulus: u64, determinant: i64 },

    #[error("InvalidSubstitutionKey: {0}")]
    InvalidSubstitutionKey(String),

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
