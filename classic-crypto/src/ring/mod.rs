//! # Ring Module
//!
//! Provides the [`Ring`] struct for arithmetic in Z_n and the [`SquareMatrix`]
//! value type built on top of it.

pub mod helper;
pub mod math;
pub mod matrix;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

pub use helper::{exact_square_root, extended_gcd, gcd, mod_inverse};
pub use math::Ring;
pub use matrix::SquareMatrix;
