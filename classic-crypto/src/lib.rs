//! Classical ciphers over the 26-letter Latin alphabet.
//!
//! The core is the modular matrix engine in [`ring`] behind the
//! [`hill::HillCipher`] block cipher and its known-plaintext key recovery
//! ([`hill::find_key`]). [`vigenere`] and [`substitution`] provide the
//! character-remapping ciphers.

pub mod cipher;
pub mod errors;
pub mod hill;
pub mod preset;
pub mod ring;
pub mod substitution;
pub mod text;
pub mod vigenere;

pub use cipher::{Cipher, CipherKind};
pub use errors::ClassicCryptoError;
pub use hill::HillCipher;
pub use ring::{Ring, SquareMatrix};
pub use substitution::Substitution;
pub use vigenere::Vigenere;
