use lazy_static::lazy_static;
use std::collections::HashMap;

/// Number of symbols in the Latin alphabet every cipher works over.
pub const ALPHABET_SIZE: u64 = 26;

/// The alphabet in index order, A=0 … Z=25.
pub const LATIN_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

lazy_static! {
    /// A static HashMap mapping an index (0 to 25) to its uppercase letter.
    pub static ref INDEX_TO_LETTER_MAP: HashMap<u8, char> = LATIN_ALPHABET
        .chars()
        .enumerate()
        .map(|(i, ch)| (i as u8, ch))
        .collect();

    /// A static HashMap mapping an uppercase letter to its index (0 to 25).
    pub static ref LETTER_TO_INDEX_MAP: HashMap<char, u8> = INDEX_TO_LETTER_MAP
        .iter()
        .map(|(&index, &ch)| (ch, index))
        .collect();
}

/// Letter for an index; the index is reduced mod 26 first.
pub fn index_to_letter(index: i64) -> char {
    let index = index.rem_euclid(ALPHABET_SIZE as i64) as u8;
    INDEX_TO_LETTER_MAP[&index]
}

/// Index of an uppercase letter, `None` for anything else.
pub fn letter_to_index(letter: char) -> Option<i64> {
    LETTER_TO_INDEX_MAP.get(&letter).map(|&i| i as i64)
}
