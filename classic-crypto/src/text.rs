//! Input normalization shared by every cipher.

use crate::preset::alphabet::{index_to_letter, letter_to_index};
use crate::ring::Vector;

/// Keeps only ASCII letters, upper-cased, in their original order.
///
/// Returns `None` when no letter remains.
///
/// # Example
///
/// ```
/// # use classic_crypto::text::upper_only;
/// assert_eq!(upper_only("Hill, 1929!").as_deref(), Some("HILL"));
/// assert_eq!(upper_only("42 - ?"), None);
/// ```
pub fn upper_only(text: &str) -> Option<String> {
    let upper: String = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_uppercase())
        .collect();

    if upper.is_empty() { None } else { Some(upper) }
}

/// Maps normalized letters to their alphabet indices (A=0 … Z=25).
///
/// Characters outside `A..=Z` are skipped; callers pass [`upper_only`] output.
pub fn to_indices(letters: &str) -> Vector {
    letters.chars().filter_map(letter_to_index).collect()
}

/// Maps indices back to letters, reducing each mod 26.
pub fn from_indices(indices: &[i64]) -> String {
    indices.iter().map(|&i| index_to_letter(i)).collect()
}
