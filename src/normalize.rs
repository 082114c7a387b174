//! Text normalization for merchant name, city and transaction id fields.
//!
//! BR Code text fields are restricted to `[A-Z0-9 ]`. Accented letters are
//! folded to their base letter through canonical decomposition, so
//! `"Doação"` becomes `"DOACAO"` rather than `"DOAO"`.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Normalizes free text into the BR Code character subset.
///
/// Decomposes (NFD), drops combining diacritical marks, uppercases with
/// locale-independent case mapping and removes every character that is not
/// an ASCII uppercase letter, ASCII digit or space. Never fails; empty input
/// yields an empty string. No length limit is applied here.
///
/// # Examples
///
/// ```
/// use pix_brcode::normalize;
///
/// assert_eq!(normalize("Doação Central"), "DOACAO CENTRAL");
/// assert_eq!(normalize("Central/Sertão"), "CENTRALSERTAO");
/// ```
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == ' ')
        .collect()
}

/// Returns the first `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
