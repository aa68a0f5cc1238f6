//! Caller-side word normalization.
//!
//! Applied by the front ends before a word reaches [`crate::distance`]:
//! surrounding whitespace is trimmed, the word is lowercased, and every
//! character outside the Unicode letter categories (`Lu`, `Ll`, `Lt`, `Lm`,
//! `Lo`) is dropped. Letter-like numerals (`Nl`) and combining marks (`Mn`,
//! `Mc`) do not count as letters. The distance code itself compares whatever
//! symbols it is given.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Whether `c` belongs to one of the `L*` general categories.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Normalize one raw input word.
#[must_use]
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase().chars().filter(|&c| is_letter(c)).collect()
}
