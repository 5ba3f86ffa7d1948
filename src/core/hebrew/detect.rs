//! Hebrew detection by code-point range.
//!
//! We use the widest range: the Hebrew block (U+0590–U+05FF, which already holds
//! geresh U+05F3 and gershayim U+05F4) plus Hebrew presentation forms (U+FB1D–U+FB4F).

use std::ops::RangeInclusive;

const HEBREW_BLOCK: RangeInclusive<char> = '\u{0590}'..='\u{05FF}';
const HEBREW_PRESENTATION_FORMS: RangeInclusive<char> = '\u{FB1D}'..='\u{FB4F}';

/// Letters only: alef..tav, the Yiddish ligatures, and presentation forms.
/// Points, cantillation and punctuation are in the block but are not letters.
const HEBREW_LETTERS: RangeInclusive<char> = '\u{05D0}'..='\u{05F2}';

/// True if `c` belongs to the Hebrew block or the Hebrew presentation forms.
pub fn is_hebrew_char(c: char) -> bool {
    HEBREW_BLOCK.contains(&c) || HEBREW_PRESENTATION_FORMS.contains(&c)
}

pub fn is_hebrew_letter(c: char) -> bool {
    HEBREW_LETTERS.contains(&c) || HEBREW_PRESENTATION_FORMS.contains(&c)
}

/// ASCII stand-ins people type instead of ׳ and ״.
pub(crate) fn is_ascii_geresh(c: char) -> bool {
    c == '\'' || c == '"'
}

/// True if any character of `text` is Hebrew. Empty text is never Hebrew.
pub fn contains_hebrew(text: &str) -> bool {
    text.chars().any(is_hebrew_char)
}

/// Nullable form of [`contains_hebrew`]: `None` is treated like `""`.
pub fn is_hebrew(text: Option<&str>) -> bool {
    text.is_some_and(contains_hebrew)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GERESH: char = '\u{05F3}';
    const GERSHAYIM: char = '\u{05F4}';

    #[test]
    fn empty_and_missing_are_not_hebrew() {
        assert!(!is_hebrew(None));
        assert!(!is_hebrew(Some("")));
        assert!(!contains_hebrew(""));
    }

    #[test]
    fn latin_and_digits_are_not_hebrew() {
        assert!(!contains_hebrew("abc123"));
        assert!(!contains_hebrew("Ünïcödé - ñ"));
    }

    #[test]
    fn single_alef_is_hebrew() {
        assert!(contains_hebrew("א"));
        assert!(is_hebrew(Some("song א")));
    }

    #[test]
    fn extended_range_is_detected() {
        // HEBREW LETTER YOD WITH HIRIQ (presentation form)
        assert!(is_hebrew_char('\u{FB1D}'));
        // HEBREW LIGATURE ALEF LAMED
        assert!(is_hebrew_char('\u{FB4F}'));
        assert!(!is_hebrew_char('\u{FB50}'));
        assert!(is_hebrew_char(GERESH));
        assert!(is_hebrew_char(GERSHAYIM));
    }

    #[test]
    fn punctuation_marks_are_not_letters() {
        assert!(is_hebrew_letter('ש'));
        assert!(!is_hebrew_letter(GERSHAYIM));
        // HEBREW POINT QAMATS
        assert!(!is_hebrew_letter('\u{05B8}'));
    }
}
