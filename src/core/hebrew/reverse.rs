//! Segment-local reversal.
//!
//! Only the inside of each Hebrew run is reversed; non-Hebrew runs and the order of
//! runs are untouched. Reversing the whole string would also swap the runs and
//! scramble mixed titles, so that is never done here.
//!
//! Reversal works on grapheme clusters, so niqqud stays on its base letter.

use unicode_segmentation::UnicodeSegmentation;

use super::detect::is_hebrew_char;
use super::segment::segment;

pub fn reverse_hebrew(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for run in segment(text) {
        if run.is_hebrew {
            out.extend(run.text.graphemes(true).rev());
        } else {
            out.push_str(&run.text);
        }
    }

    out
}

/// Like [`reverse_hebrew`], but a trailing extension (`.mp3`) is cut off first and
/// re-attached untouched.
pub fn reverse_file_name(name: &str) -> String {
    let (stem, ext) = split_extension(name);
    let mut out = reverse_hebrew(stem);
    out.push_str(ext);
    out
}

/// Splits `"name.ext"` into `("name", ".ext")`.
///
/// An extension is the final `.` plus a non-empty suffix with no whitespace and no
/// Hebrew. Leading-dot names (`.hidden`) have no extension.
pub(crate) fn split_extension(name: &str) -> (&str, &str) {
    let Some(dot) = name.rfind('.') else {
        return (name, "");
    };

    let ext = &name[dot + 1..];
    if dot == 0
        || ext.is_empty()
        || ext.chars().any(|c| c.is_whitespace() || is_hebrew_char(c))
    {
        return (name, "");
    }

    name.split_at(dot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stays_empty() {
        assert_eq!(reverse_hebrew(""), "");
        assert_eq!(reverse_file_name(""), "");
    }

    #[test]
    fn non_hebrew_passes_through() {
        for s in ["abc123", "Song - Artist (Live) [2004]", "  ", "Ünïcödé"] {
            assert_eq!(reverse_hebrew(s), s);
        }
    }

    #[test]
    fn all_hebrew_is_reversed() {
        assert_eq!(reverse_hebrew("שלום"), "םולש");
    }

    #[test]
    fn only_hebrew_runs_are_reversed_in_place() {
        assert_eq!(reverse_hebrew("Hello שלום World"), "Hello םולש World");
    }

    #[test]
    fn latin_prefix_keeps_its_position() {
        // A whole-string reverse would move "Hebrew Song - " to the end.
        assert_eq!(
            reverse_hebrew("Hebrew Song - ירבע ריש"),
            "Hebrew Song - עברי שיר"
        );
    }

    #[test]
    fn reversal_is_a_toggle() {
        let s = "Track 3 - םולש ךל";
        assert_eq!(reverse_hebrew(&reverse_hebrew(s)), s);
    }

    #[test]
    fn gershayim_stays_between_letters() {
        // Stored visually reversed: ל״הצ, reads צה״ל.
        assert_eq!(reverse_hebrew("ל\u{05F4}הצ"), "צה\u{05F4}ל");
        assert_eq!(reverse_hebrew("ל\"הצ"), "צה\"ל");
    }

    #[test]
    fn ascii_geresh_stays_on_its_letter() {
        // ג'ורג' stored reversed.
        assert_eq!(reverse_hebrew("'גרו'ג"), "ג'ורג'");
    }

    #[test]
    fn niqqud_stays_on_base_letter() {
        // ש + shin dot + qamats, then ל
        let stored = "ל\u{05E9}\u{05C1}\u{05B8}";
        assert_eq!(reverse_hebrew(stored), "\u{05E9}\u{05C1}\u{05B8}ל");
    }

    #[test]
    fn file_extension_is_kept() {
        assert_eq!(reverse_file_name("ריש.mp3"), "שיר.mp3");
        assert_eq!(reverse_file_name("01 - ריש.MP3"), "01 - שיר.MP3");
        assert_eq!(reverse_file_name("ריש"), "שיר");
    }

    #[test]
    fn split_extension_edge_cases() {
        assert_eq!(split_extension("song.mp3"), ("song", ".mp3"));
        assert_eq!(split_extension(".hidden"), (".hidden", ""));
        assert_eq!(split_extension("trailing."), ("trailing.", ""));
        assert_eq!(split_extension("a.b c"), ("a.b c", ""));
        assert_eq!(split_extension("ריש.םולש"), ("ריש.םולש", ""));
    }
}
