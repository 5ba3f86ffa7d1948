//! Split a string into ordered Hebrew / non-Hebrew runs.
//!
//! Segmentation is lossless: concatenating every `TextRun::text` gives back the input.
//!
//! Boundaries follow the code-point test in `detect`, with one exception: an ASCII
//! `'` or `"` sitting next to a Hebrew letter (and not next to an ASCII letter or
//! digit) is a typed geresh/gershayim and joins the Hebrew run. Otherwise reversing
//! the run would leave the mark stranded on the wrong letter.

use super::detect::{is_ascii_geresh, is_hebrew_char, is_hebrew_letter};
use crate::core::types::TextRun;

pub fn segment(text: &str) -> Vec<TextRun> {
    let chars: Vec<char> = text.chars().collect();
    let mut runs: Vec<TextRun> = Vec::new();

    let mut current = String::new();
    let mut current_hebrew = false;

    for (i, &c) in chars.iter().enumerate() {
        let hebrew = classify(&chars, i);

        if !current.is_empty() && hebrew != current_hebrew {
            runs.push(TextRun {
                text: std::mem::take(&mut current),
                is_hebrew: current_hebrew,
            });
        }

        current_hebrew = hebrew;
        current.push(c);
    }

    if !current.is_empty() {
        runs.push(TextRun {
            text: current,
            is_hebrew: current_hebrew,
        });
    }

    runs
}

fn classify(chars: &[char], i: usize) -> bool {
    let c = chars[i];
    if is_hebrew_char(c) {
        return true;
    }
    if !is_ascii_geresh(c) {
        return false;
    }

    let prev = i.checked_sub(1).map(|j| chars[j]);
    let next = chars.get(i + 1).copied();

    let touches_letter = prev.is_some_and(is_hebrew_letter) || next.is_some_and(is_hebrew_letter);
    let touches_latin = prev.is_some_and(|p| p.is_ascii_alphanumeric())
        || next.is_some_and(|n| n.is_ascii_alphanumeric());

    touches_letter && !touches_latin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(runs: &[TextRun]) -> String {
        runs.iter().map(|r| r.text.as_str()).collect()
    }

    fn shape(runs: &[TextRun]) -> Vec<(&str, bool)> {
        runs.iter().map(|r| (r.text.as_str(), r.is_hebrew)).collect()
    }

    #[test]
    fn empty_input_has_no_runs() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn concatenation_reconstructs_input() {
        let samples = [
            "",
            " ",
            "plain latin",
            "שלום",
            "Hello שלום World",
            "  שיר  - 03 -  עברי.mp3 ",
            "צה\"ל ו-ג'ורג' 1999",
            "שָׁלוֹם עֲלֵיכֶם",
            "\u{FB1D}abc\u{05F3}",
            "'\"''\"",
        ];
        for s in samples {
            assert_eq!(joined(&segment(s)), s, "lossy segmentation for {s:?}");
        }
    }

    #[test]
    fn latin_only_is_one_run() {
        assert_eq!(shape(&segment("abc 123")), vec![("abc 123", false)]);
    }

    #[test]
    fn hebrew_only_is_one_run() {
        assert_eq!(shape(&segment("שלום")), vec![("שלום", true)]);
    }

    #[test]
    fn whitespace_belongs_to_the_non_hebrew_side() {
        assert_eq!(
            shape(&segment("Hello שלום World")),
            vec![("Hello ", false), ("שלום", true), (" World", false)]
        );
        // Space between two Hebrew words splits them into separate runs.
        assert_eq!(
            shape(&segment("שיר עברי")),
            vec![("שיר", true), (" ", false), ("עברי", true)]
        );
    }

    #[test]
    fn ascii_geresh_joins_hebrew_run() {
        assert_eq!(shape(&segment("'גרו'ג")), vec![("'גרו'ג", true)]);
        assert_eq!(shape(&segment("ל\"הצ")), vec![("ל\"הצ", true)]);
    }

    #[test]
    fn apostrophe_next_to_latin_stays_latin() {
        assert_eq!(
            shape(&segment("rock'שיר")),
            vec![("rock'", false), ("שיר", true)]
        );
        assert_eq!(shape(&segment("don't")), vec![("don't", false)]);
    }
}
