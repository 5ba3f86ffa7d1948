//! core/hebrew/mod.rs
//!
//! Hebrew text engine:
//! - `detect`: is this character / string Hebrew?
//! - `segment`: split text into Hebrew / non-Hebrew runs
//! - `reverse`: undo visual (RTL-typed-as-LTR) ordering, run by run
//!
//! `analyze_text` / `analyze_file_name` glue the three together into a `TextAnalysis`.

mod detect;
mod reverse;
mod segment;

pub use detect::{contains_hebrew, is_hebrew};
pub use reverse::{reverse_file_name, reverse_hebrew};
pub use segment::segment;

pub(crate) use reverse::split_extension;

use super::types::TextAnalysis;

/// Analyze a tag value.
pub fn analyze_text(text: &str) -> TextAnalysis {
    analyze_with(text, reverse_hebrew)
}

/// Analyze a file name; the extension is never reversed.
pub fn analyze_file_name(name: &str) -> TextAnalysis {
    analyze_with(name, reverse_file_name)
}

fn analyze_with(text: &str, reverse: fn(&str) -> String) -> TextAnalysis {
    let runs = segment(text);
    let hebrew_segment_count = runs.iter().filter(|r| r.is_hebrew).count();
    let has_hebrew = contains_hebrew(text);

    let converted = if has_hebrew {
        reverse(text)
    } else {
        text.to_string()
    };

    TextAnalysis {
        contains_hebrew: has_hebrew,
        needs_conversion: has_hebrew,
        original: text.to_string(),
        converted,
        hebrew_segment_count,
        total_segment_count: runs.len(),
    }
}
