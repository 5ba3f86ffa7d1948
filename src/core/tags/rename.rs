//! File-name cleaning and collision-free rename targets.

use std::path::{Path, PathBuf};

use super::super::hebrew::split_extension;

const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Most filesystems cap a single name at 255 bytes.
const MAX_NAME_BYTES: usize = 255;

/// Clean a user-facing file name for use on disk.
///
/// - invalid characters and control characters -> `_`
/// - `.mp3` appended when missing (case-insensitive)
/// - stem truncated (on a char boundary) so the whole name fits in 255 bytes
///
/// Returns `None` for names that are blank after trimming.
pub(crate) fn clean_file_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return None;
    }

    let mut clean: String = trimmed
        .chars()
        .map(|c| {
            if INVALID_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let has_mp3 = split_extension(&clean).1.eq_ignore_ascii_case(".mp3");
    if !has_mp3 {
        clean.push_str(".mp3");
    }

    if clean.len() <= MAX_NAME_BYTES {
        return Some(clean);
    }

    let (stem, ext) = split_extension(&clean);

    let mut cut = MAX_NAME_BYTES.saturating_sub(ext.len());
    while !stem.is_char_boundary(cut) {
        cut -= 1;
    }
    Some(format!("{}{}", &stem[..cut], ext))
}

/// First free path of `path`, `stem_1.ext`, `stem_2.ext`, ...
pub(crate) fn unique_path(path: PathBuf) -> PathBuf {
    if !path.exists() {
        return path;
    }

    let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter: u32 = 1;
    loop {
        let candidate = dir.join(format!("{stem}_{counter}{ext}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
