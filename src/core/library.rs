//! Filesystem walk: find `.mp3` files under a root.
//!
//! Only the root itself is fatal. Anything unreadable below it (a locked folder,
//! a vanished entry) is skipped and counted, so one bad folder never kills a scan.

use std::path::{Path, PathBuf};

use log::warn;

use super::error::ScanError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub paths: Vec<PathBuf>,
    /// Directory entries we could not read.
    pub skipped_entries: usize,
}

pub fn scan_mp3s(root: &Path) -> Result<Discovery, ScanError> {
    let entries = std::fs::read_dir(root).map_err(|source| ScanError::Root {
        path: root.to_path_buf(),
        source,
    })?;

    let mut out = Discovery::default();
    walk_entries(entries, &mut out);
    Ok(out)
}

fn walk_dir(dir: &Path, out: &mut Discovery) {
    match std::fs::read_dir(dir) {
        Ok(entries) => walk_entries(entries, out),
        Err(e) => {
            warn!("skipping folder {dir:?}: {e}");
            out.skipped_entries += 1;
        }
    }
}

fn walk_entries(entries: std::fs::ReadDir, out: &mut Discovery) {
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                out.skipped_entries += 1;
                continue;
            }
        };
        let path = entry.path();

        if path.is_dir() {
            walk_dir(&path, out);
        } else if is_mp3(&path) {
            out.paths.push(path);
        }
    }
}

pub(crate) fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}
