//! core/mod.rs
//!
//! The brain of the app:
//! - Discover candidate MP3 paths (filesystem walk)
//! - Detect and reverse visually-ordered Hebrew (`hebrew`)
//! - Load / save ID3 tags with backup + rollback (`tags`)
//! - Hold the working set and aggregate counts (`batch`), plus a best-effort undo list (`history`)
//!
//! - Keep the scan pipeline explicit and modular:
//!   (A) discover paths -> Vec<PathBuf>
//!   (B) load tags -> Vec<TagRecord> (+ per-file failures)
//!
//! The GUI stays dumb: it only calls into here and renders what comes back.

pub mod batch;
pub mod error;
pub mod hebrew;
pub mod history;
pub mod library;
pub mod record;
pub mod tags;
pub mod types;

use std::collections::HashSet;
use std::path::PathBuf;

use error::ScanError;
use library::Discovery;

/// Discover MP3 files under multiple roots.
///
/// - De-dupes across overlapping roots by full path
/// - Sorts paths once (core owns ordering, GUI shouldn't)
pub fn scan_paths(roots: &[PathBuf]) -> Result<Discovery, ScanError> {
    let mut seen: HashSet<PathBuf> = HashSet::with_capacity(1024);
    let mut out = Discovery::default();

    for root in roots {
        let found = library::scan_mp3s(root)?;
        out.skipped_entries += found.skipped_entries;
        for path in found.paths {
            if seen.insert(path.clone()) {
                out.paths.push(path);
            }
        }
    }

    out.paths.sort();
    Ok(out)
}
