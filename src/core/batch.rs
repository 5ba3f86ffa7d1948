//! Batch controller core: the working set plus batch load / convert / save.
//!
//! - `WorkingSet` owns the records, keyed by normalized absolute path.
//! - `load_paths` / `scan_directory` / `save_records` are plain functions over owned
//!   data, so the GUI can run them on a background thread and merge the result back.
//! - Every batch operation returns counts: attempted vs succeeded vs failed (by name).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::error::{LoadError, ScanError};
use super::history::HistoryEntry;
use super::record::{TagRecord, file_name_of};
use super::tags::{self, FrameWriter, SaveOutcome};
use super::types::TagField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Keep only records with Hebrew in at least one field.
    pub hebrew_only: bool,
    /// Files without an ID3 tag become degraded records instead of failures.
    pub include_untagged: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            hebrew_only: true,
            include_untagged: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// MP3 files found (or given).
    pub found: usize,
    /// Files that loaded (with or without Hebrew).
    pub loaded: usize,
    /// Loaded files with Hebrew in at least one field.
    pub hebrew: usize,
    /// Directory entries the scan could not read.
    pub skipped_entries: usize,
    /// Files that failed to load: (display name, reason).
    pub failed: Vec<(String, LoadError)>,
}

impl LoadReport {
    pub fn summary(&self) -> String {
        let mut s = format!(
            "Found {} files with Hebrew text out of {} MP3 files",
            self.hebrew, self.found
        );
        if !self.failed.is_empty() {
            s.push_str(&format!(" ({} could not be read)", self.failed.len()));
        }
        if self.skipped_entries > 0 {
            s.push_str(&format!(" ({} folder entries skipped)", self.skipped_entries));
        }
        s
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadBatch {
    pub records: Vec<TagRecord>,
    pub report: LoadReport,
}

/// Load a list of files. Never fails as a whole; per-file failures are counted.
pub fn load_paths(paths: Vec<PathBuf>, opts: LoadOptions) -> LoadBatch {
    let mut batch = LoadBatch::default();
    batch.report.found = paths.len();

    for path in paths {
        let record = match tags::load(&path) {
            Ok(r) => r,
            Err(LoadError::NoTags) if opts.include_untagged => TagRecord::untagged(path),
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
                batch.report.failed.push((file_name_of(&path), e));
                continue;
            }
        };

        batch.report.loaded += 1;
        let hebrew = record.has_hebrew();
        if hebrew {
            batch.report.hebrew += 1;
        }
        if hebrew || !opts.hebrew_only {
            batch.records.push(record);
        }
    }

    batch
}

/// Recursively scan `root` for `.mp3` files and load them.
pub fn scan_directory(root: &Path, opts: LoadOptions) -> Result<LoadBatch, ScanError> {
    info!("scanning {}", root.display());

    let discovery = super::scan_paths(&[root.to_path_buf()])?;
    let mut batch = load_paths(discovery.paths, opts);
    batch.report.skipped_entries = discovery.skipped_entries;

    info!(
        "{} of {} files loaded. {}",
        batch.report.loaded,
        batch.report.found,
        batch.report.summary()
    );
    Ok(batch)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertReport {
    pub attempted: usize,
    pub converted: usize,
}

#[derive(Debug, Clone)]
pub struct SaveResult {
    /// Working-set key the record had before saving.
    pub key: PathBuf,
    pub record: TagRecord,
    pub outcome: Result<SaveOutcome, String>,
    /// Set for saves that actually wrote something.
    pub history: Option<HistoryEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReport {
    pub attempted: usize,
    pub saved: usize,
    /// Display names of files that failed.
    pub failed: Vec<String>,
}

impl SaveReport {
    pub fn summary(&self) -> String {
        if self.failed.is_empty() {
            format!("Successfully saved {} files", self.saved)
        } else {
            format!(
                "Saved {} files. Failed to save: {}",
                self.saved,
                self.failed.join(", ")
            )
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SaveBatch {
    pub results: Vec<SaveResult>,
    pub report: SaveReport,
}

/// Save records one after another. A failure never stops the batch.
pub fn save_records(records: Vec<(PathBuf, TagRecord)>, writer: &dyn FrameWriter) -> SaveBatch {
    let mut batch = SaveBatch::default();

    for (key, mut record) in records {
        batch.report.attempted += 1;
        let previous = record.original_tags.clone();

        let outcome = tags::save(&mut record, writer).map_err(|e| e.to_string());
        let history = match &outcome {
            Ok(SaveOutcome::Saved { .. }) => {
                batch.report.saved += 1;
                Some(HistoryEntry::new(
                    record.path.clone(),
                    previous,
                    record.tags.clone(),
                ))
            }
            Ok(SaveOutcome::Unchanged) => None,
            Err(e) => {
                warn!("save failed for {}: {e}", record.display_path());
                batch.report.failed.push(record.display_path());
                None
            }
        };

        batch.results.push(SaveResult {
            key,
            record,
            outcome,
            history,
        });
    }

    batch
}

/// The set of files the user is working on.
#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    records: BTreeMap<PathBuf, TagRecord>,
}

impl WorkingSet {
    /// Normalized key for a path (absolute, no filesystem access beyond cwd).
    pub fn key_for(path: &Path) -> PathBuf {
        std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &TagRecord)> {
        self.records.iter()
    }

    pub fn get(&self, key: &Path) -> Option<&TagRecord> {
        self.records.get(key)
    }

    /// Insert (or replace) a record; returns its key.
    pub fn insert(&mut self, record: TagRecord) -> PathBuf {
        let key = Self::key_for(&record.path);
        self.records.insert(key.clone(), record);
        key
    }

    /// Replace the whole set with freshly loaded records.
    pub fn replace_all(&mut self, records: Vec<TagRecord>) {
        self.records.clear();
        for r in records {
            self.insert(r);
        }
    }

    pub fn remove(&mut self, key: &Path) -> Option<TagRecord> {
        self.records.remove(key)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn set_selected(&mut self, key: &Path, selected: bool) {
        if let Some(r) = self.records.get_mut(key) {
            r.selected = selected;
        }
    }

    pub fn select_all(&mut self, selected: bool) {
        for r in self.records.values_mut() {
            r.selected = selected;
        }
    }

    pub fn all_selected(&self) -> bool {
        !self.records.is_empty() && self.records.values().all(|r| r.selected)
    }

    pub fn any_selected(&self) -> bool {
        self.records.values().any(|r| r.selected)
    }

    /// Convert one record. Returns true if its tags changed.
    pub fn convert(&mut self, key: &Path) -> bool {
        self.records.get_mut(key).is_some_and(TagRecord::convert)
    }

    pub fn revert(&mut self, key: &Path) {
        if let Some(r) = self.records.get_mut(key) {
            r.revert();
        }
    }

    pub fn set_field(&mut self, key: &Path, field: TagField, value: String) {
        if let Some(r) = self.records.get_mut(key) {
            r.set_field(field, value);
        }
    }

    pub fn convert_selected(&mut self) -> ConvertReport {
        let mut report = ConvertReport::default();
        for r in self.records.values_mut().filter(|r| r.selected) {
            report.attempted += 1;
            if r.convert() {
                report.converted += 1;
            }
        }
        report
    }

    pub fn has_pending_saves(&self) -> bool {
        self.records.values().any(|r| r.selected && r.has_changes())
    }

    /// Snapshot of selected records with unsaved changes, for `save_records`.
    pub fn pending_saves(&self) -> Vec<(PathBuf, TagRecord)> {
        self.records
            .iter()
            .filter(|(_, r)| r.selected && r.has_changes())
            .map(|(k, r)| (k.clone(), r.clone()))
            .collect()
    }

    /// Merge save results back, re-keying renamed files.
    pub fn apply_saved(&mut self, results: &[SaveResult]) {
        for result in results {
            self.records.remove(&result.key);
            self.insert(result.record.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tags::Id3Writer;
    use crate::core::tags::test_support::{write_mp3, write_untagged_mp3};
    use std::fs;

    fn save_selected(set: &mut WorkingSet) -> SaveBatch {
        let batch = save_records(set.pending_saves(), &Id3Writer::default());
        set.apply_saved(&batch.results);
        batch
    }

    fn fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).expect("mkdir");

        write_mp3(dir.path(), "1.mp3", "םולש", "", "");
        write_mp3(dir.path(), "2.mp3", "Latin", "Band", "Album");
        write_mp3(&sub, "3.MP3", "x", "ןמא", "");
        write_mp3(&sub, "4.mp3", "Plain", "", "");
        write_mp3(dir.path(), "ריש.mp3", "t", "", "");
        fs::write(dir.path().join("notes.txt"), b"not audio").expect("write");
        dir
    }

    #[test]
    fn scan_counts_found_and_hebrew() {
        let dir = fixture_dir();
        let batch = scan_directory(dir.path(), LoadOptions::default()).expect("scan");

        assert_eq!(batch.report.found, 5);
        assert_eq!(batch.report.loaded, 5);
        assert_eq!(batch.report.hebrew, 3);
        assert!(batch.report.failed.is_empty());
        assert_eq!(batch.records.len(), 3);
        assert_eq!(
            batch.report.summary(),
            "Found 3 files with Hebrew text out of 5 MP3 files"
        );
    }

    #[test]
    fn hebrew_only_off_keeps_everything() {
        let dir = fixture_dir();
        let opts = LoadOptions {
            hebrew_only: false,
            ..LoadOptions::default()
        };
        let batch = scan_directory(dir.path(), opts).expect("scan");
        assert_eq!(batch.records.len(), 5);
    }

    #[test]
    fn untagged_files_are_skipped_and_counted() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_untagged_mp3(dir.path(), "ריש.mp3");
        write_mp3(dir.path(), "ok.mp3", "םולש", "", "");

        let batch = scan_directory(dir.path(), LoadOptions::default()).expect("scan");
        assert_eq!(batch.report.found, 2);
        assert_eq!(batch.report.loaded, 1);
        assert_eq!(
            batch.report.failed,
            vec![("ריש.mp3".to_string(), LoadError::NoTags)]
        );
    }

    #[test]
    fn untagged_files_can_load_degraded() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_untagged_mp3(dir.path(), "ריש.mp3");

        let opts = LoadOptions {
            include_untagged: true,
            ..LoadOptions::default()
        };
        let batch = scan_directory(dir.path(), opts).expect("scan");
        assert_eq!(batch.report.hebrew, 1);
        assert_eq!(batch.records[0].tags.title, "ריש.mp3");
    }

    #[test]
    fn working_set_convert_and_save_selected() {
        let dir = fixture_dir();
        let batch = scan_directory(dir.path(), LoadOptions::default()).expect("scan");

        let mut set = WorkingSet::default();
        set.replace_all(batch.records);
        assert_eq!(set.len(), 3);
        assert!(!set.any_selected());

        set.select_all(true);
        assert!(set.all_selected());

        let converted = set.convert_selected();
        assert_eq!(converted, ConvertReport { attempted: 3, converted: 3 });
        assert!(set.has_pending_saves());

        let saved = save_selected(&mut set);
        assert_eq!(saved.report.attempted, 3);
        assert_eq!(saved.report.saved, 3);
        assert!(saved.report.failed.is_empty());
        assert!(saved.results.iter().all(|r| r.history.is_some()));

        assert!(!set.has_pending_saves());
        assert_eq!(set.len(), 3);

        // ריש.mp3 was renamed and re-keyed.
        let renamed = WorkingSet::key_for(&dir.path().join("שיר.mp3"));
        let record = set.get(&renamed).expect("renamed record");
        assert!(!record.has_changes());
        assert!(set.get(&WorkingSet::key_for(&dir.path().join("ריש.mp3"))).is_none());
    }

    #[test]
    fn save_failure_is_reported_by_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_mp3(dir.path(), "a.mp3", "םולש", "", "");

        let mut set = WorkingSet::default();
        set.replace_all(load_paths(vec![path.clone()], LoadOptions::default()).records);
        set.select_all(true);
        set.convert_selected();

        // File disappears before the save: backup fails.
        fs::remove_file(&path).expect("remove");
        let batch = save_selected(&mut set);

        assert_eq!(batch.report.saved, 0);
        assert_eq!(batch.report.failed, vec!["a.mp3".to_string()]);
        assert_eq!(batch.report.summary(), "Saved 0 files. Failed to save: a.mp3");
        assert!(set.has_pending_saves());
    }

    #[test]
    fn unselected_records_are_left_alone() {
        let dir = fixture_dir();
        let batch = scan_directory(dir.path(), LoadOptions::default()).expect("scan");

        let mut set = WorkingSet::default();
        set.replace_all(batch.records);
        let key = set.iter().next().map(|(k, _)| k.clone()).expect("key");
        set.set_selected(&key, true);

        assert_eq!(set.convert_selected().attempted, 1);
        assert_eq!(set.pending_saves().len(), 1);

        set.revert(&key);
        assert!(!set.has_pending_saves());

        set.set_field(&key, TagField::Filename, "renamed.mp3".into());
        assert!(set.has_pending_saves());
        set.revert(&key);

        assert!(set.convert(&key));
        set.remove(&key);
        assert_eq!(set.len(), 2);
        set.clear();
        assert!(set.is_empty());
    }
}
