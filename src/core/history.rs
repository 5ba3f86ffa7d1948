//! Best-effort change history with "undo last save".
//!
//! Every committed save pushes one entry (what the file held before, what we wrote).
//! Undo replays `previous` through the normal save machine, so it gets the same
//! backup/rollback guarantees. Undo itself is not recorded: there is no redo.

use std::collections::VecDeque;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use log::info;

use super::error::UndoError;
use super::record::TagRecord;
use super::tags::{self, FrameWriter};
use super::types::{TagField, TagSet};

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Where the file lives after the save (post-rename).
    pub path: PathBuf,
    pub previous: TagSet,
    pub applied: TagSet,
    pub saved_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(path: PathBuf, previous: TagSet, applied: TagSet) -> Self {
        Self {
            path,
            previous,
            applied,
            saved_at: Local::now(),
        }
    }

    /// One-line summary, e.g. `2026-10-16 12:00:01  song.mp3 (Title, Filename)`.
    pub fn describe(&self) -> String {
        let fields: Vec<&str> = self
            .previous
            .diff(&self.applied)
            .into_iter()
            .map(TagField::label)
            .collect();

        format!(
            "{}  {} ({})",
            self.saved_at.format("%Y-%m-%d %H:%M:%S"),
            self.applied.filename,
            fields.join(", ")
        )
    }
}

/// Result of a successful undo.
#[derive(Debug, Clone)]
pub struct Undone {
    /// Path the file had before the undo (the history entry's path).
    pub from: PathBuf,
    /// Fresh record reflecting the restored file.
    pub record: TagRecord,
}

#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Append, dropping the oldest entries beyond the limit.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    /// Newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Pop the newest entry and write its `previous` tags back.
    ///
    /// On failure the entry is put back so the user can retry.
    pub fn undo_last(&mut self, writer: &dyn FrameWriter) -> Result<Option<Undone>, UndoError> {
        let Some(entry) = self.entries.pop_back() else {
            return Ok(None);
        };

        match restore_entry(&entry, writer) {
            Ok(record) => {
                info!("undid save of {}", entry.path.display());
                Ok(Some(Undone {
                    from: entry.path,
                    record,
                }))
            }
            Err(e) => {
                self.entries.push_back(entry);
                Err(e)
            }
        }
    }
}

fn restore_entry(entry: &HistoryEntry, writer: &dyn FrameWriter) -> Result<TagRecord, UndoError> {
    let mut record = tags::load(&entry.path).map_err(|source| UndoError::Load {
        path: entry.path.clone(),
        source,
    })?;

    for field in TagField::ALL {
        record.set_field(field, entry.previous.get(field).to_string());
    }

    tags::save(&mut record, writer)?;
    Ok(record)
}
