//! Save state machine for one `TagRecord`.
//!
//! Unchanged -> BackingUp -> WritingTags -> [Renaming] -> Committed
//!                              \______________/
//!                                 on error: RolledBack (restore from `.bak`)
//!
//! The record itself is only touched in the Committed step, so a failed save
//! leaves `tags` / `original_tags` exactly as they were and the user can retry.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::super::error::SaveError;
use super::super::record::TagRecord;
use super::super::types::{TagField, TagSet};
use super::backup::Backup;
use super::rename::{clean_file_name, unique_path};
use super::write::FrameWriter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing to do; no I/O happened.
    Unchanged,
    /// Written to disk. `renamed_to` is set when the file got a new name.
    Saved { renamed_to: Option<PathBuf> },
}

pub fn save(record: &mut TagRecord, writer: &dyn FrameWriter) -> Result<SaveOutcome, SaveError> {
    if !record.has_changes() {
        return Ok(SaveOutcome::Unchanged);
    }

    let changed = record.changed_fields();

    // Validate the new name before touching the disk.
    let new_name = if changed.contains(&TagField::Filename) {
        let name = clean_file_name(&record.tags.filename)
            .ok_or_else(|| SaveError::InvalidFileName(record.tags.filename.clone()))?;
        Some(name)
    } else {
        None
    };

    let backup = Backup::create(&record.path)?;
    let backup_path = backup.path().to_path_buf();

    match write_then_rename(&record.path, &record.tags, &changed, new_name.as_deref(), writer) {
        Ok(renamed_to) => {
            if let Err(e) = backup.discard() {
                warn!("saved, but could not remove {}: {e}", backup_path.display());
            }

            info!(
                "saved {} ({} field(s) changed)",
                record.display_path(),
                changed.len()
            );
            record.commit(renamed_to.clone(), &changed);
            Ok(SaveOutcome::Saved { renamed_to })
        }
        Err(cause) => {
            warn!(
                "save failed for {}: {cause}; rolling back",
                record.path.display()
            );
            match backup.restore() {
                Ok(()) => Err(cause),
                Err(source) => Err(SaveError::Rollback {
                    cause: Box::new(cause),
                    backup: backup_path,
                    source,
                }),
            }
        }
    }
}

fn write_then_rename(
    path: &Path,
    tags: &TagSet,
    changed: &[TagField],
    new_name: Option<&str>,
    writer: &dyn FrameWriter,
) -> Result<Option<PathBuf>, SaveError> {
    writer.write_frames(path, tags, changed)?;

    let Some(new_name) = new_name else {
        return Ok(None);
    };

    let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    let wanted = dir.join(new_name);
    if wanted == path {
        return Ok(None);
    }

    let target = unique_path(wanted);
    fs::rename(path, &target).map_err(|source| SaveError::Rename {
        target: target.clone(),
        source,
    })?;
    info!("renamed {} -> {}", path.display(), target.display());

    Ok(Some(target))
}
