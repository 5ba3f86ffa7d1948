//! `{path}.bak` handling for a single save attempt.
//!
//! A `.bak` we did not create is never touched: the copy goes to
//! `{path}.1.bak`, `{path}.2.bak`, ... instead.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::super::error::SaveError;

pub(crate) fn backup_path_for(path: &Path) -> PathBuf {
    numbered_backup_path(path, 0)
}

fn numbered_backup_path(path: &Path, n: u32) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_owned();
    if n > 0 {
        s.push(format!(".{n}"));
    }
    s.push(".bak");
    PathBuf::from(s)
}

/// First backup name that does not exist yet.
fn free_backup_path(path: &Path) -> PathBuf {
    let mut n = 0;
    loop {
        let candidate = numbered_backup_path(path, n);
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// A live backup copy. Exactly one of `discard` / `restore` ends its life.
#[derive(Debug)]
pub(crate) struct Backup {
    original: PathBuf,
    backup: PathBuf,
}

impl Backup {
    pub(crate) fn create(path: &Path) -> Result<Self, SaveError> {
        let backup = free_backup_path(path);
        if backup != backup_path_for(path) {
            warn!(
                "{} already exists; backing up to {} instead",
                backup_path_for(path).display(),
                backup.display()
            );
        }

        fs::copy(path, &backup).map_err(|source| SaveError::Backup {
            path: backup.clone(),
            source,
        })?;
        debug!("backup created: {}", backup.display());

        Ok(Self {
            original: path.to_path_buf(),
            backup,
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.backup
    }

    /// Save went through: drop the copy.
    pub(crate) fn discard(self) -> io::Result<()> {
        fs::remove_file(&self.backup)?;
        debug!("backup removed: {}", self.backup.display());
        Ok(())
    }

    /// Save failed: put the original bytes back at the original path, then drop the copy.
    pub(crate) fn restore(self) -> io::Result<()> {
        fs::copy(&self.backup, &self.original)?;
        fs::remove_file(&self.backup)?;
        debug!("restored {} from backup", self.original.display());
        Ok(())
    }
}
