//! Error types for loading, saving and scanning.
//!
//! - `LoadError` is `Clone` so it can ride inside GUI messages and batch reports.
//! - `SaveError` keeps the underlying `io::Error` / `id3::Error` as its source.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("file not found")]
    Missing,

    #[error("permission denied")]
    PermissionDenied,

    #[error("no ID3 tags")]
    NoTags,

    #[error("unreadable: {0}")]
    Unreadable(String),
}

impl LoadError {
    pub(crate) fn from_io(e: &io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => LoadError::Missing,
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied,
            _ => LoadError::Unreadable(e.to_string()),
        }
    }
}

impl From<id3::Error> for LoadError {
    fn from(e: id3::Error) -> Self {
        match e.kind {
            id3::ErrorKind::NoTag => LoadError::NoTags,
            id3::ErrorKind::Io(ref io_err) => LoadError::from_io(io_err),
            _ => LoadError::Unreadable(e.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum SaveError {
    /// The requested file name is blank; rejected before any I/O.
    #[error("invalid file name {0:?}")]
    InvalidFileName(String),

    /// Backup could not be created; the original file was not touched.
    #[error("could not create backup {}: {source}", path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the ID3 frames failed; the file was restored from backup.
    #[error("writing tags failed: {0}")]
    Write(#[from] id3::Error),

    /// Renaming failed after tags were written; the file was restored from backup.
    #[error("rename to {} failed: {source}", target.display())]
    Rename {
        target: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Restoring from backup failed too. The `.bak` file is left on disk.
    #[error("{cause}; restoring from {} also failed: {source}", backup.display())]
    Rollback {
        cause: Box<SaveError>,
        backup: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read folder {}: {source}", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum UndoError {
    #[error("cannot reload {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error(transparent)]
    Save(#[from] SaveError),
}
