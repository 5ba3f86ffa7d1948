//! core/tags/mod.rs
//!
//! ID3 tag store.
//! Public API:
//! - [`load`] reads an MP3 into a [`TagRecord`](super::record::TagRecord).
//! - [`save`] writes a record's pending changes back (backup, write, rename, commit).

mod art;
mod backup;
mod read;
mod rename;
mod save;
mod write;

pub use read::load;
pub use save::{SaveOutcome, save};
pub use write::{FrameWriter, Id3Writer};
