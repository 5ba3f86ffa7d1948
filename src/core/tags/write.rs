//! Write changed text frames back to an MP3.
//!
//! `FrameWriter` is the seam between the save state machine and the `id3` crate.
//! Production code uses `Id3Writer`; tests plug in writers that fail on purpose.

use std::path::Path;

use id3::Encoding;
use id3::frame::Frame;
use id3::{ErrorKind, Tag, TagLike, Version};
use log::debug;

use super::super::error::SaveError;
use super::super::types::{TagField, TagSet};

pub trait FrameWriter {
    /// Write `tags[field]` for every field in `changed` that maps to a frame.
    fn write_frames(
        &self,
        path: &Path,
        tags: &TagSet,
        changed: &[TagField],
    ) -> Result<(), SaveError>;
}

/// Writes ID3v2.4 with UTF-8 text frames, whatever the file held before.
#[derive(Debug, Clone, Copy, Default)]
pub struct Id3Writer;

impl FrameWriter for Id3Writer {
    fn write_frames(
        &self,
        path: &Path,
        tags: &TagSet,
        changed: &[TagField],
    ) -> Result<(), SaveError> {
        let frames: Vec<(TagField, &'static str)> = changed
            .iter()
            .filter_map(|&f| f.frame_id().map(|id| (f, id)))
            .collect();

        if frames.is_empty() {
            return Ok(());
        }

        // No tag yet => start a fresh one; any other read error is a real failure.
        let mut tag = match Tag::read_from_path(path) {
            Ok(t) => t,
            Err(e) if matches!(e.kind, ErrorKind::NoTag) => Tag::new(),
            Err(e) => return Err(e.into()),
        };

        for (field, id) in frames {
            set_text_opt(&mut tag, id, tags.get(field));
            debug!("{}: {id} <- {:?}", path.display(), tags.get(field));
        }

        tag.write_to_path(path, Version::Id3v24)?;
        Ok(())
    }
}

/// Set a UTF-8 text frame to exactly `v`, or remove it when `v` is blank.
fn set_text_opt(tag: &mut Tag, id: &str, v: &str) {
    if v.trim().is_empty() {
        let _ = tag.remove(id); // TagLike::remove returns Vec<Frame>; discard it
        return;
    }
    let frame = Frame::text(id, v).set_encoding(Some(Encoding::UTF8));
    tag.add_frame(frame);
}
