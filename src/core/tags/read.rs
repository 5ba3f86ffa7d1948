//! core/tags/read.rs
//! Read ID3 tags from an MP3 and turn them into a `TagRecord`.
//!
//! - Only TIT2 / TPE1 / TALB are read; `filename` comes from the path.
//! - Missing frames become "" (not an error).
//! - A file without any ID3 tag is an error (`LoadError::NoTags`): the caller decides
//!   whether to skip it or fall back to `TagRecord::untagged`.

use std::path::Path;

use id3::frame::Content;
use id3::{Tag, TagLike};
use log::debug;

use super::super::error::LoadError;
use super::super::hebrew::is_hebrew;
use super::super::record::{TagRecord, file_name_of};
use super::super::types::TagSet;
use super::art::first_picture;

pub fn load(path: &Path) -> Result<TagRecord, LoadError> {
    let tag = Tag::read_from_path(path)?;

    let title = text_frame(&tag, "TIT2");
    let artist = text_frame(&tag, "TPE1");
    let album = text_frame(&tag, "TALB");

    if [&title, &artist, &album].iter().any(|v| is_hebrew(v.as_deref())) {
        debug!("{}: Hebrew in tag frames", path.display());
    }

    let tags = TagSet {
        title: title.unwrap_or_default(),
        artist: artist.unwrap_or_default(),
        album: album.unwrap_or_default(),
        filename: file_name_of(path),
    };

    Ok(TagRecord::new(path.to_path_buf(), tags, first_picture(&tag)))
}

/// Best-effort string value of a text frame; `None` when the frame is absent.
///
/// ID3v2.4 allows several values in one frame, separated by NUL. We show them
/// joined with " / " so nothing is silently dropped.
fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    match tag.get(id)?.content() {
        Content::Text(s) => Some(s.trim_end_matches('\0').replace('\0', " / ")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tags::test_support::{write_mp3, write_untagged_mp3};
    use id3::Version;
    use id3::frame::{Picture, PictureType};

    #[test]
    fn reads_three_frames_and_file_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_mp3(dir.path(), "ריש.mp3", "םולש", "Artist", "");

        let record = load(&path).expect("load");
        assert_eq!(record.original_tags.title, "םולש");
        assert_eq!(record.original_tags.artist, "Artist");
        assert_eq!(record.original_tags.album, "");
        assert_eq!(record.original_tags.filename, "ריש.mp3");
        assert_eq!(record.tags, record.original_tags);
        assert!(record.has_hebrew());
        assert!(!record.has_changes());
        assert!(record.album_art.is_none());
    }

    #[test]
    fn reads_first_picture() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_mp3(dir.path(), "art.mp3", "t", "a", "b");

        let mut tag = Tag::read_from_path(&path).expect("read");
        tag.add_frame(Picture {
            mime_type: "image/png".to_string(),
            picture_type: PictureType::CoverFront,
            description: String::new(),
            data: vec![1, 2, 3, 4],
        });
        tag.write_to_path(&path, Version::Id3v24).expect("write");

        let record = load(&path).expect("load");
        let art = record.album_art.expect("album art");
        assert_eq!(art.mime_type, "image/png");
        assert_eq!(art.data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn untagged_file_is_no_tags() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_untagged_mp3(dir.path(), "plain.mp3");
        assert_eq!(load(&path).unwrap_err(), LoadError::NoTags);
    }

    #[test]
    fn missing_file_is_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load(&dir.path().join("nope.mp3")).unwrap_err();
        assert_eq!(err, LoadError::Missing);
    }
}
