//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be “boring bags of data”
//! - No GUI code
//! - No filesystem code
//! - No tag parsing code
//!
//! `TagSet` is the fixed shape of the four text fields we care about.
//! There is no string-keyed map anywhere: a field either exists in `TagField` or it
//! does not exist at all.

use std::fmt;

/// One of the four editable text fields of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagField {
    Title,
    Artist,
    Album,
    Filename,
}

impl TagField {
    /// All fields, in display order.
    pub const ALL: [TagField; 4] = [
        TagField::Title,
        TagField::Artist,
        TagField::Album,
        TagField::Filename,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TagField::Title => "Title",
            TagField::Artist => "Artist",
            TagField::Album => "Album",
            TagField::Filename => "Filename",
        }
    }

    /// The ID3v2 frame backing this field. `Filename` lives on disk, not in the tag.
    pub fn frame_id(self) -> Option<&'static str> {
        match self {
            TagField::Title => Some("TIT2"),
            TagField::Artist => Some("TPE1"),
            TagField::Album => Some("TALB"),
            TagField::Filename => None,
        }
    }
}

impl fmt::Display for TagField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four text values of one file.
///
/// Missing frames are stored as empty strings (not `Option`), because the
/// conversion logic treats "no frame" and "empty frame" the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub filename: String,
}

impl TagSet {
    pub fn get(&self, field: TagField) -> &str {
        match field {
            TagField::Title => &self.title,
            TagField::Artist => &self.artist,
            TagField::Album => &self.album,
            TagField::Filename => &self.filename,
        }
    }

    pub fn set(&mut self, field: TagField, value: String) {
        match field {
            TagField::Title => self.title = value,
            TagField::Artist => self.artist = value,
            TagField::Album => self.album = value,
            TagField::Filename => self.filename = value,
        }
    }

    /// Fields whose values differ between `self` and `other`.
    pub fn diff(&self, other: &TagSet) -> Vec<TagField> {
        TagField::ALL
            .into_iter()
            .filter(|&f| self.get(f) != other.get(f))
            .collect()
    }
}

/// A maximal substring classified uniformly as Hebrew or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub is_hebrew: bool,
}

/// Result of running detector + segmenter + reverser over one value.
///
/// Computed once from the *original* value at load time and never recomputed,
/// so `converted` is a fixed target, not something derived from the current edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextAnalysis {
    pub contains_hebrew: bool,
    pub needs_conversion: bool,
    pub original: String,
    pub converted: String,
    pub hebrew_segment_count: usize,
    pub total_segment_count: usize,
}

/// First embedded picture (APIC) of a file.
/// Read-only: we never write pictures back.
#[derive(Clone, PartialEq, Eq)]
pub struct AlbumArt {
    pub data: Vec<u8>,
    pub mime_type: String,
}

// Picture bytes make `{:?}` output unreadable; print the size instead.
impl fmt::Debug for AlbumArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlbumArt")
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.data.len())
            .finish()
    }
}
