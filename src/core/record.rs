//! `TagRecord`: one MP3 file in the working set.
//!
//! - `original_tags` = what is on disk (baseline)
//! - `tags` = the working copy the user converts / edits
//! - `analysis` = Hebrew analysis of the *baseline*, computed once at load
//!
//! `convert()` always assigns the precomputed `analysis[field].converted`, so calling
//! it twice is the same as calling it once.

use std::path::{Path, PathBuf};

use super::hebrew::{analyze_file_name, analyze_text};
use super::types::{AlbumArt, TagField, TagSet, TextAnalysis};

/// Per-field analysis, same fixed shape as `TagSet`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAnalysis {
    pub title: TextAnalysis,
    pub artist: TextAnalysis,
    pub album: TextAnalysis,
    pub filename: TextAnalysis,
}

impl FieldAnalysis {
    pub fn of(tags: &TagSet) -> Self {
        Self {
            title: analyze_text(&tags.title),
            artist: analyze_text(&tags.artist),
            album: analyze_text(&tags.album),
            filename: analyze_file_name(&tags.filename),
        }
    }

    pub fn get(&self, field: TagField) -> &TextAnalysis {
        match field {
            TagField::Title => &self.title,
            TagField::Artist => &self.artist,
            TagField::Album => &self.album,
            TagField::Filename => &self.filename,
        }
    }
}

/// Before/after pair for one field, for previews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPreview<'a> {
    pub field: TagField,
    pub original: &'a str,
    pub current: &'a str,
    pub analysis: &'a TextAnalysis,
}

impl TagPreview<'_> {
    pub fn is_changed(&self) -> bool {
        self.original != self.current
    }
}

#[derive(Debug, Clone)]
pub struct TagRecord {
    pub path: PathBuf,
    pub original_tags: TagSet,
    pub tags: TagSet,
    pub album_art: Option<AlbumArt>,
    pub analysis: FieldAnalysis,
    pub selected: bool,
}

impl TagRecord {
    /// Build a record from tags read off disk.
    pub fn new(path: PathBuf, original_tags: TagSet, album_art: Option<AlbumArt>) -> Self {
        let analysis = FieldAnalysis::of(&original_tags);
        Self {
            path,
            tags: original_tags.clone(),
            original_tags,
            album_art,
            analysis,
            selected: false,
        }
    }

    /// Degraded record for a file without an ID3 tag:
    /// title = file name, empty artist/album.
    pub fn untagged(path: PathBuf) -> Self {
        let filename = file_name_of(&path);
        let tags = TagSet {
            title: filename.clone(),
            artist: String::new(),
            album: String::new(),
            filename,
        };
        Self::new(path, tags, None)
    }

    pub fn has_hebrew(&self) -> bool {
        TagField::ALL
            .into_iter()
            .any(|f| self.analysis.get(f).contains_hebrew)
    }

    /// Apply the precomputed conversion to every field that needs it.
    /// Returns true if `tags` changed.
    pub fn convert(&mut self) -> bool {
        let before = self.tags.clone();

        for field in TagField::ALL {
            let analysis = self.analysis.get(field);
            if analysis.needs_conversion {
                let converted = analysis.converted.clone();
                self.tags.set(field, converted);
            }
        }

        self.tags != before
    }

    pub fn has_changes(&self) -> bool {
        self.tags != self.original_tags
    }

    pub fn changed_fields(&self) -> Vec<TagField> {
        self.tags.diff(&self.original_tags)
    }

    /// Drop pending edits.
    pub fn revert(&mut self) {
        self.tags = self.original_tags.clone();
    }

    /// Manual edit of one field (e.g. fixing the file name before saving).
    pub fn set_field(&mut self, field: TagField, value: String) {
        self.tags.set(field, value);
    }

    pub fn preview(&self, field: TagField) -> TagPreview<'_> {
        let analysis = self.analysis.get(field);
        TagPreview {
            field,
            original: &analysis.original,
            current: self.tags.get(field),
            analysis,
        }
    }

    /// Basename, for lists and status messages.
    pub fn display_path(&self) -> String {
        file_name_of(&self.path)
    }

    /// Called by the save machine once everything is on disk, so the baseline
    /// matches the file: `written` frames that were blank are gone, and the name
    /// is the one on disk, which may differ from what was typed (cleaning, `_1`).
    pub(crate) fn commit(&mut self, new_path: Option<PathBuf>, written: &[TagField]) {
        if let Some(p) = new_path {
            self.path = p;
        }
        for &field in written {
            if field.frame_id().is_some() && self.tags.get(field).trim().is_empty() {
                self.tags.set(field, String::new());
            }
        }
        self.tags.filename = file_name_of(&self.path);
        self.original_tags = self.tags.clone();
    }
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hebrew_record() -> TagRecord {
        TagRecord::new(
            PathBuf::from("/music/ריש.mp3"),
            TagSet {
                title: "םולש".into(),
                artist: "Artist".into(),
                album: "Best of ריש".into(),
                filename: "ריש.mp3".into(),
            },
            None,
        )
    }

    #[test]
    fn fresh_record_has_no_changes() {
        let r = hebrew_record();
        assert!(!r.has_changes());
        assert!(r.has_hebrew());
        assert!(!r.selected);
        assert_eq!(r.tags, r.original_tags);
    }

    #[test]
    fn convert_applies_precomputed_values() {
        let mut r = hebrew_record();
        assert!(r.convert());
        assert!(r.has_changes());
        assert_eq!(r.tags.title, "שלום");
        assert_eq!(r.tags.artist, "Artist");
        assert_eq!(r.tags.album, "Best of שיר");
        assert_eq!(r.tags.filename, "שיר.mp3");
        assert_eq!(
            r.changed_fields(),
            vec![TagField::Title, TagField::Album, TagField::Filename]
        );
    }

    #[test]
    fn convert_is_idempotent() {
        let mut r = hebrew_record();
        r.convert();
        let once = r.tags.clone();
        assert!(!r.convert());
        assert_eq!(r.tags, once);
    }

    #[test]
    fn convert_overwrites_manual_edits_of_hebrew_fields_only() {
        let mut r = hebrew_record();
        r.set_field(TagField::Title, "edited".into());
        r.set_field(TagField::Artist, "Someone".into());
        r.convert();
        assert_eq!(r.tags.title, "שלום");
        assert_eq!(r.tags.artist, "Someone");
    }

    #[test]
    fn latin_record_has_nothing_to_convert() {
        let mut r = TagRecord::new(
            PathBuf::from("a.mp3"),
            TagSet {
                title: "Song".into(),
                artist: "Band".into(),
                album: String::new(),
                filename: "a.mp3".into(),
            },
            None,
        );
        assert!(!r.has_hebrew());
        assert!(!r.convert());
        assert!(!r.has_changes());
    }

    #[test]
    fn revert_drops_pending_edits() {
        let mut r = hebrew_record();
        r.convert();
        r.revert();
        assert!(!r.has_changes());
    }

    #[test]
    fn preview_pairs_original_and_current() {
        let mut r = hebrew_record();
        r.convert();
        let p = r.preview(TagField::Title);
        assert_eq!(p.original, "םולש");
        assert_eq!(p.current, "שלום");
        assert!(p.is_changed());
        assert!(p.analysis.contains_hebrew);
        assert!(!r.preview(TagField::Artist).is_changed());
    }

    #[test]
    fn untagged_uses_file_name_as_title() {
        let r = TagRecord::untagged(PathBuf::from("/x/ריש.mp3"));
        assert_eq!(r.tags.title, "ריש.mp3");
        assert_eq!(r.tags.artist, "");
        assert_eq!(r.display_path(), "ריש.mp3");
        assert!(r.has_hebrew());
    }

    #[test]
    fn commit_rebaselines() {
        let mut r = hebrew_record();
        r.convert();
        let changed = r.changed_fields();
        r.commit(Some(PathBuf::from("/music/שיר.mp3")), &changed);
        assert!(!r.has_changes());
        assert_eq!(r.original_tags, r.tags);
        assert_eq!(r.display_path(), "שיר.mp3");
    }

    #[test]
    fn commit_takes_name_and_blanks_from_disk() {
        let mut r = hebrew_record();
        r.set_field(TagField::Filename, "ריש".into());
        r.set_field(TagField::Artist, "   ".into());
        let changed = r.changed_fields();

        // Cleaned name matched the current path, so nothing was renamed.
        r.commit(None, &changed);

        assert_eq!(r.tags.filename, "ריש.mp3");
        assert_eq!(r.tags.artist, "");
        assert_eq!(r.original_tags, r.tags);
        assert!(!r.has_changes());
    }
}
