use id3::Tag;
use id3::frame::Content;

use super::super::types::AlbumArt;

/// First embedded picture (APIC, or PIC in v2.2 tags), passed through untouched.
pub(crate) fn first_picture(tag: &Tag) -> Option<AlbumArt> {
    for f in tag.frames() {
        if f.id() != "APIC" && f.id() != "PIC" {
            continue;
        }
        if let Content::Picture(p) = f.content() {
            return Some(AlbumArt {
                data: p.data.clone(),
                mime_type: p.mime_type.clone(),
            });
        }
    }

    None
}
