//! View constants (layout/sizing).

pub(crate) const PREVIEW_W: f32 = 440.0;
pub(crate) const HISTORY_H: f32 = 130.0;

pub(crate) const LABEL_W: f32 = 80.0;

// list sizing
pub(crate) const HEADER_TEXT: f32 = 14.0;
pub(crate) const ROW_TEXT: f32 = 14.0;

pub(crate) const FILE_ROW_H: f32 = 28.0;
pub(crate) const FILE_ROW_VPAD: f32 = 2.0;
pub(crate) const FILE_ROW_HPAD: f32 = 8.0;
pub(crate) const FILE_LIST_SPACING: f32 = 1.0;

pub(crate) const COVER_BIG: f32 = 180.0;
