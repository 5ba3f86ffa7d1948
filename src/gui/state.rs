//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use std::path::{Path, PathBuf};

use iced::widget::image;

use crate::config::Settings;
use crate::core::batch::{LoadBatch, SaveBatch, WorkingSet};
use crate::core::history::History;
use crate::core::record::TagRecord;
use crate::core::tags::Id3Writer;

/// How a finished load merges into the working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadMode {
    /// Add files to what is already there.
    Append,
    /// Folder scan: start over.
    Replace,
}

/// App state
pub(crate) struct HebTag {
    pub settings: Settings,
    pub writer: Id3Writer,

    pub status: String,
    pub loading: bool,
    pub saving: bool,

    pub path_input: String,

    pub files: WorkingSet,
    pub history: History,

    // Preview
    pub focused: Option<PathBuf>,
    pub focused_art: Option<image::Handle>,
}

impl HebTag {
    pub(crate) fn new(settings: Settings) -> Self {
        let path_input = settings
            .scan_root
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        Self {
            writer: Id3Writer,
            history: History::new(settings.history_limit),
            settings,

            status: "Add files or scan a folder.".to_string(),
            loading: false,
            saving: false,

            path_input,

            files: WorkingSet::default(),

            focused: None,
            focused_art: None,
        }
    }

    pub(crate) fn busy(&self) -> bool {
        self.loading || self.saving
    }

    pub(crate) fn focused_record(&self) -> Option<&TagRecord> {
        self.focused.as_deref().and_then(|k| self.files.get(k))
    }

    pub(crate) fn is_focused(&self, key: &Path) -> bool {
        self.focused.as_deref() == Some(key)
    }

    /// Counts for the status line.
    pub(crate) fn counts(&self) -> String {
        let total = self.files.len();
        let mut hebrew = 0;
        let mut selected = 0;
        let mut pending = 0;
        for (_, r) in self.files.iter() {
            hebrew += usize::from(r.has_hebrew());
            selected += usize::from(r.selected);
            pending += usize::from(r.has_changes());
        }
        format!("{total} files | {hebrew} with Hebrew | {selected} selected | {pending} unsaved")
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Loading
    PathInputChanged(String),
    AddFiles,
    ScanFolder,
    LoadFinished(LoadMode, Result<LoadBatch, String>),

    // Batch actions
    ToggleSelectAll,
    ConvertSelected,
    SaveSelected,
    SaveFinished(Result<SaveBatch, String>),
    Clear,
    UndoLast,
    ClearHistory,

    // File list
    Focus(PathBuf),
    SetSelected(PathBuf, bool),

    // Preview
    FileNameChanged(String),
    ConvertFocused,
    RevertFocused,
    RemoveFocused,
}
