//! gui/update/files.rs
//! Loading files into the working set, plus focus / selection / removal.
//!
//! Loads go through the core batch boundary on a background thread:
//! - Add file(s): `core::batch::load_paths(paths)`
//! - Scan folder: `core::batch::scan_directory(root)` (walk + load)

use std::path::{Path, PathBuf};

use iced::Task;
use iced::widget::image;

use crate::core::batch::{self, LoadBatch, WorkingSet};
use crate::core::library::is_mp3;

use super::super::state::{HebTag, LoadMode, Message};
use super::util::spawn_blocking;

pub(crate) fn path_input_changed(state: &mut HebTag, s: String) -> Task<Message> {
    state.path_input = s;
    Task::none()
}

/// One or more paths separated by `;`.
fn parse_paths(input: &str) -> Vec<PathBuf> {
    input
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

pub(crate) fn add_files(state: &mut HebTag) -> Task<Message> {
    if state.busy() {
        return Task::none();
    }

    let (paths, rejected): (Vec<PathBuf>, Vec<PathBuf>) =
        parse_paths(&state.path_input).into_iter().partition(|p| is_mp3(p));

    if paths.is_empty() {
        state.status = if rejected.is_empty() {
            "Enter one or more .mp3 paths (separated by ;).".to_string()
        } else {
            format!("Not an MP3 file: {}", rejected[0].display())
        };
        return Task::none();
    }

    state.loading = true;
    state.status = format!("Loading {} files...", paths.len());

    // Files added by hand are always kept, Hebrew or not.
    let opts = batch::LoadOptions {
        hebrew_only: false,
        ..state.settings.load_options()
    };

    Task::perform(
        spawn_blocking(move || batch::load_paths(paths, opts)),
        |res| Message::LoadFinished(LoadMode::Append, res),
    )
}

pub(crate) fn scan_folder(state: &mut HebTag) -> Task<Message> {
    if state.busy() {
        return Task::none();
    }

    let input = state.path_input.trim();
    if input.is_empty() {
        state.status = "Enter a folder path first.".to_string();
        return Task::none();
    }

    let root = PathBuf::from(input);
    if !Path::new(input).is_dir() {
        state.status = format!("Not a folder: {}", root.display());
        return Task::none();
    }

    state.loading = true;
    state.status = format!("Scanning {}...", root.display());

    let opts = state.settings.load_options();
    Task::perform(
        spawn_blocking(move || batch::scan_directory(&root, opts).map_err(|e| e.to_string())),
        |res| Message::LoadFinished(LoadMode::Replace, res.and_then(|inner| inner)),
    )
}

pub(crate) fn load_finished(
    state: &mut HebTag,
    mode: LoadMode,
    result: Result<LoadBatch, String>,
) -> Task<Message> {
    state.loading = false;

    let batch = match result {
        Ok(b) => b,
        Err(e) => {
            // Keep the current working set; just report.
            state.status = format!("Load error: {e}");
            return Task::none();
        }
    };

    match mode {
        LoadMode::Replace => {
            set_focus(state, None);
            state.files.replace_all(batch.records);
        }
        LoadMode::Append => {
            for record in batch.records {
                state.files.insert(record);
            }
        }
    }

    let mut status = batch.report.summary();
    if !batch.report.failed.is_empty() {
        let names: Vec<String> = batch
            .report
            .failed
            .iter()
            .map(|(name, e)| format!("{name} ({e})"))
            .collect();
        status.push_str(&format!(". Could not read: {}", names.join(", ")));
    }
    state.status = status;

    // Refresh art in case the focused file was reloaded.
    let focused = state.focused.clone();
    set_focus(state, focused);
    Task::none()
}

pub(crate) fn focus(state: &mut HebTag, key: PathBuf) -> Task<Message> {
    set_focus(state, Some(key));
    Task::none()
}

pub(crate) fn set_selected(state: &mut HebTag, key: PathBuf, on: bool) -> Task<Message> {
    if !state.saving {
        state.files.set_selected(&key, on);
    }
    Task::none()
}

pub(crate) fn remove_focused(state: &mut HebTag) -> Task<Message> {
    if state.saving {
        return Task::none();
    }
    if let Some(key) = state.focused.clone()
        && let Some(r) = state.files.remove(&key)
    {
        state.status = format!("Removed {}", r.display_path());
        set_focus(state, None);
    }
    Task::none()
}

pub(crate) fn clear(state: &mut HebTag) -> Task<Message> {
    if state.busy() {
        return Task::none();
    }
    state.files.clear();
    set_focus(state, None);
    state.status = "Cleared.".to_string();
    Task::none()
}

/// Change the focused record and rebuild its album-art handle.
/// The handle is cached here so the view does not re-decode the image every frame.
pub(crate) fn set_focus(state: &mut HebTag, key: Option<PathBuf>) {
    let key = key.filter(|k| state.files.get(k).is_some());

    state.focused_art = key
        .as_deref()
        .and_then(|k| state.files.get(k))
        .and_then(|r| r.album_art.as_ref())
        .map(|art| image::Handle::from_bytes(art.data.clone()));
    state.focused = key;
}

/// After a save or undo moves a file, follow it with the focus.
pub(crate) fn refocus_moved(state: &mut HebTag, from: &Path, to: &Path) {
    if state.is_focused(from) {
        set_focus(state, Some(WorkingSet::key_for(to)));
    }
}
