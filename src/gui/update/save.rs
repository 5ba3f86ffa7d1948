//! gui/update/save.rs
//! Save lifecycle + undo.
//!
//! - Save snapshots the pending records and runs `core::batch::save_records` off-thread.
//! - While saving, edits are ignored so the snapshot stays the truth.
//! - Results merge back by their pre-save key (renamed files get re-keyed).

use iced::Task;

use crate::core::batch::{self, SaveBatch, WorkingSet};
use crate::core::tags::SaveOutcome;

use super::super::state::{HebTag, Message};
use super::files::refocus_moved;
use super::util::spawn_blocking;

pub(crate) fn save_selected(state: &mut HebTag) -> Task<Message> {
    if state.busy() {
        return Task::none();
    }

    let pending = state.files.pending_saves();
    if pending.is_empty() {
        state.status = "No changes to save.".to_string();
        return Task::none();
    }

    state.saving = true;
    state.status = if pending.len() == 1 {
        "Writing tags to file...".to_string()
    } else {
        format!("Writing tags to {} files...", pending.len())
    };

    let writer = state.writer;
    Task::perform(
        spawn_blocking(move || batch::save_records(pending, &writer)),
        Message::SaveFinished,
    )
}

pub(crate) fn save_finished(
    state: &mut HebTag,
    result: Result<SaveBatch, String>,
) -> Task<Message> {
    state.saving = false;

    let batch = match result {
        Ok(b) => b,
        Err(e) => {
            state.status = format!("Save error: {e}");
            return Task::none();
        }
    };

    state.files.apply_saved(&batch.results);

    let mut renamed = 0;
    for result in batch.results {
        if matches!(result.outcome, Ok(SaveOutcome::Saved { renamed_to: Some(_) })) {
            renamed += 1;
        }
        refocus_moved(state, &result.key, &result.record.path);
        if let Some(entry) = result.history {
            state.history.push(entry);
        }
    }

    state.status = batch.report.summary();
    if renamed > 0 {
        state.status.push_str(&format!(" ({renamed} renamed)"));
    }
    Task::none()
}

/// Undo touches one file, so it runs inline like the other quick edits.
pub(crate) fn undo_last(state: &mut HebTag) -> Task<Message> {
    if state.busy() {
        return Task::none();
    }

    match state.history.undo_last(&state.writer) {
        Ok(Some(undone)) => {
            let from = WorkingSet::key_for(&undone.from);
            let name = undone.record.display_path();
            let to = undone.record.path.clone();

            if state.files.remove(&from).is_some() {
                state.files.insert(undone.record);
            }
            refocus_moved(state, &from, &to);
            state.status = format!("Undid last save of {name}");
        }
        Ok(None) => state.status = "Nothing to undo.".to_string(),
        Err(e) => state.status = format!("Undo failed: {e}"),
    }
    Task::none()
}

pub(crate) fn clear_history(state: &mut HebTag) -> Task<Message> {
    if !state.busy() {
        state.history.clear();
        state.status = "History cleared.".to_string();
    }
    Task::none()
}
