//! gui/update/convert.rs
//! In-memory edits: select-all, convert, revert, file name edit.
//! Nothing here touches the disk; Save does that.

use iced::Task;

use crate::core::types::TagField;

use super::super::state::{HebTag, Message};

pub(crate) fn toggle_select_all(state: &mut HebTag) -> Task<Message> {
    if !state.saving {
        let all = state.files.all_selected();
        state.files.select_all(!all);
    }
    Task::none()
}

pub(crate) fn convert_selected(state: &mut HebTag) -> Task<Message> {
    if state.saving {
        return Task::none();
    }

    let report = state.files.convert_selected();
    state.status = if report.attempted == 0 {
        "Select files to convert first.".to_string()
    } else {
        format!(
            "Converted {} of {} selected files (not saved yet)",
            report.converted, report.attempted
        )
    };
    Task::none()
}

pub(crate) fn convert_focused(state: &mut HebTag) -> Task<Message> {
    if state.saving {
        return Task::none();
    }
    let Some(key) = state.focused.clone() else {
        return Task::none();
    };

    state.status = if state.files.convert(&key) {
        "Converted (not saved yet)".to_string()
    } else {
        "Nothing to convert.".to_string()
    };
    Task::none()
}

pub(crate) fn revert_focused(state: &mut HebTag) -> Task<Message> {
    if state.saving {
        return Task::none();
    }
    if let Some(key) = state.focused.clone() {
        state.files.revert(&key);
        state.status = "Reverted.".to_string();
    }
    Task::none()
}

pub(crate) fn file_name_changed(state: &mut HebTag, s: String) -> Task<Message> {
    if state.saving {
        return Task::none();
    }
    if let Some(key) = state.focused.clone() {
        state.files.set_field(&key, TagField::Filename, s);
    }
    Task::none()
}
