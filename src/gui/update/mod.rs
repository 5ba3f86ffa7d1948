//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{HebTag, Message};

mod convert;
mod files;
mod save;
mod util;

pub(crate) fn update(state: &mut HebTag, message: Message) -> Task<Message> {
    match message {
        // Loading
        Message::PathInputChanged(s) => files::path_input_changed(state, s),
        Message::AddFiles => files::add_files(state),
        Message::ScanFolder => files::scan_folder(state),
        Message::LoadFinished(mode, result) => files::load_finished(state, mode, result),

        // File list
        Message::Focus(key) => files::focus(state, key),
        Message::SetSelected(key, on) => files::set_selected(state, key, on),
        Message::RemoveFocused => files::remove_focused(state),
        Message::Clear => files::clear(state),

        // Conversion
        Message::ToggleSelectAll => convert::toggle_select_all(state),
        Message::ConvertSelected => convert::convert_selected(state),
        Message::ConvertFocused => convert::convert_focused(state),
        Message::RevertFocused => convert::revert_focused(state),
        Message::FileNameChanged(s) => convert::file_name_changed(state, s),

        // Save
        Message::SaveSelected => save::save_selected(state),
        Message::SaveFinished(result) => save::save_finished(state, result),
        Message::UndoLast => save::undo_last(state),
        Message::ClearHistory => save::clear_history(state),
    }
}
