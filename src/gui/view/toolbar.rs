//! Top bar: path input, load actions, batch actions.

use iced::widget::{Button, button, column, row, text_input};
use iced::{Alignment, Length};

use super::super::state::{HebTag, Message};

/// Button that is only clickable when `enabled`.
fn action(label: &str, msg: Message, enabled: bool) -> Button<'_, Message> {
    let b = button(label);
    if enabled { b.on_press(msg) } else { b }
}

pub(crate) fn build_toolbar(state: &HebTag) -> iced::widget::Column<'_, Message> {
    let idle = !state.busy();
    let has_files = !state.files.is_empty();

    let path_input = text_input("File path(s) separated by ; or a folder", &state.path_input)
        .on_input(Message::PathInputChanged)
        .on_submit(Message::ScanFolder)
        .width(Length::Fill);

    let scan_label = if state.loading { "Loading..." } else { "Scan folder" };

    let load_row = row![
        path_input,
        action("Add file(s)", Message::AddFiles, idle),
        action(scan_label, Message::ScanFolder, idle),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let select_label = if state.files.all_selected() {
        "Select none"
    } else {
        "Select all"
    };
    let save_label = if state.saving { "Saving..." } else { "Save selected" };

    let batch_row = row![
        action(select_label, Message::ToggleSelectAll, has_files && !state.saving),
        action(
            "Convert selected",
            Message::ConvertSelected,
            state.files.any_selected() && !state.saving,
        ),
        action(save_label, Message::SaveSelected, idle && state.files.has_pending_saves()),
        action("Clear", Message::Clear, idle && has_files),
        action("Undo last save", Message::UndoLast, idle && !state.history.is_empty()),
    ]
    .spacing(8);

    column![load_row, batch_row].spacing(8)
}
