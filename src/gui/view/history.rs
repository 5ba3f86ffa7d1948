//! Bottom panel: saved changes, newest first.

use iced::Alignment;
use iced::widget::{button, column, row, scrollable, text};

use super::super::state::{HebTag, Message};

pub(crate) fn build_history_panel(state: &HebTag) -> iced::widget::Column<'_, Message> {
    let mut entries = column![].spacing(2);

    if state.history.is_empty() {
        entries = entries.push(text("Nothing saved yet.").size(12));
    }
    for entry in state.history.entries() {
        entries = entries.push(text(entry.describe()).size(12));
    }

    let clear_btn = button("Clear history");
    let clear_btn = if state.busy() || state.history.is_empty() {
        clear_btn
    } else {
        clear_btn.on_press(Message::ClearHistory)
    };

    let header = row![
        text(format!("History ({})", state.history.len())).size(16),
        clear_btn,
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    column![header, scrollable(entries)].spacing(6)
}
