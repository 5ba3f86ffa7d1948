//! GUI renderer (reads state, produces widgets; no mutation).

mod constants;
mod files;
mod history;
mod preview;
mod toolbar;

use iced::Length;
use iced::widget::{Column, column, row, text};

use super::state::{HebTag, Message};
use constants::{HISTORY_H, PREVIEW_W};

pub(crate) fn view(state: &HebTag) -> Column<'_, Message> {
    let toolbar = toolbar::build_toolbar(state);

    let list = files::build_file_list(state).width(Length::Fill);
    let preview = preview::build_preview_panel(state).width(Length::Fixed(PREVIEW_W));
    let body = row![list, preview].spacing(12).height(Length::Fill);

    let history = history::build_history_panel(state).height(Length::Fixed(HISTORY_H));

    let status = column![
        text(&state.status).size(13),
        text(state.counts()).size(12),
    ]
    .spacing(2);

    column![toolbar, body, history, status].spacing(12).padding(12)
}
