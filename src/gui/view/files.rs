//! File list (table): selection toggle, markers, names.

use iced::widget::{checkbox, column, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Length};

use super::super::state::{HebTag, Message};
use super::constants::{
    FILE_LIST_SPACING, FILE_ROW_H, FILE_ROW_HPAD, FILE_ROW_VPAD, HEADER_TEXT, ROW_TEXT,
};

pub(crate) fn build_file_list(state: &HebTag) -> iced::widget::Column<'_, Message> {
    let header = row![
        text("").size(HEADER_TEXT).width(Length::Fixed(28.0)),
        text("").size(HEADER_TEXT).width(Length::Fixed(20.0)),
        text("HE").size(HEADER_TEXT).width(Length::Fixed(28.0)),
        text("*").size(HEADER_TEXT).width(Length::Fixed(20.0)),
        text("File").size(HEADER_TEXT).width(Length::FillPortion(3)),
        text("Title").size(HEADER_TEXT).width(Length::FillPortion(2)),
        text("Artist").size(HEADER_TEXT).width(Length::FillPortion(2)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut col = column![].spacing(FILE_LIST_SPACING);

    if state.files.is_empty() {
        col = col.push(text("No files loaded.").size(ROW_TEXT));
    }

    for (key, r) in state.files.iter() {
        let focus_marker = if state.is_focused(key) { "▶" } else { "" };
        let hebrew_marker = if r.has_hebrew() { "א" } else { "" };
        let changed_marker = if r.has_changes() { "●" } else { "" };

        let toggle_key = key.clone();
        let select = checkbox(r.selected)
            .on_toggle(move |on| Message::SetSelected(toggle_key.clone(), on));

        let row_cells = row![
            container(select).width(Length::Fixed(28.0)),
            text(focus_marker).size(ROW_TEXT).width(Length::Fixed(20.0)),
            text(hebrew_marker).size(ROW_TEXT).width(Length::Fixed(28.0)),
            text(changed_marker).size(ROW_TEXT).width(Length::Fixed(20.0)),
            text(r.tags.filename.as_str())
                .size(ROW_TEXT)
                .width(Length::FillPortion(3)),
            text(r.tags.title.as_str())
                .size(ROW_TEXT)
                .width(Length::FillPortion(2)),
            text(r.tags.artist.as_str())
                .size(ROW_TEXT)
                .width(Length::FillPortion(2)),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let row_widget = mouse_area(
            container(row_cells)
                .padding([FILE_ROW_VPAD, FILE_ROW_HPAD])
                .height(Length::Fixed(FILE_ROW_H))
                .width(Length::Fill),
        )
        .on_press(Message::Focus(key.clone()));

        col = col.push(row_widget);
    }

    column![
        text("Files").size(18),
        header,
        scrollable(col).height(Length::Fill),
    ]
    .spacing(8)
}
