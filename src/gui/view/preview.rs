//! Right panel: before/after preview of the focused file.

use iced::widget::{Column, button, column, container, image, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use crate::core::record::TagRecord;
use crate::core::types::TagField;

use super::super::state::{HebTag, Message};
use super::constants::{COVER_BIG, LABEL_W};

fn cover_placeholder(size: f32) -> iced::widget::Container<'static, Message> {
    container(
        column![text("♪").size(28), text("no cover").size(12)]
            .spacing(4)
            .align_x(Alignment::Center),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .center_x(Length::Fill)
    .center_y(Length::Fill)
}

fn cover(handle: Option<&image::Handle>, size: f32) -> Element<'static, Message> {
    match handle {
        Some(h) => container(image(h.clone()))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        None => cover_placeholder(size).into(),
    }
}

/// `Label  before  →  after`; the arrow only shows when the value changed.
/// Fields with Hebrew also show how many runs get reversed.
fn before_after_row(record: &TagRecord, field: TagField) -> Column<'_, Message> {
    let p = record.preview(field);
    let arrow = if p.is_changed() { "→" } else { "" };

    let values = row![
        text(p.field.label()).width(Length::Fixed(LABEL_W)),
        text(p.original).width(Length::Fill),
        text(arrow).width(Length::Fixed(16.0)),
        text(p.current).width(Length::Fill),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let a = p.analysis;
    if a.contains_hebrew {
        column![
            values,
            text(format!(
                "{} of {} runs Hebrew",
                a.hebrew_segment_count, a.total_segment_count
            ))
            .size(11),
        ]
    } else {
        column![values]
    }
}

pub(crate) fn build_preview_panel(state: &HebTag) -> iced::widget::Container<'_, Message> {
    let Some(record) = state.focused_record() else {
        return container(
            column![
                text("Preview").size(18),
                text("Click a file to preview it."),
            ]
            .spacing(8),
        )
        .padding(12);
    };

    let editable = !state.saving;

    let fields = column![
        before_after_row(record, TagField::Title),
        before_after_row(record, TagField::Artist),
        before_after_row(record, TagField::Album),
        before_after_row(record, TagField::Filename),
    ]
    .spacing(6);

    let mut name_input = text_input("File name", &record.tags.filename).width(Length::Fill);
    if editable {
        name_input = name_input.on_input(Message::FileNameChanged);
    }
    let name_row = row![text("New name").width(Length::Fixed(LABEL_W)), name_input]
        .spacing(8)
        .align_y(Alignment::Center);

    let convert_btn = button("Convert");
    let revert_btn = button("Revert");
    let remove_btn = button("Remove");
    let actions = if editable {
        row![
            convert_btn.on_press(Message::ConvertFocused),
            revert_btn.on_press(Message::RevertFocused),
            remove_btn.on_press(Message::RemoveFocused),
        ]
        .spacing(8)
    } else {
        row![convert_btn, revert_btn, remove_btn].spacing(8)
    };

    let status_line = if record.has_changes() {
        format!("{} field(s) changed, not saved", record.changed_fields().len())
    } else if record.has_hebrew() {
        "Hebrew text found".to_string()
    } else {
        "No Hebrew text".to_string()
    };

    let col = column![
        text("Preview").size(18),
        text(record.path.display().to_string()).size(12),
        cover(state.focused_art.as_ref(), COVER_BIG),
        fields,
        name_row,
        text(status_line).size(12),
        actions,
    ]
    .spacing(10);

    container(scrollable(col).height(Length::Fill)).padding(12)
}
