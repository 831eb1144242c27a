//! Renders one [`NoteCard`].
//!
//! The whole card is clickable (edit). The pin, delete and edit buttons
//! capture their own press, so a click on them never reaches the card's
//! handler as well.

use crate::app::Message;
use iced::widget::{button, column, container, horizontal_rule, mouse_area, row, text};
use iced::{Alignment, Border, Element, Length, Theme};
use notetaker_core::NoteCard;

pub fn view<'a>(card: NoteCard) -> Element<'a, Message> {
    let pin_label = if card.pinned { "Unpin" } else { "Pin" };
    let pin = button(text(pin_label).size(13))
        .style(if card.pinned {
            button::primary
        } else {
            button::secondary
        })
        .on_press(Message::Card(card.toggle_pin()));
    let delete = button(text("✕").size(13))
        .style(button::danger)
        .on_press(Message::Card(card.delete()));
    let edit = button(text("Edit").size(13))
        .style(button::text)
        .on_press(Message::Card(card.edit()));

    let header = row![
        text(card.title.clone()).size(18).width(Length::Fill),
        pin,
        delete
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let footer = row![
        text(card.date_label.clone()).size(12).width(Length::Fill),
        edit
    ]
    .align_y(Alignment::Center);

    let body = column![
        header,
        horizontal_rule(1),
        text(card.description.clone()),
        horizontal_rule(1),
        footer
    ]
    .spacing(8);

    let pinned = card.pinned;
    let boxed = container(body)
        .padding(14)
        .width(Length::Fill)
        .style(move |theme: &Theme| card_style(theme, pinned));

    mouse_area(boxed)
        .on_press(Message::Card(card.edit()))
        .into()
}

fn card_style(theme: &Theme, pinned: bool) -> container::Style {
    let base = container::rounded_box(theme);
    if !pinned {
        return base;
    }

    let palette = theme.extended_palette();
    container::Style {
        border: Border {
            color: palette.primary.strong.color,
            width: 2.0,
            radius: 4.0.into(),
        },
        ..base
    }
}
