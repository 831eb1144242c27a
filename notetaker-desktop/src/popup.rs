//! The modal note editor and the confirmation dialog.

use crate::app::Message;
use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, stack, text,
    text_editor, text_input,
};
use iced::{Color, Element};
use notetaker_core::{PendingAction, Popup};

/// The editor form. `description` mirrors the draft's description and holds
/// the cursor state.
pub fn editor<'a>(popup: &'a Popup, description: &'a text_editor::Content) -> Element<'a, Message> {
    let form = column![
        text(popup.heading()).size(24),
        text("Title"),
        text_input("Enter note title", popup.title())
            .on_input(Message::TitleChanged)
            .on_submit(Message::Save)
            .padding(10),
        text("Description"),
        text_editor(description)
            .placeholder("Enter note description")
            .on_action(Message::DescriptionEdited)
            .height(160),
        row![
            horizontal_space(),
            button(text("Cancel"))
                .style(button::text)
                .on_press(Message::CloseEditor),
            button(text(popup.submit_label()))
                .style(button::primary)
                .on_press(Message::Save),
        ]
        .spacing(12),
    ]
    .spacing(10);

    container(form)
        .width(440)
        .padding(24)
        .style(container::rounded_box)
        .into()
}

/// A yes/no prompt for a pending delete or pin toggle.
pub fn confirm<'a>(pending: &'a PendingAction) -> Element<'a, Message> {
    let dialog = column![
        text(pending.prompt()),
        row![
            horizontal_space(),
            button(text("Cancel"))
                .style(button::secondary)
                .on_press(Message::Confirm(false)),
            button(text("OK"))
                .style(button::primary)
                .on_press(Message::Confirm(true)),
        ]
        .spacing(12),
    ]
    .spacing(16);

    container(dialog)
        .width(360)
        .padding(20)
        .style(container::rounded_box)
        .into()
}

/// Lays `content` over a dimmed, click-blocking copy of `base`. Clicking the
/// backdrop publishes `on_blur`, if there is one.
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Option<Message>,
) -> Element<'a, Message> {
    let mut backdrop = mouse_area(center(opaque(content)).style(|_theme| container::Style {
        background: Some(
            Color {
                a: 0.6,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }));
    if let Some(message) = on_blur {
        backdrop = backdrop.on_press(message);
    }

    stack![base.into(), opaque(backdrop)].into()
}
