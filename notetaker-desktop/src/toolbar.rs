//! Search box, sort selector and the "add new note" affordance.

use crate::app::Message;
use iced::widget::{button, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use notetaker_core::SortOrder;

/// Builds the toolbar row. The clear button only appears while a search term
/// is active.
pub fn toolbar(search_term: &str, sort_order: SortOrder) -> Element<'_, Message> {
    let search = text_input("Search notes", search_term)
        .on_input(Message::SearchChanged)
        .padding(8)
        .width(Length::FillPortion(2));

    let mut bar = row![search].spacing(10).align_y(Alignment::Center);

    if !search_term.is_empty() {
        bar = bar.push(
            button(text("✕"))
                .style(button::text)
                .on_press(Message::ClearSearch),
        );
    }

    bar.push(
        pick_list(SortOrder::ALL, Some(sort_order), Message::SortChanged)
            .padding(8)
            .width(Length::FillPortion(1)),
    )
    .push(
        button(text("+ Add new note"))
            .style(button::primary)
            .padding(8)
            .on_press(Message::AddNote),
    )
    .into()
}
