//! The iced application: maps UI events onto [`Notebook`] operations and
//! composes the toolbar, card grid, editor and confirmation views.

use crate::{note_card, popup, toolbar};
use iced::widget::{column, container, scrollable, text, text_editor, Column};
use iced::{Border, Color, Element, Length, Task, Theme};
use notetaker_core::{
    CardIntent, Feedback, FeedbackKind, FeedbackToken, KeyValueStore, NoteCard, Notebook,
    NotetakerError, Popup, SortOrder, FEEDBACK_TTL,
};

pub struct NotetakerApp<S: KeyValueStore> {
    notebook: Notebook<S>,
    popup: Option<Popup>,
    description: text_editor::Content,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    ClearSearch,
    SortChanged(SortOrder),
    AddNote,
    Card(CardIntent),
    TitleChanged(String),
    DescriptionEdited(text_editor::Action),
    Save,
    CloseEditor,
    Confirm(bool),
    FeedbackExpired(FeedbackToken),
}

impl<S: KeyValueStore> NotetakerApp<S> {
    /// Wraps an already-loaded notebook. A `startup_error` (e.g. the configured
    /// store could not be opened) is shown as the first feedback message.
    pub fn new(notebook: Notebook<S>, startup_error: Option<NotetakerError>) -> (Self, Task<Message>) {
        let mut app = Self {
            notebook,
            popup: None,
            description: text_editor::Content::new(),
        };

        let task = match startup_error {
            Some(e) => app.fail(&e),
            None => Task::none(),
        };
        (app, task)
    }

    pub fn notebook(&self) -> &Notebook<S> {
        &self.notebook
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(term) => self.notebook.set_search_term(term),
            Message::ClearSearch => self.notebook.clear_search(),
            Message::SortChanged(order) => {
                if let Err(e) = self.notebook.set_sort_order(order) {
                    return self.fail(&e);
                }
            }
            Message::AddNote => {
                self.notebook.open_new_note();
                self.mount_popup();
            }
            Message::Card(CardIntent::Edit(id)) => match self.notebook.open_edit(&id) {
                Ok(()) => self.mount_popup(),
                Err(e) => return self.fail(&e),
            },
            Message::Card(CardIntent::Delete(id)) => {
                if let Err(e) = self.notebook.request_delete(&id) {
                    return self.fail(&e);
                }
            }
            Message::Card(CardIntent::TogglePin(id)) => {
                if let Err(e) = self.notebook.request_toggle_pin(&id) {
                    return self.fail(&e);
                }
            }
            Message::TitleChanged(title) => {
                if let Some(popup) = &mut self.popup {
                    popup.set_title(title);
                }
            }
            Message::DescriptionEdited(action) => {
                let is_edit = action.is_edit();
                self.description.perform(action);
                if is_edit {
                    self.renumber_description();
                }
            }
            Message::Save => {
                let Some(popup) = &self.popup else {
                    return Task::none();
                };
                return match self.notebook.add_or_update_note(popup.submit_now()) {
                    Ok(token) => {
                        self.popup = None;
                        expire_after(token)
                    }
                    Err(e) => self.fail(&e),
                };
            }
            Message::CloseEditor => {
                self.notebook.close_editor();
                self.popup = None;
            }
            Message::Confirm(confirmed) => match self.notebook.resolve_pending(confirmed) {
                Ok(Some(token)) => {
                    if !self.notebook.is_editor_open() {
                        self.popup = None;
                    }
                    return expire_after(token);
                }
                Ok(None) => {}
                Err(e) => return self.fail(&e),
            },
            Message::FeedbackExpired(token) => {
                self.notebook.expire_feedback(token);
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut page = column![].spacing(16).padding(20);

        if let Some(feedback) = self.notebook.feedback() {
            page = page.push(feedback_banner(feedback));
        }

        let header = column![
            text("Note Taking App").size(30),
            text("\"Actively take notes and organize them when you're studying.\"").size(14),
        ]
        .spacing(4);

        let notes = self.notebook.visible_notes();
        let grid: Element<'_, Message> = if notes.is_empty() {
            text("No notes available. Click the \"Add new note\" button to get started!")
                .size(18)
                .into()
        } else {
            scrollable(
                Column::with_children(
                    notes
                        .into_iter()
                        .map(|note| note_card::view(NoteCard::from(note))),
                )
                .spacing(12),
            )
            .height(Length::Fill)
            .into()
        };

        let base = page
            .push(header)
            .push(toolbar::toolbar(
                self.notebook.search_term(),
                self.notebook.sort_order(),
            ))
            .push(grid);

        if let Some(pending) = self.notebook.pending_action() {
            popup::modal(base, popup::confirm(pending), self.backdrop_message())
        } else if let Some(draft) = &self.popup {
            popup::modal(
                base,
                popup::editor(draft, &self.description),
                self.backdrop_message(),
            )
        } else {
            base.into()
        }
    }

    /// What a click on the dimmed backdrop does. Declining a confirmation is
    /// harmless; the editor ignores the click so a typed draft is only thrown
    /// away by its Cancel button.
    fn backdrop_message(&self) -> Option<Message> {
        if self.notebook.pending_action().is_some() {
            Some(Message::Confirm(false))
        } else {
            None
        }
    }

    /// Mounts the editor, or re-seeds it if it is already open and the edit
    /// target changed.
    fn mount_popup(&mut self) {
        let edit_note = self.notebook.edit_note();
        let popup = match self.popup.take() {
            Some(mut popup) => {
                popup.sync(edit_note);
                popup
            }
            None => Popup::new(edit_note),
        };
        self.description = text_editor::Content::with_text(popup.description());
        self.popup = Some(popup);
    }

    /// Runs the numbering transform over the editor text and, if it changed
    /// anything, rewrites the editor with the cursor at the end.
    fn renumber_description(&mut self) {
        let Some(popup) = &mut self.popup else {
            return;
        };

        let raw = editor_text(&self.description);
        popup.set_description(&raw);
        if popup.description() != raw {
            self.description = text_editor::Content::with_text(popup.description());
            self.description.perform(text_editor::Action::Move(
                text_editor::Motion::DocumentEnd,
            ));
        }
    }

    fn fail(&mut self, error: &NotetakerError) -> Task<Message> {
        let token = self.notebook.report_error(error);
        expire_after(token)
    }
}

/// The editor's text with lines joined by `\n` and no synthetic trailing newline.
fn editor_text(content: &text_editor::Content) -> String {
    content
        .lines()
        .map(|line| String::from(&*line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn expire_after(token: FeedbackToken) -> Task<Message> {
    Task::perform(tokio::time::sleep(FEEDBACK_TTL), move |_| {
        Message::FeedbackExpired(token)
    })
}

fn feedback_banner(feedback: &Feedback) -> Element<'_, Message> {
    let kind = feedback.kind;
    container(text(feedback.message.as_str()))
        .padding([10, 16])
        .width(Length::Fill)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let (background, text_color) = match kind {
                FeedbackKind::Normal => (palette.success.weak.color, palette.success.weak.text),
                FeedbackKind::Highlight => (Color::from_rgb8(0xfe, 0xf0, 0x8a), Color::from_rgb8(0xa1, 0x62, 0x07)),
                FeedbackKind::Error => (palette.danger.weak.color, palette.danger.weak.text),
            };
            container::Style {
                background: Some(background.into()),
                text_color: Some(text_color),
                border: Border {
                    color: text_color,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..container::Style::default()
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notetaker_core::MemoryStore;

    fn app() -> NotetakerApp<MemoryStore> {
        NotetakerApp::new(Notebook::load(MemoryStore::new()), None).0
    }

    fn add(app: &mut NotetakerApp<MemoryStore>, title: &str) -> String {
        let _ = app.update(Message::AddNote);
        let _ = app.update(Message::TitleChanged(title.to_string()));
        let _ = app.update(Message::Save);
        app.notebook()
            .notes()
            .iter()
            .find(|n| n.title == title)
            .map(|n| n.id.clone())
            .unwrap()
    }

    #[tokio::test]
    async fn save_from_create_mode_adds_note_and_closes_editor() {
        let mut app = app();
        add(&mut app, "Groceries");

        assert_eq!(app.notebook().notes().len(), 1);
        assert!(app.popup().is_none());
        assert!(!app.notebook().is_editor_open());
        assert_eq!(
            app.notebook().feedback().unwrap().message,
            "Note added successfully!"
        );
    }

    #[tokio::test]
    async fn card_edit_opens_seeded_editor() {
        let mut app = app();
        let id = add(&mut app, "Groceries");

        let _ = app.update(Message::Card(CardIntent::Edit(id)));
        let popup = app.popup().unwrap();
        assert!(popup.is_edit());
        assert_eq!(popup.title(), "Groceries");
    }

    #[test]
    fn cancel_discards_draft() {
        let mut app = app();
        let _ = app.update(Message::AddNote);
        let _ = app.update(Message::TitleChanged("scratch".to_string()));
        let _ = app.update(Message::CloseEditor);

        assert!(app.popup().is_none());
        assert!(app.notebook().notes().is_empty());
    }

    #[tokio::test]
    async fn delete_requires_confirmation() {
        let mut app = app();
        let id = add(&mut app, "a");

        let _ = app.update(Message::Card(CardIntent::Delete(id.clone())));
        assert!(app.notebook().pending_action().is_some());
        let _ = app.update(Message::Confirm(false));
        assert_eq!(app.notebook().notes().len(), 1);

        let _ = app.update(Message::Card(CardIntent::Delete(id)));
        let _ = app.update(Message::Confirm(true));
        assert!(app.notebook().notes().is_empty());
    }

    #[tokio::test]
    async fn stale_expiry_keeps_newer_feedback() {
        let mut app = app();
        let id = add(&mut app, "a");
        let first = app.notebook().feedback().unwrap().token;

        let _ = app.update(Message::Card(CardIntent::TogglePin(id)));
        let _ = app.update(Message::Confirm(true));
        let _ = app.update(Message::FeedbackExpired(first));

        assert_eq!(
            app.notebook().feedback().unwrap().message,
            "Note pinned successfully!"
        );
    }

    #[tokio::test]
    async fn search_and_clear() {
        let mut app = app();
        add(&mut app, "alpha");
        add(&mut app, "beta");

        let _ = app.update(Message::SearchChanged("ALP".to_string()));
        assert_eq!(app.notebook().visible_notes().len(), 1);
        let _ = app.update(Message::ClearSearch);
        assert_eq!(app.notebook().visible_notes().len(), 2);
    }

    #[test]
    fn sort_change_is_persisted() {
        let mut app = app();
        let _ = app.update(Message::SortChanged(SortOrder::Oldest));

        assert_eq!(app.notebook().sort_order(), SortOrder::Oldest);
        assert_eq!(
            app.notebook()
                .store()
                .get(notetaker_core::SORT_ORDER_KEY)
                .unwrap()
                .as_deref(),
            Some("oldest")
        );
    }

    #[test]
    fn typing_in_description_numbers_lines() {
        let mut app = app();
        let _ = app.update(Message::AddNote);
        for c in ['m', 'i', 'l', 'k'] {
            let _ = app.update(Message::DescriptionEdited(text_editor::Action::Edit(
                text_editor::Edit::Insert(c),
            )));
        }

        assert_eq!(app.popup().unwrap().description(), "1. milk");
    }

    #[test]
    fn backdrop_click_keeps_editor_draft() {
        let mut app = app();
        let _ = app.update(Message::AddNote);
        let _ = app.update(Message::TitleChanged("half-typed".to_string()));

        assert!(app.backdrop_message().is_none());
        assert_eq!(app.popup().unwrap().title(), "half-typed");
    }

    #[tokio::test]
    async fn backdrop_click_declines_confirmation() {
        let mut app = app();
        let id = add(&mut app, "a");
        let _ = app.update(Message::Card(CardIntent::Delete(id)));

        let blur = app.backdrop_message();
        assert!(matches!(blur, Some(Message::Confirm(false))));
        let _ = app.update(blur.unwrap());
        assert!(app.notebook().pending_action().is_none());
        assert_eq!(app.notebook().notes().len(), 1);
    }

    #[tokio::test]
    async fn unknown_card_reports_error() {
        let mut app = app();
        let _ = app.update(Message::Card(CardIntent::Edit("missing".to_string())));

        let feedback = app.notebook().feedback().unwrap();
        assert_eq!(feedback.kind, FeedbackKind::Error);
        assert_eq!(feedback.message, "Note no longer exists");
    }
}
