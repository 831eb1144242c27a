//! The root controller: sole owner of the note collection and all
//! cross-cutting UI state.

use crate::core::storage::{load_notes, load_sort_order, save_notes, save_sort_order};
use crate::core::view;
use crate::{
    Feedback, FeedbackKind, FeedbackSlot, FeedbackToken, KeyValueStore, Note, NoteDraft,
    NotetakerError, Result, SortOrder,
};
use chrono::{DateTime, Utc};

/// A destructive or state-flipping request waiting for a yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Delete { note_id: String },
    TogglePin { note_id: String },
}

impl PendingAction {
    /// The question shown to the user.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Delete { .. } => "Are you sure you want to delete this note?",
            Self::TogglePin { .. } => "Do you want to change the pin status?",
        }
    }

    pub fn note_id(&self) -> &str {
        match self {
            Self::Delete { note_id } | Self::TogglePin { note_id } => note_id,
        }
    }
}

/// The note collection plus search, sort, editor, confirmation and feedback state.
///
/// Every mutation writes the full collection to the store before it is
/// applied in memory, so a failed write leaves the notebook unchanged.
pub struct Notebook<S: KeyValueStore> {
    store: S,
    notes: Vec<Note>,
    popup_visible: bool,
    edit_note: Option<String>,
    search_term: String,
    sort_order: SortOrder,
    pending: Option<PendingAction>,
    feedback: FeedbackSlot,
}

impl<S: KeyValueStore> Notebook<S> {
    /// Reads both storage slots once. Missing or malformed data falls back to
    /// an empty collection and the `latest` order.
    pub fn load(store: S) -> Self {
        let notes = load_notes(&store);
        let sort_order = load_sort_order(&store);
        log::debug!("loaded {} notes, sort order {}", notes.len(), sort_order.as_str());

        Self {
            store,
            notes,
            popup_visible: false,
            edit_note: None,
            search_term: String::new(),
            sort_order,
            pending: None,
            feedback: FeedbackSlot::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The authoritative collection in storage order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get_note(&self, note_id: &str) -> Result<&Note> {
        self.notes
            .iter()
            .find(|n| n.id == note_id)
            .ok_or_else(|| NotetakerError::NoteNotFound(note_id.to_string()))
    }

    /// The notes to render: filtered by the search term, then sorted.
    pub fn visible_notes(&self) -> Vec<&Note> {
        view::visible_notes(&self.notes, &self.search_term, self.sort_order)
    }

    // ── Search & sort ─────────────────────────────────────────────

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Changes the order and persists it in its own slot. The notes slot is
    /// not rewritten.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the preference cannot be written.
    pub fn set_sort_order(&mut self, order: SortOrder) -> Result<()> {
        save_sort_order(&mut self.store, order)?;
        self.sort_order = order;
        Ok(())
    }

    // ── Editor visibility ─────────────────────────────────────────

    pub fn is_editor_open(&self) -> bool {
        self.popup_visible
    }

    /// The note the editor is bound to, if it is in edit mode.
    pub fn edit_note(&self) -> Option<&Note> {
        let id = self.edit_note.as_deref()?;
        self.notes.iter().find(|n| n.id == id)
    }

    /// Opens the editor in create mode.
    pub fn open_new_note(&mut self) {
        self.edit_note = None;
        self.popup_visible = true;
    }

    /// Opens the editor bound to `note_id`.
    ///
    /// # Errors
    ///
    /// Returns [`NotetakerError::NoteNotFound`] if no such note exists.
    pub fn open_edit(&mut self, note_id: &str) -> Result<()> {
        self.get_note(note_id)?;
        self.edit_note = Some(note_id.to_string());
        self.popup_visible = true;
        Ok(())
    }

    /// Hides the editor without touching any note.
    pub fn close_editor(&mut self) {
        self.popup_visible = false;
        self.edit_note = None;
    }

    // ── Mutations ─────────────────────────────────────────────────

    /// Saves the editor's draft, timestamping new notes with the current time.
    ///
    /// # Errors
    ///
    /// See [`Notebook::add_or_update_note_at`].
    pub fn add_or_update_note(&mut self, draft: NoteDraft) -> Result<FeedbackToken> {
        self.add_or_update_note_at(draft, Utc::now())
    }

    /// Updates the note under edit, or appends a new one created at `now`.
    ///
    /// On update only `title` and `description` change; `id`, `date` and
    /// `pinned` are preserved and the draft's own date string is not applied.
    /// Either way the editor closes and a success message is shown.
    ///
    /// # Errors
    ///
    /// Returns [`NotetakerError::NoteNotFound`] if the edited note vanished,
    /// or the store's error if the collection cannot be written.
    pub fn add_or_update_note_at(
        &mut self,
        draft: NoteDraft,
        now: DateTime<Utc>,
    ) -> Result<FeedbackToken> {
        let mut updated = self.notes.clone();

        let message = match self.edit_note.as_deref() {
            Some(id) => {
                let note = updated
                    .iter_mut()
                    .find(|n| n.id == id)
                    .ok_or_else(|| NotetakerError::NoteNotFound(id.to_string()))?;
                note.title = draft.title;
                note.description = draft.description;
                log::debug!("updated note {id}");
                "Note updated successfully!"
            }
            None => {
                let note = Note::new(draft.title, draft.description, now);
                log::debug!("created note {}", note.id);
                updated.push(note);
                "Note added successfully!"
            }
        };

        self.commit(updated)?;
        self.close_editor();
        Ok(self.feedback.show(message, FeedbackKind::Normal))
    }

    /// Removes a note. Only reached through a confirmed [`Notebook::request_delete`].
    fn delete_note(&mut self, note_id: &str) -> Result<FeedbackToken> {
        self.get_note(note_id)?;
        let updated: Vec<Note> = self
            .notes
            .iter()
            .filter(|n| n.id != note_id)
            .cloned()
            .collect();

        self.commit(updated)?;
        if self.edit_note.as_deref() == Some(note_id) {
            self.close_editor();
        }
        log::debug!("deleted note {note_id}");
        Ok(self.feedback.show("Note deleted successfully!", FeedbackKind::Normal))
    }

    /// Flips the pin flag. Only reached through a confirmed
    /// [`Notebook::request_toggle_pin`]; the message reflects the resulting state.
    fn toggle_pin(&mut self, note_id: &str) -> Result<FeedbackToken> {
        let mut updated = self.notes.clone();
        let note = updated
            .iter_mut()
            .find(|n| n.id == note_id)
            .ok_or_else(|| NotetakerError::NoteNotFound(note_id.to_string()))?;
        note.pinned = !note.pinned;
        let status = if note.pinned { "pinned" } else { "unpinned" };

        self.commit(updated)?;
        log::debug!("note {note_id} {status}");
        Ok(self
            .feedback
            .show(format!("Note {status} successfully!"), FeedbackKind::Highlight))
    }

    fn commit(&mut self, updated: Vec<Note>) -> Result<()> {
        save_notes(&mut self.store, &updated)?;
        self.notes = updated;
        Ok(())
    }

    // ── Confirmation ──────────────────────────────────────────────

    /// Asks for confirmation before deleting `note_id`. Nothing is removed
    /// until [`Notebook::resolve_pending`] is called with `true`; there is no
    /// way to delete without that step.
    ///
    /// ```compile_fail
    /// use notetaker_core::{MemoryStore, Notebook};
    ///
    /// let mut notebook = Notebook::load(MemoryStore::new());
    /// notebook.delete_note("n-1");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`NotetakerError::NoteNotFound`] if no such note exists.
    pub fn request_delete(&mut self, note_id: &str) -> Result<&PendingAction> {
        self.request(PendingAction::Delete {
            note_id: note_id.to_string(),
        })
    }

    /// Asks for confirmation before flipping the pin flag of `note_id`.
    ///
    /// # Errors
    ///
    /// Returns [`NotetakerError::NoteNotFound`] if no such note exists.
    pub fn request_toggle_pin(&mut self, note_id: &str) -> Result<&PendingAction> {
        self.request(PendingAction::TogglePin {
            note_id: note_id.to_string(),
        })
    }

    fn request(&mut self, action: PendingAction) -> Result<&PendingAction> {
        self.get_note(action.note_id())?;
        Ok(&*self.pending.insert(action))
    }

    pub fn pending_action(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// Commits the pending action if `confirmed`, otherwise drops it. Declining
    /// changes nothing and shows no message.
    ///
    /// # Errors
    ///
    /// Returns [`NotetakerError::NothingPending`] if no request is waiting, or
    /// any error from the committed mutation.
    pub fn resolve_pending(&mut self, confirmed: bool) -> Result<Option<FeedbackToken>> {
        let action = self.pending.take().ok_or(NotetakerError::NothingPending)?;
        if !confirmed {
            log::debug!("declined {action:?}");
            return Ok(None);
        }

        let token = match action {
            PendingAction::Delete { note_id } => self.delete_note(&note_id)?,
            PendingAction::TogglePin { note_id } => self.toggle_pin(&note_id)?,
        };
        Ok(Some(token))
    }

    // ── Feedback ──────────────────────────────────────────────────

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.current()
    }

    /// Clears the feedback message if `token` still identifies it.
    pub fn expire_feedback(&mut self, token: FeedbackToken) -> bool {
        self.feedback.expire(token)
    }

    /// Shows an error as a feedback message.
    pub fn report_error(&mut self, error: &NotetakerError) -> FeedbackToken {
        log::warn!("{error}");
        self.feedback.show(error.user_message(), FeedbackKind::Error)
    }
}
