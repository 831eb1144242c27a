//! View model and upward intents for a single note card.

use crate::Note;
use chrono::{DateTime, Local, TimeZone, Utc};

/// What a card can ask its owner to do. Cards hold no state and never
/// mutate notes themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardIntent {
    /// Open the note in the editor.
    Edit(String),
    /// Ask to delete the note (subject to confirmation).
    Delete(String),
    /// Ask to flip the pin flag (subject to confirmation).
    TogglePin(String),
}

impl CardIntent {
    pub fn note_id(&self) -> &str {
        match self {
            Self::Edit(id) | Self::Delete(id) | Self::TogglePin(id) => id,
        }
    }
}

/// Everything a card renders for one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub pinned: bool,
    pub date_label: String,
}

impl NoteCard {
    /// Builds the card with its date rendered in the given time zone.
    pub fn with_timezone<Tz: TimeZone>(note: &Note, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            description: note.description.clone(),
            pinned: note.pinned,
            date_label: format_card_date(&note.date.with_timezone(tz)),
        }
    }

    pub fn edit(&self) -> CardIntent {
        CardIntent::Edit(self.id.clone())
    }

    pub fn delete(&self) -> CardIntent {
        CardIntent::Delete(self.id.clone())
    }

    pub fn toggle_pin(&self) -> CardIntent {
        CardIntent::TogglePin(self.id.clone())
    }
}

impl From<&Note> for NoteCard {
    fn from(note: &Note) -> Self {
        Self::with_timezone(note, &Local)
    }
}

/// `3/1/2024, 12:00:00 PM` style timestamp.
fn format_card_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Creation timestamps are stored in UTC; this is the card's fixed-zone helper
/// for callers that want deterministic output.
pub fn card_for_utc(note: &Note) -> NoteCard {
    NoteCard::with_timezone(note, &Utc)
}
