//! Draft state for the note editor popup, including the description
//! auto-numbering transform.

use crate::{Note, NoteDraft};
use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

fn numbered_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+\.\s").expect("numbered-line pattern is valid"))
}

/// Returns true if `line` already starts with `<digits>. `.
pub fn is_numbered(line: &str) -> bool {
    numbered_line().is_match(line)
}

/// Prefixes every line that is not already numbered with its 1-based index.
///
/// Already-numbered lines are left exactly as they are, even when their
/// number is out of sequence.
///
/// # Examples
///
/// ```rust
/// use notetaker_core::number_lines;
///
/// assert_eq!(number_lines("a\nb\nc"), "1. a\n2. b\n3. c");
/// assert_eq!(number_lines("1. a\nb\n7. c"), "1. a\n2. b\n7. c");
/// ```
pub fn number_lines(text: &str) -> String {
    text.split('\n')
        .enumerate()
        .map(|(index, line)| {
            if is_numbered(line) {
                line.to_string()
            } else {
                format!("{}. {}", index + 1, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats a date the way the editor stamps drafts, e.g. `"October 16, 2026"`.
pub fn format_draft_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// The editor's transient draft.
///
/// Lives only while the popup is open. In edit mode it is seeded from the
/// note being edited; in create mode it starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Popup {
    title: String,
    description: String,
    editing: Option<String>,
}

impl Popup {
    pub fn new(edit_note: Option<&Note>) -> Self {
        match edit_note {
            Some(note) => Self {
                title: note.title.clone(),
                description: note.description.clone(),
                editing: Some(note.id.clone()),
            },
            None => Self::default(),
        }
    }

    /// Re-seeds the draft when the note being edited changes while the popup
    /// is open. Switching to create mode keeps whatever was typed.
    pub fn sync(&mut self, edit_note: Option<&Note>) {
        match edit_note {
            Some(note) if self.editing.as_deref() != Some(note.id.as_str()) => {
                *self = Self::new(Some(note));
            }
            Some(_) => {}
            None => self.editing = None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_edit() {
            "Update Note"
        } else {
            "Add a New Note"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Update Note"
        } else {
            "Add Note"
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Stores the description after running it through [`number_lines`].
    pub fn set_description(&mut self, input: &str) {
        self.description = number_lines(input);
    }

    /// Builds the save payload, stamping it with `today`.
    pub fn submit(&self, today: NaiveDate) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            date: format_draft_date(today),
        }
    }

    /// [`Popup::submit`] using the local calendar date.
    pub fn submit_now(&self) -> NoteDraft {
        self.submit(Local::now().date_naive())
    }
}
