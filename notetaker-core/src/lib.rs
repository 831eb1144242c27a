//! Core library for Notetaker — a local-first note-taking application.
//!
//! The primary entry point is [`Notebook`], which owns the note collection and
//! every piece of cross-cutting UI state. All mutations go through `Notebook`
//! methods and are written back to a [`KeyValueStore`] in full.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    card::{card_for_utc, CardIntent, NoteCard},
    editor::{format_draft_date, is_numbered, number_lines, Popup},
    error::{NotetakerError, Result},
    feedback::{Feedback, FeedbackKind, FeedbackSlot, FeedbackToken, FEEDBACK_TTL},
    note::{Note, NoteDraft, SortOrder},
    notebook::{Notebook, PendingAction},
    storage::{
        load_notes, load_sort_order, save_notes, save_sort_order, KeyValueStore, MemoryStore,
        SqliteStore, NOTES_KEY, SORT_ORDER_KEY,
    },
    view::{compare_notes, filter_notes, sort_notes, visible_notes},
};
