//! Internal domain modules for the Notetaker core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod card;
pub mod editor;
pub mod error;
pub mod feedback;
pub mod note;
pub mod notebook;
pub mod storage;
pub mod view;

#[doc(inline)]
pub use card::{CardIntent, NoteCard};
#[doc(inline)]
pub use editor::{number_lines, Popup};
#[doc(inline)]
pub use error::{NotetakerError, Result};
#[doc(inline)]
pub use feedback::{Feedback, FeedbackKind, FeedbackSlot, FeedbackToken, FEEDBACK_TTL};
#[doc(inline)]
pub use note::{Note, NoteDraft, SortOrder};
#[doc(inline)]
pub use notebook::{Notebook, PendingAction};
#[doc(inline)]
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
