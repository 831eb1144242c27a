//! Error types for the Notetaker core library.

use thiserror::Error;

/// All errors that can occur within the Notetaker core library.
#[derive(Debug, Error)]
pub enum NotetakerError {
    /// A SQLite operation failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A note ID was requested that does not exist in the collection.
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    /// The opened file is not a valid Notetaker store.
    #[error("Invalid store: {0}")]
    InvalidStore(String),

    /// A confirmation was resolved while no action was awaiting one.
    #[error("No action is awaiting confirmation")]
    NothingPending,

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Note data could not be serialized to or from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`NotetakerError`].
pub type Result<T> = std::result::Result<T, NotetakerError>;

impl NotetakerError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(e) => format!("Failed to save: {e}"),
            Self::NoteNotFound(_) => "Note no longer exists".to_string(),
            Self::InvalidStore(_) => "Could not open the notes store".to_string(),
            Self::NothingPending => "Nothing to confirm".to_string(),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_not_found_hides_id_from_user() {
        let e = NotetakerError::NoteNotFound("abc-123".to_string());
        assert!(e.to_string().contains("abc-123"));
        assert_eq!(e.user_message(), "Note no longer exists");
    }

    #[test]
    fn test_json_error_converts() {
        let bad = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let e: NotetakerError = bad.into();
        assert!(e.user_message().starts_with("Data format error"));
    }
}
