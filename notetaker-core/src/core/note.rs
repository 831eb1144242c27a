//! The persisted [`Note`] record and the [`SortOrder`] preference.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single user-authored note.
///
/// The JSON shape matches the `notes` storage slot exactly:
/// `{id, title, description, date, pinned}` with `date` as an ISO-8601 string.
/// Older records whose `date` holds the editor's long-form date
/// (`"October 16, 2026"`) are read as midnight UTC of that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Opaque unique identifier, assigned at creation and never reassigned.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Creation timestamp. Edits do not touch it.
    #[serde(deserialize_with = "deserialize_date")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub pinned: bool,
}

fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("unrecognised date {raw:?}")))
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw.trim(), "%B %d, %Y")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

impl Note {
    /// Creates a fresh, unpinned note with a new UUID and the given creation time.
    pub fn new(title: impl Into<String>, description: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            date,
            pinned: false,
        }
    }
}

/// Display order for notes within each pin group.
///
/// Serialized as the plain strings stored in the `sortOrder` slot.
///
/// # Examples
///
/// ```rust
/// use notetaker_core::SortOrder;
///
/// assert_eq!(SortOrder::parse("oldest"), Some(SortOrder::Oldest));
/// assert_eq!(SortOrder::parse("sideways"), None);
/// assert_eq!(SortOrder::default().as_str(), "latest");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Newest first.
    #[default]
    Latest,
    /// Oldest first.
    Oldest,
}

impl SortOrder {
    /// Both orders, in selector order.
    pub const ALL: [SortOrder; 2] = [SortOrder::Latest, SortOrder::Oldest];

    /// The storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Oldest => "oldest",
        }
    }

    /// Parses a stored value; anything unrecognised yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "latest" => Some(Self::Latest),
            "oldest" => Some(Self::Oldest),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("Sort by Latest"),
            Self::Oldest => f.write_str("Sort by Oldest"),
        }
    }
}

/// The payload the editor emits on submit.
///
/// `date` is the editor's human-readable date (e.g. `"October 16, 2026"`).
/// The controller assigns its own timestamp on create and ignores this value
/// on update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteDraft {
    pub title: String,
    pub description: String,
    pub date: String,
}
