//! String-keyed storage slots backing the note collection and the sort preference.
//!
//! The application only ever reads a slot whole and writes a slot whole, so the
//! store abstraction is a plain key-value interface. [`SqliteStore`] is the
//! durable implementation; [`MemoryStore`] keeps everything in a `HashMap`.

use crate::{Note, NotetakerError, Result, SortOrder};
use rusqlite::{Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::Path;

/// Slot holding the JSON array of notes.
pub const NOTES_KEY: &str = "notes";

/// Slot holding the plain-string sort preference.
pub const SORT_ORDER_KEY: &str = "sortOrder";

/// A synchronous string-keyed store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// A [`KeyValueStore`] persisted in a single-table SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Creates (or re-initialises) a store at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    /// Opens an existing store, rejecting files that do not carry the `kv` table.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        let table_count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name = 'kv'",
            [],
            |row| row.get(0),
        )?;

        if table_count != 1 {
            return Err(NotetakerError::InvalidStore(
                "Not a valid Notetaker store".to_string(),
            ));
        }

        Ok(Self { conn })
    }

    /// Opens the store at `path`, creating it first if the file does not exist.
    pub fn open_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::open(path)
        } else {
            Self::create(path)
        }
    }

    /// A throwaway store that lives only as long as the value.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }
}

/// A [`KeyValueStore`] held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the note collection. An absent, unreadable or malformed slot yields
/// an empty collection. Inside a well-formed array, records that cannot be
/// decoded are skipped and the rest are kept.
pub fn load_notes<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Note> {
    let raw = match store.get(NOTES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("could not read notes slot, starting empty: {e}");
            return Vec::new();
        }
    };

    let records: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("notes slot is malformed, starting empty: {e}");
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(note) => Some(note),
            Err(e) => {
                log::warn!("skipping unreadable note record {index}: {e}");
                None
            }
        })
        .collect()
}

/// Serializes the whole collection into the notes slot.
pub fn save_notes<S: KeyValueStore + ?Sized>(store: &mut S, notes: &[Note]) -> Result<()> {
    let json = serde_json::to_string(notes)?;
    store.set(NOTES_KEY, &json)
}

/// Reads the sort preference, defaulting to [`SortOrder::Latest`].
pub fn load_sort_order<S: KeyValueStore + ?Sized>(store: &S) -> SortOrder {
    match store.get(SORT_ORDER_KEY) {
        Ok(Some(raw)) => SortOrder::parse(&raw).unwrap_or_else(|| {
            log::warn!("ignoring unknown sort order {raw:?}");
            SortOrder::default()
        }),
        Ok(None) => SortOrder::default(),
        Err(e) => {
            log::warn!("could not read sort order slot: {e}");
            SortOrder::default()
        }
    }
}

pub fn save_sort_order<S: KeyValueStore + ?Sized>(store: &mut S, order: SortOrder) -> Result<()> {
    store.set(SORT_ORDER_KEY, order.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::NamedTempFile;

    fn sample_notes() -> Vec<Note> {
        vec![
            Note {
                id: "a".to_string(),
                title: "Groceries".to_string(),
                description: "1. milk\n2. eggs".to_string(),
                date: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
                pinned: false,
            },
            Note {
                id: "b".to_string(),
                title: "Ideas".to_string(),
                description: "1. write more".to_string(),
                date: Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap(),
                pinned: true,
            },
        ]
    }

    #[test]
    fn test_create_storage() {
        let temp = NamedTempFile::new().unwrap();
        let store = SqliteStore::create(temp.path()).unwrap();

        let tables: Vec<String> = store
            .connection()
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        assert!(tables.contains(&"kv".to_string()));
    }

    #[test]
    fn test_open_invalid_database() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "not a database").unwrap();

        assert!(SqliteStore::open(temp.path()).is_err());
    }

    #[test]
    fn test_open_rejects_foreign_sqlite_file() {
        let temp = NamedTempFile::new().unwrap();
        {
            let conn = Connection::open(temp.path()).unwrap();
            conn.execute("CREATE TABLE other (id INTEGER PRIMARY KEY)", []).unwrap();
        }

        let result = SqliteStore::open(temp.path());
        assert!(matches!(result, Err(NotetakerError::InvalidStore(_))));
    }

    #[test]
    fn test_set_overwrites_slot() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_notes_survive_reopen() {
        let temp = NamedTempFile::new().unwrap();
        let notes = sample_notes();
        {
            let mut store = SqliteStore::create(temp.path()).unwrap();
            save_notes(&mut store, &notes).unwrap();
        }

        let store = SqliteStore::open(temp.path()).unwrap();
        assert_eq!(load_notes(&store), notes);
    }

    #[test]
    fn test_malformed_notes_slot_loads_empty() {
        let mut store = MemoryStore::new();
        store.set(NOTES_KEY, "{not json").unwrap();

        assert!(load_notes(&store).is_empty());
    }

    #[test]
    fn test_bad_record_does_not_discard_the_rest() {
        let mut store = MemoryStore::new();
        store
            .set(
                NOTES_KEY,
                r#"[
                    {"id":"keep","title":"Keep","description":"","date":"2024-01-01T08:00:00.000Z","pinned":false},
                    {"id":"edited","title":"Edited","description":"","date":"October 16, 2026","pinned":true},
                    {"id":"broken","title":"Broken"}
                ]"#,
            )
            .unwrap();

        let notes = load_notes(&store);
        let ids: Vec<&str> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["keep", "edited"]);
        assert_eq!(notes[1].date, Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap());
        assert!(notes[1].pinned);
    }

    #[test]
    fn test_absent_slots_load_defaults() {
        let store = MemoryStore::new();

        assert!(load_notes(&store).is_empty());
        assert_eq!(load_sort_order(&store), SortOrder::Latest);
    }

    #[test]
    fn test_sort_order_is_plain_string() {
        let mut store = MemoryStore::new();
        save_sort_order(&mut store, SortOrder::Oldest).unwrap();

        assert_eq!(store.get(SORT_ORDER_KEY).unwrap().as_deref(), Some("oldest"));
        assert_eq!(load_sort_order(&store), SortOrder::Oldest);
    }

    #[test]
    fn test_unknown_sort_order_falls_back() {
        let mut store = MemoryStore::new();
        store.set(SORT_ORDER_KEY, "alphabetical").unwrap();

        assert_eq!(load_sort_order(&store), SortOrder::Latest);
    }
}
