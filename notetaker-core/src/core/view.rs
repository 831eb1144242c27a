//! The display pipeline: filter by search term, then order by pin status and date.

use crate::{Note, SortOrder};
use std::cmp::Ordering;

/// Returns the notes whose title or description contains `term`, ignoring case.
///
/// An empty term matches every note. Relative order is preserved.
pub fn filter_notes<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    if term.is_empty() {
        return notes.iter().collect();
    }

    let needle = term.to_lowercase();
    notes
        .iter()
        .filter(|note| {
            note.title.to_lowercase().contains(&needle)
                || note.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Compares two notes for display: pinned notes first, then by date in the
/// direction given by `order`.
pub fn compare_notes(a: &Note, b: &Note, order: SortOrder) -> Ordering {
    b.pinned.cmp(&a.pinned).then_with(|| match order {
        SortOrder::Latest => b.date.cmp(&a.date),
        SortOrder::Oldest => a.date.cmp(&b.date),
    })
}

/// Sorts in place. The sort is stable, so notes with equal keys keep their
/// incoming relative order.
pub fn sort_notes(notes: &mut [&Note], order: SortOrder) {
    notes.sort_by(|a, b| compare_notes(a, b, order));
}

/// Filter, then sort. This is what the note grid renders.
pub fn visible_notes<'a>(notes: &'a [Note], term: &str, order: SortOrder) -> Vec<&'a Note> {
    let mut visible = filter_notes(notes, term);
    sort_notes(&mut visible, order);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn note(id: &str, title: &str, description: &str, day: u32, pinned: bool) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, day, 0, 0, 0).unwrap(),
            pinned,
        }
    }

    fn ids(notes: &[&Note]) -> Vec<String> {
        notes.iter().map(|n| n.id.clone()).collect()
    }

    #[test]
    fn test_filter_matches_title_or_description_ignoring_case() {
        let notes = vec![
            note("a", "Groceries", "1. milk", 1, false),
            note("b", "Work", "1. call MILKMAN", 2, false),
            note("c", "Reading", "1. novels", 3, false),
        ];

        assert_eq!(ids(&filter_notes(&notes, "Milk")), vec!["a", "b"]);
        assert_eq!(ids(&filter_notes(&notes, "READ")), vec!["c"]);
        assert!(filter_notes(&notes, "zebra").is_empty());
    }

    #[test]
    fn test_empty_term_keeps_everything_in_order() {
        let notes = vec![
            note("x", "one", "", 3, true),
            note("y", "two", "", 1, false),
        ];
        assert_eq!(ids(&filter_notes(&notes, "")), vec!["x", "y"]);
    }

    #[test]
    fn test_pinned_first_then_latest() {
        let notes = vec![
            note("old", "", "", 1, false),
            note("new", "", "", 9, false),
            note("pinned-old", "", "", 2, true),
            note("pinned-new", "", "", 8, true),
        ];

        let sorted = visible_notes(&notes, "", SortOrder::Latest);
        assert_eq!(ids(&sorted), vec!["pinned-new", "pinned-old", "new", "old"]);
    }

    #[test]
    fn test_pinned_first_then_oldest() {
        let notes = vec![
            note("old", "", "", 1, false),
            note("new", "", "", 9, false),
            note("pinned-old", "", "", 2, true),
            note("pinned-new", "", "", 8, true),
        ];

        let sorted = visible_notes(&notes, "", SortOrder::Oldest);
        assert_eq!(ids(&sorted), vec!["pinned-old", "pinned-new", "old", "new"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let notes = vec![
            note("first", "", "", 4, false),
            note("second", "", "", 4, false),
            note("third", "", "", 4, false),
        ];

        for order in SortOrder::ALL {
            let sorted = visible_notes(&notes, "", order);
            assert_eq!(ids(&sorted), vec!["first", "second", "third"]);
        }
    }

    #[test]
    fn test_filter_happens_before_sort() {
        let notes = vec![
            note("a", "keep", "", 1, false),
            note("b", "drop", "", 5, true),
            note("c", "keep", "", 3, false),
        ];

        let sorted = visible_notes(&notes, "keep", SortOrder::Latest);
        assert_eq!(ids(&sorted), vec!["c", "a"]);
    }
}
