//! Substring/tag match predicates and creation-time ordering.
//!
//! # Responsibility
//! - Decide whether a note matches a keyword query.
//! - Produce the time-sorted listing projection.
//!
//! # Invariants
//! - Matching is case-insensitive; tag matching is exact, not
//!   substring.
//! - Filtering preserves insertion order; sorting is stable.

use crate::model::note::Note;

/// Returns whether `note` matches `query`.
///
/// The lowercased query must be a substring of the lowercased title or
/// content, or an exact member of the note's tag set. The empty query
/// matches every note.
pub fn note_matches(note: &Note, query: &str) -> bool {
    matches_needle(note, &query.to_lowercase())
}

/// Filters `notes` by [`note_matches`], preserving insertion order.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| matches_needle(note, &needle))
        .collect()
}

/// Returns `notes` ordered ascending by creation time.
///
/// The sort is stable, so notes sharing a timestamp keep their
/// original relative position.
pub fn sort_by_creation(notes: &[Note]) -> Vec<&Note> {
    let mut sorted: Vec<&Note> = notes.iter().collect();
    sorted.sort_by_key(|note| note.created_at);
    sorted
}

fn matches_needle(note: &Note, needle: &str) -> bool {
    note.title.to_lowercase().contains(needle)
        || note.content.to_lowercase().contains(needle)
        || note.tags.iter().any(|tag| tag == needle)
}

#[cfg(test)]
mod tests {
    use super::{filter_notes, note_matches, sort_by_creation};
    use crate::model::note::Note;
    use chrono::{TimeZone, Utc};

    fn note_at(title: &str, content: &str, tags: &[&str], secs: i64) -> Note {
        Note {
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn match_is_case_insensitive_on_title_and_content() {
        let note = note_at("Groceries", "Buy MILK", &[], 0);
        assert!(note_matches(&note, "grocer"));
        assert!(note_matches(&note, "milk"));
        assert!(note_matches(&note, "GROCER"));
    }

    #[test]
    fn tag_match_is_exact_membership_not_substring() {
        let note = note_at("a", "b", &["bread"], 0);
        assert!(note_matches(&note, "bread"));
        assert!(note_matches(&note, "BREAD"));
        assert!(!note_matches(&note, "brea"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let note = note_at("", "", &[], 0);
        assert!(note_matches(&note, ""));
    }

    #[test]
    fn filter_preserves_insertion_order() {
        let notes = vec![
            note_at("late", "x", &[], 30),
            note_at("early", "x", &[], 10),
            note_at("middle", "x", &[], 20),
        ];
        let hits = filter_notes(&notes, "x");
        let titles: Vec<&str> = hits.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["late", "early", "middle"]);
    }

    #[test]
    fn sort_by_creation_is_ascending_and_stable_on_ties() {
        let notes = vec![
            note_at("b", "", &[], 20),
            note_at("tie-first", "", &[], 10),
            note_at("tie-second", "", &[], 10),
            note_at("a", "", &[], 5),
        ];
        let sorted = sort_by_creation(&notes);
        let titles: Vec<&str> = sorted.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "tie-first", "tie-second", "b"]);
    }
}
