use autonote_core::NoteStore;
use std::path::PathBuf;

fn store_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("notes.json")
}

#[test]
fn empty_query_returns_every_note_in_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = NoteStore::open(store_path(&dir)).unwrap();
    store.add("one", "alpha milk").unwrap();
    store.add("two", "beta bread").unwrap();
    store.add("three", "gamma cheese").unwrap();

    let hits = store.search("");
    let titles: Vec<&str> = hits.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
}

#[test]
fn exact_tag_query_matches_even_when_absent_from_title_and_content() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = NoteStore::open(store_path(&dir)).unwrap();
    store
        .add_with_tags("opaque", "nothing relevant here", vec!["zebra".to_string()])
        .unwrap();

    let hits = store.search("zebra");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "opaque");

    let upper_hits = store.search("ZEBRA");
    assert_eq!(upper_hits.len(), 1);
}

#[test]
fn tag_query_requires_exact_membership_not_substring() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = NoteStore::open(store_path(&dir)).unwrap();
    store
        .add_with_tags("x", "y", vec!["bread".to_string()])
        .unwrap();

    assert_eq!(store.search("bread").len(), 1);
    assert!(store.search("brea").is_empty());
}

#[test]
fn title_and_content_match_by_case_insensitive_substring() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = NoteStore::open(store_path(&dir)).unwrap();
    store.add("Groceries", "Buy milk and fresh bread").unwrap();
    store.add("Workout", "leg day plan").unwrap();

    assert_eq!(store.search("grocer").len(), 1);
    assert_eq!(store.search("MILK").len(), 1);
    assert_eq!(store.search("day").len(), 1);
    assert!(store.search("absent").is_empty());
}

#[test]
fn search_results_keep_insertion_order_not_time_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = NoteStore::open(store_path(&dir)).unwrap();
    store.add("b-note", "shared keyword").unwrap();
    store.add("a-note", "shared keyword").unwrap();

    let hits = store.search("shared");
    let titles: Vec<&str> = hits.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["b-note", "a-note"]);
}

#[test]
fn list_sorted_is_idempotent_without_intervening_writes() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = NoteStore::open(store_path(&dir)).unwrap();
    store.add("one", "alpha").unwrap();
    store.add("two", "beta").unwrap();

    let first: Vec<String> = store
        .list_sorted()
        .iter()
        .map(|n| n.title.clone())
        .collect();
    let second: Vec<String> = store
        .list_sorted()
        .iter()
        .map(|n| n.title.clone())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn list_sorted_orders_by_creation_time_ascending() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = NoteStore::open(store_path(&dir)).unwrap();
    store.add("first", "alpha").unwrap();
    store.add("second", "beta").unwrap();
    store.add("third", "gamma").unwrap();

    let sorted = store.list_sorted();
    for pair in sorted.windows(2) {
        assert!(pair[0].created_at <= pair[1].created_at);
    }
    let titles: Vec<&str> = sorted.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}
