use crate::history::{SearchEntry, Store, DEFAULT_HISTORY_LIMIT, HISTORY_FILE};
use crate::storage::BackendLocal;

fn entry(n: usize) -> SearchEntry {
    SearchEntry {
        timestamp: format!("2024-01-01T00:00:{:02}+00:00", n % 60),
        operator: "site:".to_string(),
        query: format!("example{n}.com"),
        url: format!("https://www.google.com/search?q=site%3Aexample{n}.com&num=100"),
        category: None,
        batch: None,
    }
}

fn test_store(dir: &tempfile::TempDir) -> Store<BackendLocal> {
    let storage = BackendLocal::new(dir.path().to_str().unwrap()).unwrap();
    Store::new(storage, DEFAULT_HISTORY_LIMIT)
}

#[test]
fn missing_files_load_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = test_store(&dir);

    assert!(store.load_history().is_empty());
    assert!(store.load_favorites().is_empty());
}

#[test]
fn history_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = test_store(&dir);

    let entries: Vec<SearchEntry> = (0..5).map(entry).collect();
    store.save_history(&entries);

    assert_eq!(store.load_history(), entries);
}

#[test]
fn favorites_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = test_store(&dir);

    let mut favorite = entry(1);
    favorite.category = Some("🌐 Site & Domain".to_string());

    store.save_favorites(std::slice::from_ref(&favorite));
    assert_eq!(store.load_favorites(), vec![favorite]);
}

#[test]
fn history_is_capped_at_the_most_recent_entries() {
    let dir = tempfile::tempdir().unwrap();
    let store = test_store(&dir);

    let entries: Vec<SearchEntry> = (0..1005).map(entry).collect();
    store.save_history(&entries);

    let loaded = store.load_history();
    assert_eq!(loaded.len(), 1000);
    assert_eq!(loaded.first().unwrap().query, "example5.com");
    assert_eq!(loaded.last().unwrap().query, "example1004.com");
}

#[test]
fn favorites_are_not_capped() {
    let dir = tempfile::tempdir().unwrap();
    let store = test_store(&dir);

    let entries: Vec<SearchEntry> = (0..1005).map(entry).collect();
    store.save_favorites(&entries);

    assert_eq!(store.load_favorites().len(), 1005);
}

#[test]
fn corrupt_history_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = test_store(&dir);

    std::fs::write(dir.path().join(HISTORY_FILE), b"{not json").unwrap();
    assert!(store.load_history().is_empty());
}

#[test]
fn stored_json_is_pretty_printed() {
    let dir = tempfile::tempdir().unwrap();
    let store = test_store(&dir);

    store.save_history(&[entry(0)]);
    let raw = std::fs::read_to_string(dir.path().join(HISTORY_FILE)).unwrap();
    assert!(raw.contains('\n'));
    assert!(raw.trim_start().starts_with('['));
}

#[test]
fn absent_optional_fields_deserialize_as_unset() {
    let dir = tempfile::tempdir().unwrap();
    let store = test_store(&dir);

    let raw = r#"[
      {
        "timestamp": "2024-01-01T00:00:00+00:00",
        "operator": "intitle:",
        "query": "rust",
        "url": "https://www.google.com/search?q=intitle%3Arust&num=100"
      }
    ]"#;
    std::fs::write(dir.path().join(HISTORY_FILE), raw).unwrap();

    let loaded = store.load_history();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].category, None);
    assert_eq!(loaded[0].batch, None);
}

#[test]
fn duplicate_detection_ignores_the_batch_flag() {
    let mut a = entry(1);
    let mut b = entry(1);
    a.batch = None;
    b.batch = Some(true);
    assert_eq!(a, b);

    b.category = Some("other".to_string());
    assert_ne!(a, b);
}
