use crate::export;
use crate::history::SearchEntry;

fn plain_entry() -> SearchEntry {
    SearchEntry {
        timestamp: "2024-01-01T00:00:00+00:00".to_string(),
        operator: "site:".to_string(),
        query: "example.com".to_string(),
        url: "https://www.google.com/search?q=site%3Aexample.com&num=100".to_string(),
        category: None,
        batch: None,
    }
}

#[test]
fn csv_header_is_union_of_fields_in_first_seen_order() {
    let mut with_extras = plain_entry();
    with_extras.category = Some("📅 Time-based".to_string());
    with_extras.batch = Some(true);

    let csv = export::to_csv(&[plain_entry(), with_extras]).unwrap();
    let mut lines = csv.lines();

    // first entry contributes the required fields, second appends its
    // optional ones
    assert_eq!(
        lines.next().unwrap(),
        "timestamp,operator,query,url,category,batch"
    );

    let first = lines.next().unwrap();
    assert!(first.ends_with(",,"), "missing fields render empty: {first}");

    let second = lines.next().unwrap();
    assert!(second.contains("📅 Time-based"));
    assert!(second.ends_with("true"));
}

#[test]
fn csv_of_empty_list_is_empty() {
    let entries: Vec<SearchEntry> = vec![];
    assert_eq!(export::to_csv(&entries).unwrap(), "");
}

#[test]
fn json_export_round_trips() {
    let entries = vec![plain_entry()];
    let json = export::to_json(&entries).unwrap();

    let parsed: Vec<SearchEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, entries);
}
