use crate::validation::{self, BatchError};

#[test]
fn accepts_plain_domains() {
    assert!(validation::is_valid_domain_or_url("example.com"));
    assert!(validation::is_valid_domain_or_url("sub.example.co.uk"));
    assert!(validation::is_valid_domain_or_url("a-b.example.com"));
    assert!(validation::is_valid_domain_or_url("localhost"));
}

#[test]
fn strips_scheme_and_path() {
    assert!(validation::is_valid_domain_or_url("http://example.com/path"));
    assert!(validation::is_valid_domain_or_url("https://example.com/a/b?q=1"));
}

#[test]
fn rejects_malformed_domains() {
    assert!(!validation::is_valid_domain_or_url(""));
    assert!(!validation::is_valid_domain_or_url("   "));
    assert!(!validation::is_valid_domain_or_url("not a domain!!"));
    assert!(!validation::is_valid_domain_or_url("-leading.example.com"));
    assert!(!validation::is_valid_domain_or_url("trailing-.example.com"));
    // 64-char label
    let long_label = format!("{}.com", "a".repeat(64));
    assert!(!validation::is_valid_domain_or_url(&long_label));
    // over 253 chars total
    let long_host = format!("{}.com", "a.".repeat(130));
    assert!(!validation::is_valid_domain_or_url(&long_host));
}

#[test]
fn keyword_length_bounds() {
    assert!(validation::is_valid_keyword("a"));
    assert!(validation::is_valid_keyword(&"a".repeat(500)));
    assert!(!validation::is_valid_keyword(&"a".repeat(501)));
    assert!(!validation::is_valid_keyword(""));
    assert!(!validation::is_valid_keyword("   "));
}

#[test]
fn keyword_trims_before_measuring() {
    let padded = format!("  {}  ", "a".repeat(500));
    assert!(validation::is_valid_keyword(&padded));
}

#[test]
fn clean_collapses_whitespace_and_strips_markup() {
    assert_eq!(
        validation::clean_search_term("  python   machine\tlearning  "),
        "python machine learning"
    );
    assert_eq!(validation::clean_search_term("<b>bold</b> & \"quoted\""), "bbold/b  quoted");
    assert_eq!(validation::clean_search_term("<>&\"'"), "");
}

#[test]
fn batch_rejects_empty_input() {
    assert_eq!(validation::validate_batch(""), Err(BatchError::Empty));
    assert_eq!(validation::validate_batch("  \n \n"), Err(BatchError::Empty));
}

#[test]
fn batch_caps_at_fifty_lines() {
    let fifty = (0..50).map(|i| format!("query {i}\n")).collect::<String>();
    let queries = validation::validate_batch(&fifty).unwrap();
    assert_eq!(queries.len(), 50);

    let fifty_one = (0..51).map(|i| format!("query {i}\n")).collect::<String>();
    assert_eq!(
        validation::validate_batch(&fifty_one),
        Err(BatchError::TooMany(51))
    );
}

#[test]
fn batch_drops_blank_lines_before_counting() {
    let input = "a\n\n\nb\n   \nc\n";
    let queries = validation::validate_batch(input).unwrap();
    assert_eq!(queries, vec!["a", "b", "c"]);
}

#[test]
fn batch_drops_lines_emptied_by_cleaning() {
    let input = "python tips\n<>&\"'\nrust tips\n";
    let queries = validation::validate_batch(input).unwrap();
    assert_eq!(queries, vec!["python tips", "rust tips"]);
}

#[test]
fn batch_with_nothing_left_is_an_error() {
    assert_eq!(
        validation::validate_batch("<>\n\"'\n"),
        Err(BatchError::NoValidQueries)
    );
}

#[test]
fn batch_preserves_order() {
    let queries = validation::validate_batch("zebra\napple\nmango\n").unwrap();
    assert_eq!(queries, vec!["zebra", "apple", "mango"]);
}
