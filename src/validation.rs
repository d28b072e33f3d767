use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Longest keyword we accept, after trimming.
const KEYWORD_MAX_LEN: usize = 500;

/// Longest hostname we accept (RFC 1035 limit).
const DOMAIN_MAX_LEN: usize = 253;

/// Most lines allowed in a single batch submission.
pub const BATCH_MAX_QUERIES: usize = 50;

static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Dot-separated labels, 1-63 chars each, alphanumeric with internal
    // hyphens only.
    Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)*$")
        .expect("domain regex is valid")
});

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

/// Purely syntactic domain/URL check: strip an optional http(s) scheme and
/// any path, then match the remainder against the domain-label grammar.
/// No DNS, no scheme validation.
pub fn is_valid_domain_or_url(input: &str) -> bool {
    let mut rest = input.trim();
    if rest.is_empty() {
        return false;
    }

    if let Some(stripped) = rest.strip_prefix("http://") {
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix("https://") {
        rest = stripped;
    }

    let host = rest.split('/').next().unwrap_or_default();

    host.len() <= DOMAIN_MAX_LEN && DOMAIN_REGEX.is_match(host)
}

/// A keyword is anything non-empty up to 500 chars after trimming. No
/// character-class restriction.
pub fn is_valid_keyword(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= KEYWORD_MAX_LEN
}

/// Collapse whitespace runs and strip markup-significant characters.
pub fn clean_search_term(term: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(term.trim(), " ");
    collapsed
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '&' | '"' | '\''))
        .collect::<String>()
        .trim()
        .to_string()
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BatchError {
    #[error("Batch input cannot be empty")]
    Empty,

    #[error("Maximum {BATCH_MAX_QUERIES} queries allowed in batch mode, got {0}")]
    TooMany(usize),

    #[error("No valid queries after cleaning")]
    NoValidQueries,
}

/// Split raw batch input into cleaned query lines.
///
/// Empty lines are dropped before the 50-line cap is applied; lines that
/// clean down to nothing are dropped afterwards, and if nothing survives
/// that is an error rather than a silently empty batch.
pub fn validate_batch(input: &str) -> Result<Vec<String>, BatchError> {
    if input.trim().is_empty() {
        return Err(BatchError::Empty);
    }

    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() > BATCH_MAX_QUERIES {
        return Err(BatchError::TooMany(lines.len()));
    }

    let queries: Vec<String> = lines
        .iter()
        .map(|line| clean_search_term(line))
        .filter(|query| !query.is_empty())
        .collect();

    if queries.is_empty() {
        return Err(BatchError::NoValidQueries);
    }

    Ok(queries)
}
