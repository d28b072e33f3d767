use url::form_urlencoded;

const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// Results requested per page. Google caps this at 100.
const RESULT_COUNT: u32 = 100;

const DEFAULT_DATE: &str = "2020-01-01";

/// Operators whose argument is a URL; quoting would break them.
const URL_OPERATORS: [&str; 5] = ["site:", "related:", "cache:", "link:", "info:"];

/// Extra parameters for date-scoped operators.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub date: Option<String>,
}

fn is_wrapped_in_quotes(term: &str) -> bool {
    term.len() >= 2 && term.starts_with('"') && term.ends_with('"')
}

/// Assemble the raw (pre-encoding) query string for an operator and term.
///
/// The rules are ordered and exclusive: date operators first, then the
/// AROUND rewrite, then the generic colon-operator shapes, then the
/// space-joined fallback for bare tokens like `OR` and `-`. Unrecognized
/// tokens are shaped purely by whether they end in a colon.
fn format_query(operator: &str, term: &str, params: Option<&QueryParams>) -> String {
    let term = term.trim();
    let date = params.and_then(|p| p.date.as_deref());

    if operator == "before:" || operator == "after:" {
        let date = date.unwrap_or(DEFAULT_DATE);
        return format!("{operator}{date} {term}");
    }

    if operator == "daterange:" {
        // A simple year-wide window derived from the supplied date.
        return match date {
            Some(date) => {
                let year: String = date.chars().take(4).collect();
                format!("after:{year}-01-01 before:{year}-12-31 {term}")
            }
            None => format!("after:2020-01-01 before:2021-12-31 {term}"),
        };
    }

    if operator.eq_ignore_ascii_case("around(X):") {
        if term.to_uppercase().contains("AROUND(") {
            return term.to_string();
        }
        let mut parts = term.split_whitespace();
        return match parts.next() {
            Some(first) => {
                let rest = parts.collect::<Vec<_>>().join(" ");
                if rest.is_empty() {
                    format!("{term} AROUND(5) related")
                } else {
                    format!("{first} AROUND(5) {rest}")
                }
            }
            None => format!("{term} AROUND(5) related"),
        };
    }

    if operator.ends_with(':') {
        if URL_OPERATORS.contains(&operator) {
            return format!("{operator}{term}");
        }
        if term.contains(' ') && !is_wrapped_in_quotes(term) {
            return format!("{operator}\"{term}\"");
        }
        return format!("{operator}{term}");
    }

    format!("{operator} {term}")
}

/// Build the complete search URL for an operator and term. Pure: the same
/// inputs always produce the identical string, and the operator does not
/// need to exist in the catalog.
pub fn build_search_url(operator: &str, term: &str, params: Option<&QueryParams>) -> String {
    let query = format_query(operator, term, params);
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();

    format!("{SEARCH_ENDPOINT}?q={encoded}&num={RESULT_COUNT}")
}

/// Human-readable form of a query, for listings and prompts.
pub fn format_for_display(operator: &str, term: &str) -> String {
    if operator.ends_with(':') {
        format!("{operator}{term}")
    } else {
        format!("{operator} {term}")
    }
}
