use once_cell::sync::Lazy;
use serde::Serialize;

/// Which input affordance an operator expects from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Url,
    Keyword,
}

#[derive(Debug, Clone, Serialize)]
pub struct OperatorSpec {
    pub token: String,
    pub description: String,
    pub input_kind: InputKind,
    pub placeholder: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub label: String,
    pub operators: Vec<OperatorSpec>,
}

fn spec(
    token: &str,
    description: &str,
    input_kind: InputKind,
    placeholder: &str,
    examples: &[&str],
) -> OperatorSpec {
    OperatorSpec {
        token: token.to_string(),
        description: description.to_string(),
        input_kind,
        placeholder: placeholder.to_string(),
        examples: examples.iter().map(|e| e.to_string()).collect(),
    }
}

/// The full operator registry. Insertion order is the default display order.
static CATALOG: Lazy<Vec<OperatorSpec>> = Lazy::new(|| {
    use InputKind::{Keyword, Url};

    vec![
        spec(
            "site:",
            "Search within a specific website or domain",
            Url,
            "example.com",
            &["site:reddit.com python tutorials", "site:github.com machine learning"],
        ),
        spec(
            "filetype:",
            "Search for specific file types",
            Keyword,
            "pdf machine learning",
            &["filetype:pdf machine learning", "filetype:ppt presentation tips"],
        ),
        spec(
            "intitle:",
            "Search for pages with specific words in the title",
            Keyword,
            "python tutorial",
            &["intitle:python tutorial", "intitle:\"data science\""],
        ),
        spec(
            "allintitle:",
            "Search for pages with all specified words in the title",
            Keyword,
            "python machine learning tutorial",
            &["allintitle:python machine learning", "allintitle:web development guide"],
        ),
        spec(
            "inurl:",
            "Search for pages with specific words in the URL",
            Keyword,
            "tutorial",
            &["inurl:tutorial python", "inurl:blog machine learning"],
        ),
        spec(
            "allinurl:",
            "Search for pages with all specified words in the URL",
            Keyword,
            "python tutorial",
            &["allinurl:python tutorial", "allinurl:web development"],
        ),
        spec(
            "intext:",
            "Search for pages with specific words in the body text",
            Keyword,
            "machine learning",
            &["intext:machine learning", "intext:\"data science\""],
        ),
        spec(
            "allintext:",
            "Search for pages with all specified words in the body text",
            Keyword,
            "python programming tutorial",
            &["allintext:python programming", "allintext:web development guide"],
        ),
        spec(
            "related:",
            "Find websites related to a specific URL",
            Url,
            "example.com",
            &["related:stackoverflow.com", "related:github.com"],
        ),
        spec(
            "cache:",
            "View Google's cached version of a webpage",
            Url,
            "example.com",
            &["cache:example.com", "cache:stackoverflow.com/questions/123"],
        ),
        spec(
            "link:",
            "Find pages that link to a specific URL",
            Url,
            "example.com",
            &["link:stackoverflow.com", "link:github.com"],
        ),
        spec(
            "define:",
            "Get definitions for words or phrases",
            Keyword,
            "artificial intelligence",
            &["define:machine learning", "define:cryptocurrency"],
        ),
        spec(
            "stocks:",
            "Get stock information for a company",
            Keyword,
            "AAPL",
            &["stocks:AAPL", "stocks:GOOGL"],
        ),
        spec(
            "weather:",
            "Get weather information for a location",
            Keyword,
            "New York",
            &["weather:New York", "weather:London"],
        ),
        spec(
            "map:",
            "Show map results for a location",
            Keyword,
            "restaurants New York",
            &["map:restaurants New York", "map:hotels Paris"],
        ),
        spec(
            "movie:",
            "Search for movie information and showtimes",
            Keyword,
            "Inception",
            &["movie:Inception", "movie:Avengers"],
        ),
        spec(
            "source:",
            "Search Google News for articles from a specific source",
            Keyword,
            "CNN",
            &["source:CNN climate change", "source:BBC technology"],
        ),
        spec(
            "before:",
            "Search for content published before a specific date",
            Keyword,
            "2020 machine learning",
            &["before:2020-01-01 machine learning", "before:2019 cryptocurrency"],
        ),
        spec(
            "after:",
            "Search for content published after a specific date",
            Keyword,
            "2020 AI trends",
            &["after:2020-01-01 AI trends", "after:2021 web development"],
        ),
        spec(
            "daterange:",
            "Search for content within a specific date range",
            Keyword,
            "machine learning trends",
            &["daterange:2020-2021 machine learning", "daterange:2019-2020 startup"],
        ),
        spec(
            "info:",
            "Get information about a specific URL",
            Url,
            "example.com",
            &["info:stackoverflow.com", "info:github.com"],
        ),
        spec(
            "phonebook:",
            "Search for phone numbers (limited availability)",
            Keyword,
            "John Smith New York",
            &["phonebook:John Smith", "phonebook:business name city"],
        ),
        spec(
            "bphonebook:",
            "Search for business phone numbers",
            Keyword,
            "pizza New York",
            &["bphonebook:pizza New York", "bphonebook:dentist Chicago"],
        ),
        spec(
            "author:",
            "Search for articles by a specific author in Google Scholar",
            Keyword,
            "John Smith",
            &["author:\"John Smith\" machine learning", "author:Einstein physics"],
        ),
        spec(
            "group:",
            "Search within Google Groups",
            Keyword,
            "python programming",
            &["group:comp.lang.python", "group:alt.comp.programming"],
        ),
        spec(
            "inanchor:",
            "Search for pages with specific anchor text in links",
            Keyword,
            "click here",
            &["inanchor:\"click here\"", "inanchor:download"],
        ),
        spec(
            "allinanchor:",
            "Search for pages with all specified words in anchor text",
            Keyword,
            "download free software",
            &["allinanchor:download free", "allinanchor:learn python"],
        ),
        spec(
            "around(X):",
            "Search for pages where two terms appear within X words of each other",
            Keyword,
            "python AROUND(5) tutorial",
            &["python AROUND(10) machine learning", "climate AROUND(3) change"],
        ),
        spec(
            "loc:",
            "Search for results from a specific location",
            Keyword,
            "restaurants loc:\"New York\"",
            &["restaurants loc:\"New York\"", "events loc:\"San Francisco\""],
        ),
        spec(
            "location:",
            "Search for news from a specific location",
            Keyword,
            "news location:\"California\"",
            &["news location:\"California\"", "weather location:\"London\""],
        ),
        // The upper- and lower-case AROUND tokens are intentionally
        // independent entries.
        spec(
            "AROUND(X):",
            "Find pages where two terms appear within X words of each other",
            Keyword,
            "SEO AROUND(5) optimization",
            &["digital AROUND(3) marketing", "content AROUND(10) strategy"],
        ),
        spec(
            "\"\"",
            "Exact phrase search - find pages with the exact phrase",
            Keyword,
            "\"digital marketing strategy\"",
            &["\"content marketing\"", "\"SEO best practices\""],
        ),
        spec(
            "*",
            "Wildcard operator - placeholder for unknown words",
            Keyword,
            "best * for SEO",
            &["best * for marketing", "how to * website traffic"],
        ),
        spec(
            "OR",
            "Search for pages containing either term",
            Keyword,
            "SEO OR SEM",
            &["marketing OR advertising", "python OR javascript"],
        ),
        spec(
            "-",
            "Exclude terms from search results",
            Keyword,
            "digital marketing -ads",
            &["python tutorials -paid", "SEO guide -2019"],
        ),
        spec(
            "+",
            "Include specific terms in search results",
            Keyword,
            "+SEO +optimization",
            &["+digital +marketing tips", "+content +strategy"],
        ),
        spec(
            "~",
            "Search for synonyms and related terms",
            Keyword,
            "~car information",
            &["~digital marketing", "~website optimization"],
        ),
        spec(
            "..",
            "Search within number ranges",
            Keyword,
            "smartphones $200..$500",
            &["laptops $500..$1000", "camera 2020..2023"],
        ),
        spec(
            "imagesize:",
            "Find images of specific dimensions",
            Keyword,
            "imagesize:1920x1080",
            &["imagesize:800x600 wallpaper", "imagesize:1024x768 screenshot"],
        ),
        spec(
            "safesearch:",
            "Control safe search filtering",
            Keyword,
            "safesearch:off",
            &["safesearch:on family content", "safesearch:off research"],
        ),
        spec(
            "blogurl:",
            "Search within blog URLs",
            Url,
            "blogurl:medium.com",
            &["blogurl:wordpress.com SEO", "blogurl:blogger.com marketing"],
        ),
        spec(
            "haschange:",
            "Find pages that have changed recently",
            Keyword,
            "haschange:speed",
            &["haschange:update website", "haschange:new product launch"],
        ),
        spec(
            "inposttitle:",
            "Search within blog post titles",
            Keyword,
            "inposttitle:SEO tips",
            &["inposttitle:marketing strategy", "inposttitle:web development"],
        ),
        spec(
            "inpostauthor:",
            "Search by blog post author",
            Keyword,
            "inpostauthor:\"John Smith\"",
            &["inpostauthor:\"Neil Patel\"", "inpostauthor:\"Rand Fishkin\""],
        ),
        spec(
            "id:",
            "Search for specific page or post ID",
            Keyword,
            "id:12345",
            &["id:wordpress-123", "id:blog-post-456"],
        ),
    ]
});

const CATEGORY_INDEX: [(&str, &[&str]); 9] = [
    (
        "🌐 Site & Domain",
        &["site:", "related:", "info:", "cache:", "link:", "blogurl:"],
    ),
    (
        "📄 Content & Files",
        &["filetype:", "define:", "imagesize:", "haschange:"],
    ),
    (
        "🔍 Page Elements",
        &[
            "intitle:",
            "allintitle:",
            "inurl:",
            "allinurl:",
            "intext:",
            "allintext:",
            "inposttitle:",
            "inpostauthor:",
        ],
    ),
    ("📅 Time-based", &["before:", "after:", "daterange:"]),
    ("📰 News & Sources", &["source:", "location:"]),
    (
        "🎯 SEO Advanced",
        &[
            "AROUND(X):",
            "\"\"",
            "*",
            "OR",
            "-",
            "+",
            "~",
            "..",
            "inanchor:",
            "allinanchor:",
        ],
    ),
    (
        "📊 Special Searches",
        &["stocks:", "weather:", "map:", "movie:", "safesearch:", "id:"],
    ),
    (
        "👥 People & Contact",
        &["phonebook:", "bphonebook:", "author:", "group:"],
    ),
    ("📍 Location", &["loc:", "location:"]),
];

pub fn all() -> &'static [OperatorSpec] {
    &CATALOG
}

/// Look up an operator by token. Unknown tokens resolve to a generic
/// keyword spec so callers never have to special-case stale history
/// entries or free-typed operators.
pub fn lookup(token: &str) -> OperatorSpec {
    CATALOG
        .iter()
        .find(|op| op.token == token)
        .cloned()
        .unwrap_or_else(|| OperatorSpec {
            token: token.to_string(),
            description: "Unknown operator".to_string(),
            input_kind: InputKind::Keyword,
            placeholder: "search term".to_string(),
            examples: vec![],
        })
}

pub fn by_input_kind(kind: InputKind) -> Vec<OperatorSpec> {
    CATALOG
        .iter()
        .filter(|op| op.input_kind == kind)
        .cloned()
        .collect()
}

/// The display grouping. Tokens listed in a category but missing from the
/// catalog are dropped, never an error. A token may appear in more than
/// one category.
pub fn categories() -> Vec<Category> {
    CATEGORY_INDEX
        .iter()
        .map(|(label, tokens)| Category {
            label: label.to_string(),
            operators: tokens
                .iter()
                .filter_map(|token| CATALOG.iter().find(|op| op.token == *token).cloned())
                .collect(),
        })
        .collect()
}

/// Example inputs for the operators that have curated suggestions.
pub fn suggestions(token: &str) -> Vec<&'static str> {
    match token {
        "site:" => vec!["reddit.com", "stackoverflow.com", "github.com", "medium.com"],
        "filetype:" => vec!["pdf", "doc", "ppt", "xls", "txt"],
        "intitle:" => vec!["tutorial", "guide", "how to", "tips"],
        "inurl:" => vec!["blog", "tutorial", "guide", "documentation"],
        "related:" => vec!["google.com", "facebook.com", "twitter.com", "linkedin.com"],
        "define:" => vec![
            "artificial intelligence",
            "machine learning",
            "blockchain",
            "cryptocurrency",
        ],
        "stocks:" => vec!["AAPL", "GOOGL", "MSFT", "AMZN", "TSLA"],
        "weather:" => vec!["New York", "London", "Tokyo", "Sydney"],
        "movie:" => vec![
            "latest movies",
            "action movies",
            "comedy movies",
            "sci-fi movies",
        ],
        _ => vec![],
    }
}

/// Sanity-check the static tables once at startup. A failure here means
/// the catalog source itself is broken, so panicking is the right call.
pub fn verify() {
    let mut seen = std::collections::HashSet::new();
    for op in CATALOG.iter() {
        if op.token.is_empty() {
            panic!("catalog contains an operator with an empty token");
        }
        if !seen.insert(op.token.as_str()) {
            panic!("catalog contains duplicate token {:?}", op.token);
        }
    }

    for category in categories() {
        for op in &category.operators {
            if op.description.is_empty() {
                panic!(
                    "operator {:?} in category {:?} has an empty description",
                    op.token, category.label
                );
            }
        }
    }
}
