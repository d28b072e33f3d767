use serde::{Deserialize, Serialize};

use crate::storage::StorageManager;

pub const HISTORY_FILE: &str = "search_history.json";
pub const FAVORITES_FILE: &str = "favorites.json";

/// Default retention cap on history; favorites are uncapped.
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// One recorded search. The same shape backs history and favorites; a
/// favorite is an independently owned copy, so removing one never touches
/// the other.
///
/// `url` is the URL as built at the time of the search. It is never
/// rebuilt, so later changes to query formatting leave old entries alone.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub timestamp: String,
    pub operator: String,
    pub query: String,
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<bool>,
}

impl PartialEq for SearchEntry {
    // Duplicate detection is structural; the batch flag is provenance,
    // not identity.
    fn eq(&self, other: &Self) -> bool {
        self.operator == other.operator
            && self.query == other.query
            && self.url == other.url
            && self.timestamp == other.timestamp
            && self.category == other.category
    }
}

impl SearchEntry {
    pub fn new(operator: &str, query: &str, url: &str, category: Option<String>) -> Self {
        SearchEntry {
            timestamp: chrono::Local::now().to_rfc3339(),
            operator: operator.to_string(),
            query: query.to_string(),
            url: url.to_string(),
            category,
            batch: None,
        }
    }
}

/// JSON-file persistence for history and favorites.
///
/// Read failures degrade to an empty list and write failures are logged
/// and swallowed: a lost save is acceptable here, a crashed session is
/// not.
pub struct Store<S: StorageManager> {
    storage: S,
    history_limit: usize,
}

impl<S: StorageManager> Store<S> {
    pub fn new(storage: S, history_limit: usize) -> Self {
        Store {
            storage,
            history_limit,
        }
    }

    fn load_entries(&self, ident: &str) -> Vec<SearchEntry> {
        if !self.storage.exists(ident) {
            return vec![];
        }

        let bytes = match self.storage.read(ident) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::error!("couldnt read {ident}: {err}");
                return vec![];
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                log::error!("couldnt parse {ident}: {err}");
                vec![]
            }
        }
    }

    fn save_entries(&self, ident: &str, entries: &[SearchEntry]) {
        let json = match serde_json::to_string_pretty(entries) {
            Ok(json) => json,
            Err(err) => {
                log::error!("couldnt serialize {ident}: {err}");
                return;
            }
        };

        if let Err(err) = self.storage.write(ident, json.as_bytes()) {
            log::error!("couldnt write {ident}: {err}");
        }
    }

    pub fn load_history(&self) -> Vec<SearchEntry> {
        self.load_entries(HISTORY_FILE)
    }

    /// Persist history, keeping only the most recent `history_limit`
    /// entries (oldest dropped first).
    pub fn save_history(&self, entries: &[SearchEntry]) {
        let capped = if entries.len() > self.history_limit {
            &entries[entries.len() - self.history_limit..]
        } else {
            entries
        };
        self.save_entries(HISTORY_FILE, capped);
    }

    pub fn load_favorites(&self) -> Vec<SearchEntry> {
        self.load_entries(FAVORITES_FILE)
    }

    pub fn save_favorites(&self, entries: &[SearchEntry]) {
        self.save_entries(FAVORITES_FILE, entries);
    }
}
