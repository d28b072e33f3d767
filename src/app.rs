use anyhow::{bail, Context, Result};
use homedir::my_home;

use crate::{
    batch::BatchQueue,
    catalog::{self, InputKind},
    config::Config,
    history::{SearchEntry, Store},
    query::{self, QueryParams},
    storage::BackendLocal,
    validation,
};

/// Resolve the data directory: `GSQ_BASE_PATH` wins, otherwise
/// `~/.local/share/gsq`.
pub fn base_path() -> Result<String> {
    if let Ok(path) = std::env::var("GSQ_BASE_PATH") {
        return Ok(path);
    }

    let home = my_home()
        .context("couldnt find home dir")?
        .context("couldnt find home dir")?;

    Ok(format!("{}/.local/share/gsq", home.to_string_lossy()))
}

/// All session state in one place: history and favorites loaded once at
/// startup, the transient batch queue, and the store every save funnels
/// through. The core modules stay stateless; this is the only owner of
/// the mutable lists.
pub struct App {
    pub history: Vec<SearchEntry>,
    pub favorites: Vec<SearchEntry>,
    pub batch_queue: BatchQueue,

    store: Store<BackendLocal>,
}

impl App {
    pub fn load() -> Result<Self> {
        let base_path = base_path()?;
        let config = Config::load_with(&base_path)?;

        let storage = BackendLocal::new(&base_path)
            .with_context(|| format!("couldnt open data dir {base_path}"))?;
        let store = Store::new(storage, config.history_limit);

        let history = store.load_history();
        let favorites = store.load_favorites();
        tracing::debug!(
            "loaded {} history entries and {} favorites from {base_path}",
            history.len(),
            favorites.len()
        );

        Ok(App {
            history,
            favorites,
            batch_queue: BatchQueue::new(),
            store,
        })
    }

    #[cfg(test)]
    pub fn with_store(store: Store<BackendLocal>) -> Self {
        App {
            history: store.load_history(),
            favorites: store.load_favorites(),
            batch_queue: BatchQueue::new(),
            store,
        }
    }

    /// Validate the term against the operator's input kind, build the
    /// URL and record the search. Returns the new history entry.
    pub fn run_search(
        &mut self,
        operator: &str,
        term: &str,
        date: Option<String>,
        category: Option<String>,
    ) -> Result<SearchEntry> {
        let spec = catalog::lookup(operator);

        match spec.input_kind {
            InputKind::Url => {
                if !validation::is_valid_domain_or_url(term) {
                    bail!("{term:?} is not a valid URL or domain (e.g. example.com)");
                }
            }
            InputKind::Keyword => {
                if !validation::is_valid_keyword(term) {
                    bail!("{term:?} is not a valid search keyword");
                }
            }
        }

        let params = QueryParams { date };
        let url = query::build_search_url(operator, term, Some(&params));

        let entry = SearchEntry::new(operator, term, &url, category);
        self.history.push(entry.clone());
        self.store.save_history(&self.history);

        Ok(entry)
    }

    /// Copy an entry into favorites unless a structurally equal one is
    /// already there.
    pub fn add_favorite(&mut self, entry: SearchEntry) -> bool {
        if self.favorites.contains(&entry) {
            return false;
        }

        self.favorites.push(entry);
        self.store.save_favorites(&self.favorites);
        true
    }

    /// Remove a favorite by its display position.
    pub fn remove_favorite(&mut self, index: usize) -> Result<SearchEntry> {
        if index >= self.favorites.len() {
            bail!(
                "no favorite at index {index} ({} favorites saved)",
                self.favorites.len()
            );
        }

        let removed = self.favorites.remove(index);
        self.store.save_favorites(&self.favorites);
        Ok(removed)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.store.save_history(&self.history);
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
        self.store.save_favorites(&self.favorites);
    }

    /// Validate raw batch input and queue every surviving line under one
    /// operator. Returns how many queries were queued.
    pub fn queue_batch(
        &mut self,
        operator: &str,
        raw: &str,
    ) -> Result<usize, validation::BatchError> {
        let queries = validation::validate_batch(raw)?;
        for query in &queries {
            self.batch_queue.push(operator, query);
        }
        Ok(queries.len())
    }

    /// Build a URL for every queued query and record each as a
    /// batch-flagged history entry. The queue is emptied.
    pub fn run_batch(&mut self) -> Vec<SearchEntry> {
        let items = self.batch_queue.drain();

        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            let url = query::build_search_url(&item.operator, &item.query, None);
            let mut entry = SearchEntry::new(&item.operator, &item.query, &url, None);
            entry.batch = Some(true);

            self.history.push(entry.clone());
            entries.push(entry);
        }

        if !entries.is_empty() {
            self.store.save_history(&self.history);
        }

        entries
    }
}
