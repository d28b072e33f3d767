use rand::seq::SliceRandom;
use serde::Serialize;

/// One queued batch query. Session-scoped only; the queue is never
/// written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct BatchQueueItem {
    pub operator: String,
    pub query: String,
    pub timestamp: String,
}

#[derive(Debug, Default)]
pub struct BatchQueue {
    items: Vec<BatchQueueItem>,
}

impl BatchQueue {
    pub fn new() -> Self {
        BatchQueue::default()
    }

    pub fn push(&mut self, operator: &str, query: &str) {
        self.items.push(BatchQueueItem {
            operator: operator.to_string(),
            query: query.to_string(),
            timestamp: chrono::Local::now().to_rfc3339(),
        });
    }

    pub fn items(&self) -> &[BatchQueueItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Randomize run order so repeated batches don't replay the same
    /// request pattern.
    pub fn shuffle(&mut self) {
        self.items.shuffle(&mut rand::rng());
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn drain(&mut self) -> Vec<BatchQueueItem> {
        std::mem::take(&mut self.items)
    }
}
