use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Listing responses memoized per request path for the life of a client.
#[derive(Debug, Default)]
pub struct ListCache {
    pages: Mutex<HashMap<String, Value>>,
}

impl ListCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<Value> {
        self.lock().get(path).cloned()
    }

    pub fn insert(&self, path: impl Into<String>, page: Value) {
        self.lock().insert(path.into(), page);
    }

    pub fn invalidate(&self, path: &str) -> bool {
        self.lock().remove(path).is_some()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Value>> {
        // entries are whole values, a panic mid-insert cannot leave one torn
        self.pages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
