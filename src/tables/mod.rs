//! Shared table entries (layers, line types, application ids)
//!
//! Entities never own these entries; they hold `Arc` references handed out
//! by a [`Table`]. Two entities point at "the same layer" exactly when their
//! references satisfy [`Arc::ptr_eq`].

use crate::error::{DxfError, Result};
use ahash::RandomState;
use indexmap::IndexMap;
use std::sync::Arc;

pub mod appid;
pub mod layer;
pub mod linetype;

pub use appid::AppId;
pub use layer::Layer;
pub use linetype::{LineType, LineTypeElement};

/// Base trait for all table entries
pub trait TableEntry {
    /// Get the entry's name
    fn name(&self) -> &str;

    /// Check if this is a standard/default entry
    fn is_standard(&self) -> bool {
        false
    }
}

/// Named registry of shared entries, keyed case-insensitively
#[derive(Debug, Clone)]
pub struct Table<T: TableEntry> {
    entries: IndexMap<String, Arc<T>, RandomState>,
}

impl<T: TableEntry> Table<T> {
    pub fn new() -> Self {
        Table {
            entries: IndexMap::with_hasher(RandomState::new()),
        }
    }

    /// Register a new entry and return the shared reference to it
    pub fn add(&mut self, entry: T) -> Result<Arc<T>> {
        self.add_shared(Arc::new(entry))
    }

    /// Register an already shared entry (e.g. a process-wide default)
    pub fn add_shared(&mut self, entry: Arc<T>) -> Result<Arc<T>> {
        let key = entry.name().to_uppercase();
        if self.entries.contains_key(&key) {
            return Err(DxfError::DuplicateEntry(entry.name().to_string()));
        }
        self.entries.insert(key, Arc::clone(&entry));
        Ok(entry)
    }

    /// Shared reference to the entry with the given name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<Arc<T>> {
        self.entries.get(&name.to_uppercase()).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.entries.values()
    }
}

impl<T: TableEntry> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}
