//! In-memory resource cache
//!
//! The list a screen shows is a plain copy of the last server answer. After
//! every mutation the cached list is reconciled by replacing or filtering
//! whole items, never by merging fields.

use chrono::{DateTime, Utc};
use tracing::debug;
use crate::models::Identified;

/// Cached list of one resource, unique by id
#[derive(Debug, Clone)]
pub struct ResourceStore<T> {
    items: Vec<T>,
    loaded_at: Option<DateTime<Utc>>,
}

impl<T: Identified + Clone> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loaded_at: None,
        }
    }

    /// Replace the whole list with a fresh server answer. Later duplicates of
    /// an id are dropped.
    pub fn replace_all(&mut self, items: Vec<T>) {
        let mut unique: Vec<T> = Vec::with_capacity(items.len());
        for item in items {
            if !unique.iter().any(|existing| existing.id() == item.id()) {
                unique.push(item);
            }
        }
        debug!(count = unique.len(), "Cache replaced");
        self.items = unique;
        self.loaded_at = Some(Utc::now());
    }

    /// Add a record returned by a create call. A record with the same id
    /// replaces the cached one so ids stay unique.
    pub fn insert_created(&mut self, item: T) {
        match self.position(item.id()) {
            Some(index) => self.items[index] = item,
            None => self.items.push(item),
        }
    }

    /// Swap in a record returned by an update call; returns whether it was cached
    pub fn apply_updated(&mut self, item: T) -> bool {
        match self.position(item.id()) {
            Some(index) => {
                self.items[index] = item;
                true
            }
            None => false,
        }
    }

    /// Drop the record with this id
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When the list was last replaced from the server
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

impl<T: Identified + Clone> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
