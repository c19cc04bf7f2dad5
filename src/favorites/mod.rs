//! Session favorites: an ordered list of search results with unique ids.
//!
//! The store is the single coordination point for the collection. Every
//! method takes `&self`, so it can be shared behind an `Arc` between the UI
//! thread and async tasks. Mutations and their change notifications happen
//! under one write lock, so subscribers see snapshots in mutation order.
//!
//! Nothing here is persisted; the collection lives as long as the store.

use crossbeam_channel::Receiver;
use parking_lot::RwLock;

use crate::model::{ResultKind, SearchResult};
use crate::observe::Observers;

/// Errors from favorites mutation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FavoritesError {
    #[error("Index {index} out of bounds for {len} favorites")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Deduplicated, insertion-ordered favorites
#[derive(Default)]
pub struct FavoritesStore {
    items: RwLock<Vec<SearchResult>>,
    observers: Observers<Vec<SearchResult>>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` unless an element with the same id is already present.
    ///
    /// Returns `true` if the item was inserted. A duplicate is silently
    /// ignored and does not notify.
    pub fn add(&self, item: SearchResult) -> bool {
        let mut items = self.items.write();
        if items.iter().any(|existing| existing.id == item.id) {
            tracing::debug!(id = %item.id, "Already a favorite");
            return false;
        }

        tracing::debug!(id = %item.id, name = %item.name, "Added favorite");
        items.push(item);
        self.observers.notify(items.clone());
        true
    }

    /// Add several items in order, skipping duplicates.
    ///
    /// Returns how many were inserted. Notifies once if anything changed.
    pub fn add_all(&self, new_items: impl IntoIterator<Item = SearchResult>) -> usize {
        let mut items = self.items.write();
        let mut added = 0;
        for item in new_items {
            if !items.iter().any(|existing| existing.id == item.id) {
                items.push(item);
                added += 1;
            }
        }

        if added > 0 {
            tracing::debug!(added, "Added favorites");
            self.observers.notify(items.clone());
        }
        added
    }

    /// Remove every element with this id. Returns `true` if one was removed.
    pub fn remove_by_id(&self, id: &str) -> bool {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|item| item.id != id);

        if items.len() == before {
            return false;
        }
        tracing::debug!(id, "Removed favorite");
        self.observers.notify(items.clone());
        true
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&self, index: usize) -> Result<SearchResult, FavoritesError> {
        let mut items = self.items.write();
        if index >= items.len() {
            return Err(FavoritesError::IndexOutOfBounds {
                index,
                len: items.len(),
            });
        }

        let removed = items.remove(index);
        tracing::debug!(index, id = %removed.id, "Removed favorite");
        self.observers.notify(items.clone());
        Ok(removed)
    }

    /// Remove the elements at several positions, as a list view's delete
    /// gesture reports them.
    ///
    /// Offsets refer to the collection before any removal and are resolved
    /// to ids first, so their order does not matter. Offsets past the end are
    /// ignored. Returns how many were removed and notifies once.
    pub fn remove_offsets(&self, offsets: &[usize]) -> usize {
        let mut items = self.items.write();
        let doomed: Vec<String> = offsets
            .iter()
            .filter_map(|&i| items.get(i).map(|item| item.id.clone()))
            .collect();

        let before = items.len();
        items.retain(|item| !doomed.contains(&item.id));
        let removed = before - items.len();

        if removed > 0 {
            tracing::debug!(removed, "Removed favorites");
            self.observers.notify(items.clone());
        }
        removed
    }

    /// Snapshot of the collection in insertion order.
    pub fn items(&self) -> Vec<SearchResult> {
        self.items.read().clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.read().iter().any(|item| item.id == id)
    }

    /// Ids of favorites of one kind, in insertion order.
    pub fn ids_of_kind(&self, kind: ResultKind) -> Vec<String> {
        self.items
            .read()
            .iter()
            .filter(|item| item.kind == kind)
            .map(|item| item.id.clone())
            .collect()
    }

    pub fn track_ids(&self) -> Vec<String> {
        self.ids_of_kind(ResultKind::Track)
    }

    pub fn artist_ids(&self) -> Vec<String> {
        self.ids_of_kind(ResultKind::Artist)
    }

    /// Receive a snapshot after every effective mutation.
    pub fn subscribe(&self) -> Receiver<Vec<SearchResult>> {
        self.observers.subscribe()
    }
}
