//! Favorites collection
//!
//! Insertion-ordered set of favorited media, deduplicated by id.

use serde::{Deserialize, Serialize};
use streamify_core::types::{MediaId, MediaItem};

/// Favorited media items
///
/// Membership is keyed on the media id. Toggling is a pure flip: a second
/// toggle with the same id restores the previous contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Favorites {
    items: Vec<MediaItem>,
}

impl Favorites {
    /// Create an empty favorites collection
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Toggle an item in or out of the collection
    ///
    /// Returns `true` if the item is favorited after the call, `false` if
    /// it was removed.
    pub fn toggle(&mut self, item: MediaItem) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i.id == item.id) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(item);
            true
        }
    }

    /// Check whether an item with the given id is favorited
    pub fn contains(&self, id: &MediaId) -> bool {
        self.items.iter().any(|i| &i.id == id)
    }

    /// Remove an item by id
    ///
    /// Returns the removed item if it was present.
    pub fn remove(&mut self, id: &MediaId) -> Option<MediaItem> {
        let pos = self.items.iter().position(|i| &i.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Iterate over favorites in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &MediaItem> {
        self.items.iter()
    }

    /// Get all favorites in insertion order
    pub fn get_all(&self) -> Vec<&MediaItem> {
        self.items.iter().collect()
    }

    /// Number of favorites
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no favorites
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all favorites
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
