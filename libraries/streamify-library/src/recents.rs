//! Recently-played tracking
//!
//! Maintains a bounded, deduplicated list of recently played media,
//! most recent first.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use streamify_core::types::{MediaId, MediaItem};

/// Recently-played list with bounded size
///
/// Recording an item that is already present moves it to the front instead
/// of duplicating it. Once the bound is reached, the oldest entries are
/// discarded from the tail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recents {
    /// Recents buffer (most recent = front)
    items: VecDeque<MediaItem>,

    /// Maximum list size
    limit: usize,
}

impl Recents {
    /// Create a new empty recents list with the given bound
    pub fn new(limit: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Record that an item was played
    ///
    /// Any existing entry with the same id is removed first, so the item
    /// moves to the front rather than appearing twice. The tail is dropped
    /// once the list exceeds its bound. This never fails.
    pub fn record(&mut self, item: MediaItem) {
        if let Some(pos) = self.items.iter().position(|i| i.id == item.id) {
            self.items.remove(pos);
        }
        self.items.push_front(item);
        self.items.truncate(self.limit);
    }

    /// Check whether an item with the given id is in the list
    pub fn contains(&self, id: &MediaId) -> bool {
        self.items.iter().any(|i| &i.id == id)
    }

    /// Iterate over the list, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &MediaItem> {
        self.items.iter()
    }

    /// Get all entries, most recent first
    pub fn get_all(&self) -> Vec<&MediaItem> {
        self.items.iter().collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clear the list
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get the current bound
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Change the bound
    ///
    /// If the new bound is smaller than the current length, the oldest
    /// entries are discarded.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.items.truncate(limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> MediaItem {
        MediaItem::new(MediaId::new(id), format!("Video {id}"), "Desc", "thumb")
    }

    #[test]
    fn create_recents() {
        let recents = Recents::new(10);
        assert_eq!(recents.limit(), 10);
        assert_eq!(recents.len(), 0);
        assert!(recents.is_empty());
    }

    #[test]
    fn record_inserts_at_front() {
        let mut recents = Recents::new(10);
        recents.record(item("1"));
        recents.record(item("2"));

        let all = recents.get_all();
        assert_eq!(all[0].id.as_str(), "2");
        assert_eq!(all[1].id.as_str(), "1");
    }

    #[test]
    fn record_deduplicates_by_id() {
        let mut recents = Recents::new(10);
        recents.record(item("1"));
        recents.record(item("2"));
        recents.record(item("1"));

        let all = recents.get_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id.as_str(), "1");
        assert_eq!(all[1].id.as_str(), "2");
    }

    #[test]
    fn recents_bounded() {
        let mut recents = Recents::new(3);

        recents.record(item("1"));
        recents.record(item("2"));
        recents.record(item("3"));
        assert_eq!(recents.len(), 3);

        // Fourth entry pushes the oldest out
        recents.record(item("4"));
        assert_eq!(recents.len(), 3);

        let all = recents.get_all();
        assert_eq!(all[0].id.as_str(), "4");
        assert_eq!(all[1].id.as_str(), "3");
        assert_eq!(all[2].id.as_str(), "2");
        assert!(!recents.contains(&MediaId::new("1")));
    }

    #[test]
    fn replaying_a_full_list_does_not_evict() {
        let mut recents = Recents::new(3);
        recents.record(item("1"));
        recents.record(item("2"));
        recents.record(item("3"));

        // "1" is already present, so it moves to the front and nothing drops
        recents.record(item("1"));
        assert_eq!(recents.len(), 3);
        assert!(recents.contains(&MediaId::new("2")));
        assert_eq!(recents.get_all()[0].id.as_str(), "1");
    }

    #[test]
    fn shrink_limit_discards_oldest() {
        let mut recents = Recents::new(5);
        for i in 1..=5 {
            recents.record(item(&i.to_string()));
        }

        recents.set_limit(3);
        assert_eq!(recents.len(), 3);
        assert_eq!(recents.limit(), 3);

        // Most recent three survive
        let all = recents.get_all();
        assert_eq!(all[0].id.as_str(), "5");
        assert_eq!(all[1].id.as_str(), "4");
        assert_eq!(all[2].id.as_str(), "3");
    }

    #[test]
    fn grow_limit_preserves_entries() {
        let mut recents = Recents::new(3);
        recents.record(item("1"));
        recents.record(item("2"));

        recents.set_limit(10);
        assert_eq!(recents.limit(), 10);
        assert_eq!(recents.len(), 2);
    }

    #[test]
    fn clear_recents() {
        let mut recents = Recents::new(10);
        recents.record(item("1"));
        recents.record(item("2"));

        recents.clear();
        assert!(recents.is_empty());
        assert_eq!(recents.len(), 0);
    }
}
