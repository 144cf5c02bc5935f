/// Playlist domain type
use crate::types::{MediaItem, PlaylistId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, ordered collection of media items
///
/// Ordering is significant and preserved as authored. Items are not
/// deduplicated; a playlist may legitimately contain the same media twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Optional description text
    pub description: Option<String>,

    /// Ordered media items
    pub items: Vec<MediaItem>,

    /// Optional cover image reference
    pub thumbnail_url: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            description: None,
            items: Vec::new(),
            thumbnail_url: None,
            created_at: Utc::now(),
        }
    }

    /// Create a playlist with a specific ID and contents
    pub fn with_items(
        id: PlaylistId,
        name: impl Into<String>,
        items: Vec<MediaItem>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            items,
            thumbnail_url: None,
            created_at,
        }
    }

    /// Append a media item, preserving authored order
    pub fn push(&mut self, item: MediaItem) {
        self.items.push(item);
    }

    /// Number of items in the playlist
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the playlist has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
