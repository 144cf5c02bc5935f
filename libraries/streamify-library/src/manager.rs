//! Library manager - core orchestration
//!
//! Coordinates the recently-played list, favorites, and current playlist,
//! and buffers events for the owning presentation context.

use crate::{
    config::LibraryConfig,
    events::LibraryEvent,
    favorites::Favorites,
    recents::Recents,
};
use streamify_core::types::{MediaId, MediaItem, Playlist};

/// Media library state manager
///
/// Owns the per-session library state: recently played, favorites, and the
/// current playlist. All mutation goes through `&mut self` on a single
/// thread of control; callers that share a manager across threads must add
/// their own synchronization.
#[derive(Debug, Clone)]
pub struct LibraryManager {
    /// Recently played items, most recent first
    recents: Recents,

    /// Favorited items
    favorites: Favorites,

    /// Currently selected playlist, if any
    current_playlist: Option<Playlist>,

    /// Events waiting to be drained by the owning context
    pending_events: Vec<LibraryEvent>,
}

impl LibraryManager {
    /// Create a new library manager
    pub fn new(config: LibraryConfig) -> Self {
        Self {
            recents: Recents::new(config.recents_limit),
            favorites: Favorites::new(),
            current_playlist: None,
            pending_events: Vec::new(),
        }
    }

    // === Playback ===

    /// Record that playback of an item was requested
    ///
    /// The item moves to the front of the recently-played list (replacing
    /// any older entry with the same id) and a `PlaybackRequested` event is
    /// buffered for the playback collaborator. This never fails.
    pub fn play(&mut self, item: MediaItem) {
        tracing::debug!("Playback requested: {} ({})", item.title, item.id);

        self.emit(LibraryEvent::PlaybackRequested {
            media_id: item.id.clone(),
        });
        self.recents.record(item);
        self.emit(LibraryEvent::RecentsChanged {
            length: self.recents.len(),
        });
    }

    /// Get the recently-played items, most recent first
    pub fn recently_played(&self) -> Vec<&MediaItem> {
        self.recents.get_all()
    }

    /// Clear the recently-played list
    pub fn clear_recently_played(&mut self) {
        self.recents.clear();
        self.emit(LibraryEvent::RecentsChanged { length: 0 });
    }

    /// Get the bound on the recently-played list
    pub fn recents_limit(&self) -> usize {
        self.recents.limit()
    }

    /// Change the bound on the recently-played list
    ///
    /// Shrinking the bound discards the oldest entries.
    pub fn set_recents_limit(&mut self, limit: usize) {
        let before = self.recents.len();
        self.recents.set_limit(limit);
        if self.recents.len() != before {
            self.emit(LibraryEvent::RecentsChanged {
                length: self.recents.len(),
            });
        }
    }

    // === Favorites ===

    /// Toggle an item in or out of favorites
    ///
    /// A second call with the same id restores the previous state. This
    /// never fails.
    pub fn toggle_favorite(&mut self, item: MediaItem) {
        let media_id = item.id.clone();
        if self.favorites.toggle(item) {
            tracing::debug!("Added favorite: {}", media_id);
            self.emit(LibraryEvent::FavoriteAdded { media_id });
        } else {
            tracing::debug!("Removed favorite: {}", media_id);
            self.emit(LibraryEvent::FavoriteRemoved { media_id });
        }
    }

    /// Check whether an item with the given id is favorited
    ///
    /// Pure query, no side effects.
    pub fn is_favorite(&self, id: &MediaId) -> bool {
        self.favorites.contains(id)
    }

    /// Get all favorites in insertion order
    pub fn favorites(&self) -> Vec<&MediaItem> {
        self.favorites.get_all()
    }

    /// Number of favorited items
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    // === Current playlist ===

    /// Select a playlist as the current one
    pub fn set_current_playlist(&mut self, playlist: Playlist) {
        tracing::debug!("Current playlist: {} ({})", playlist.name, playlist.id);
        self.emit(LibraryEvent::PlaylistChanged {
            playlist_id: Some(playlist.id.clone()),
        });
        self.current_playlist = Some(playlist);
    }

    /// Clear the current playlist selection
    ///
    /// Returns the playlist that was selected, if any.
    pub fn clear_current_playlist(&mut self) -> Option<Playlist> {
        let cleared = self.current_playlist.take();
        if cleared.is_some() {
            self.emit(LibraryEvent::PlaylistChanged { playlist_id: None });
        }
        cleared
    }

    /// Get the currently selected playlist
    pub fn current_playlist(&self) -> Option<&Playlist> {
        self.current_playlist.as_ref()
    }

    // === Events ===

    /// Drain all pending events
    ///
    /// Returns all events that have been emitted since the last drain.
    /// The owning context calls this after each batch of mutations.
    pub fn drain_events(&mut self) -> Vec<LibraryEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit(&mut self, event: LibraryEvent) {
        self.pending_events.push(event);
    }
}

impl Default for LibraryManager {
    fn default() -> Self {
        Self::new(LibraryConfig::default())
    }
}
