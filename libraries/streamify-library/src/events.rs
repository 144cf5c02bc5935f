//! Library events
//!
//! Event-based communication for UI synchronization. Events are buffered on
//! the manager and drained by the owning context after each batch of
//! mutations; nothing in this crate pushes to observers directly.

use serde::{Deserialize, Serialize};
use streamify_core::types::{MediaId, PlaylistId};

/// Events emitted by the library state manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibraryEvent {
    /// Playback of a media item was requested
    ///
    /// The library only records the request; an external playback engine
    /// consumes this event and starts the actual stream.
    PlaybackRequested {
        /// ID of the item to play
        media_id: MediaId,
    },

    /// The recently-played list changed
    RecentsChanged {
        /// New list length
        length: usize,
    },

    /// An item was added to favorites
    FavoriteAdded {
        /// ID of the favorited item
        media_id: MediaId,
    },

    /// An item was removed from favorites
    FavoriteRemoved {
        /// ID of the unfavorited item
        media_id: MediaId,
    },

    /// The current playlist changed
    PlaylistChanged {
        /// ID of the new current playlist, or `None` if it was cleared
        playlist_id: Option<PlaylistId>,
    },
}
