//! Streamify - Media Library State
//!
//! Client-side library state management for Streamify.
//!
//! This crate provides:
//! - Recently-played tracking (bounded, deduplicated, most recent first)
//! - Favorites with a pure toggle and id-based lookup
//! - Current playlist selection
//! - Event notifications for UI synchronization
//! - In-memory search over media items
//!
//! # Architecture
//!
//! `streamify-library` is completely platform-agnostic:
//! - No dependency on any UI framework
//! - No dependency on storage (snapshotting state is a collaborator's job)
//! - No dependency on a playback engine (playback is requested via events)
//!
//! The manager is a plain owned struct. Construct it once and pass it by
//! reference to whatever owns the presentation context; all mutation happens
//! through `&mut self` on a single thread of control.
//!
//! # Example: Recording playback
//!
//! ```rust
//! use streamify_core::types::{MediaId, MediaItem};
//! use streamify_library::{LibraryConfig, LibraryManager};
//!
//! let mut library = LibraryManager::new(LibraryConfig::default());
//!
//! let item = MediaItem::new(
//!     MediaId::new("vid-1"),
//!     "Amazing Music Performance",
//!     "Live performance of popular songs",
//!     "https://example.com/thumbs/1.jpg",
//! );
//!
//! // User taps play: the item moves to the front of the recents list and a
//! // PlaybackRequested event is buffered for the playback collaborator.
//! library.play(item.clone());
//! assert_eq!(library.recently_played().len(), 1);
//!
//! // Favorite toggle is self-inverse.
//! library.toggle_favorite(item.clone());
//! assert!(library.is_favorite(&item.id));
//! library.toggle_favorite(item.clone());
//! assert!(!library.is_favorite(&item.id));
//! ```
//!
//! # Example: Draining events
//!
//! ```rust
//! use streamify_core::types::{MediaId, MediaItem};
//! use streamify_library::{LibraryEvent, LibraryManager};
//!
//! let mut library = LibraryManager::default();
//! library.play(MediaItem::new(MediaId::new("vid-1"), "Title", "Desc", "thumb"));
//!
//! for event in library.drain_events() {
//!     match event {
//!         LibraryEvent::PlaybackRequested { media_id } => {
//!             // hand off to the playback engine
//!             assert_eq!(media_id.as_str(), "vid-1");
//!         }
//!         _ => {}
//!     }
//! }
//! assert!(!library.has_pending_events());
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod events;
pub mod favorites;
pub mod manager;
pub mod recents;
pub mod search;

pub use config::{LibraryConfig, DEFAULT_RECENTS_LIMIT};
pub use events::LibraryEvent;
pub use favorites::Favorites;
pub use manager::LibraryManager;
pub use recents::Recents;
pub use search::{search, SearchCategory};
