//! Streamify Core
//!
//! Shared domain types and error handling for Streamify.
//!
//! This crate provides the foundational building blocks used by the feature
//! crates (`streamify-library`, `streamify-notebook`, `streamify-planner`).
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `MediaItem`, `Playlist` and their id newtypes
//! - **Error Handling**: Unified `StreamifyError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use streamify_core::types::{MediaId, MediaItem, Playlist};
//!
//! let item = MediaItem::new(
//!     MediaId::new("vid-1"),
//!     "Amazing Music Performance",
//!     "Live performance of popular songs",
//!     "https://example.com/thumbs/1.jpg",
//! );
//!
//! let mut playlist = Playlist::new("Evening Mix");
//! playlist.push(item);
//! assert_eq!(playlist.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Result, StreamifyError};
pub use types::{CountryId, MediaId, MediaItem, NoteId, Playlist, PlaylistId, TodoId};
