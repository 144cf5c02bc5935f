//! Domain types shared across the Streamify crates

mod ids;
mod media;
mod playlist;

pub use ids::{CountryId, MediaId, NoteId, PlaylistId, TodoId};
pub use media::MediaItem;
pub use playlist::Playlist;
