/// Media item domain type
use crate::types::MediaId;
use serde::{Deserialize, Serialize};

/// A single playable unit (video or audio) with display metadata
///
/// The id is the sole identity key; every other field is display-only and
/// may be absent. Duration, view count and publish date arrive from the
/// catalog as preformatted labels ("5:30", "1.2K views", "2 days ago"), so
/// they are kept as strings rather than parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique media identifier
    pub id: MediaId,

    /// Title shown in lists and detail views
    pub title: String,

    /// Longer description text
    pub description: String,

    /// Thumbnail image reference
    pub thumbnail_url: String,

    /// Duration label, e.g. "5:30"
    pub duration: Option<String>,

    /// Channel or source name
    pub channel: Option<String>,

    /// View count label, e.g. "1.2K views"
    pub view_count: Option<String>,

    /// Publish date label, e.g. "2 days ago"
    pub published_at: Option<String>,
}

impl MediaItem {
    /// Create a new media item with the required display fields
    pub fn new(
        id: MediaId,
        title: impl Into<String>,
        description: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            thumbnail_url: thumbnail_url.into(),
            duration: None,
            channel: None,
            view_count: None,
            published_at: None,
        }
    }

    /// Attach the optional display metadata in one call
    pub fn with_metadata(
        mut self,
        duration: impl Into<String>,
        channel: impl Into<String>,
        view_count: impl Into<String>,
        published_at: impl Into<String>,
    ) -> Self {
        self.duration = Some(duration.into());
        self.channel = Some(channel.into());
        self.view_count = Some(view_count.into());
        self.published_at = Some(published_at.into());
        self
    }

    /// Check whether another item refers to the same playable unit
    pub fn same_media(&self, other: &MediaItem) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_item_creation() {
        let item = MediaItem::new(
            MediaId::new("1"),
            "Sample Video",
            "A sample description",
            "https://example.com/thumb.jpg",
        );
        assert_eq!(item.id.as_str(), "1");
        assert_eq!(item.title, "Sample Video");
        assert!(item.duration.is_none());
        assert!(item.channel.is_none());
    }

    #[test]
    fn with_metadata_fills_display_fields() {
        let item = MediaItem::new(MediaId::new("1"), "Video", "Desc", "thumb").with_metadata(
            "5:30",
            "Sample Channel",
            "1.2K views",
            "2 days ago",
        );
        assert_eq!(item.duration.as_deref(), Some("5:30"));
        assert_eq!(item.channel.as_deref(), Some("Sample Channel"));
        assert_eq!(item.view_count.as_deref(), Some("1.2K views"));
        assert_eq!(item.published_at.as_deref(), Some("2 days ago"));
    }

    #[test]
    fn same_media_compares_ids_only() {
        let a = MediaItem::new(MediaId::new("1"), "Title A", "Desc A", "thumb-a");
        let b = MediaItem::new(MediaId::new("1"), "Title B", "Desc B", "thumb-b");
        let c = MediaItem::new(MediaId::new("2"), "Title A", "Desc A", "thumb-a");

        assert!(a.same_media(&b));
        assert!(!a.same_media(&c));
    }
}
