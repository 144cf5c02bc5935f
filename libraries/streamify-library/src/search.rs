//! In-memory media search
//!
//! Case-insensitive substring search over a slice of media items, with an
//! optional category filter matched against title keywords.

use serde::{Deserialize, Serialize};
use streamify_core::types::MediaItem;

/// Search category chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchCategory {
    /// No category restriction
    All,
    /// Music and performances
    Music,
    /// Gaming content
    Gaming,
    /// Educational content
    Education,
    /// Comedy and general entertainment
    Entertainment,
    /// News coverage
    News,
}

impl SearchCategory {
    /// All categories in display order
    pub fn all() -> [SearchCategory; 6] {
        [
            SearchCategory::All,
            SearchCategory::Music,
            SearchCategory::Gaming,
            SearchCategory::Education,
            SearchCategory::Entertainment,
            SearchCategory::News,
        ]
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            SearchCategory::All => "All",
            SearchCategory::Music => "Music",
            SearchCategory::Gaming => "Gaming",
            SearchCategory::Education => "Education",
            SearchCategory::Entertainment => "Entertainment",
            SearchCategory::News => "News",
        }
    }

    /// Title keywords that place an item in this category
    fn keywords(self) -> &'static [&'static str] {
        match self {
            SearchCategory::All => &[],
            SearchCategory::Music => &["music", "pop"],
            SearchCategory::Gaming => &["gaming", "game"],
            SearchCategory::Education => &["educational", "math", "science"],
            SearchCategory::Entertainment => &["comedy", "entertainment"],
            SearchCategory::News => &["news"],
        }
    }

    fn matches(self, item: &MediaItem) -> bool {
        let keywords = self.keywords();
        if keywords.is_empty() {
            return true;
        }
        let title = item.title.to_lowercase();
        keywords.iter().any(|k| title.contains(k))
    }
}

/// Search a slice of media items
///
/// Matches items whose title or description contains the query
/// (case-insensitive), optionally restricted to a category. An empty or
/// whitespace-only query yields no results.
pub fn search<'a>(
    items: &'a [MediaItem],
    query: &str,
    category: Option<SearchCategory>,
) -> Vec<&'a MediaItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    items
        .iter()
        .filter(|item| {
            let matches_query = item.title.to_lowercase().contains(&query)
                || item.description.to_lowercase().contains(&query);
            let matches_category = category.map_or(true, |c| c.matches(item));
            matches_query && matches_category
        })
        .collect()
}
