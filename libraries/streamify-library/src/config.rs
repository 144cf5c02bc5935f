//! Configuration for the library manager

use serde::{Deserialize, Serialize};

/// Default bound on the recently-played list
pub const DEFAULT_RECENTS_LIMIT: usize = 20;

/// Configuration for `LibraryManager`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Maximum number of entries kept in the recently-played list
    pub recents_limit: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            recents_limit: DEFAULT_RECENTS_LIMIT,
        }
    }
}
