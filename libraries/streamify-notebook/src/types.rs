//! Notebook domain types

use serde::{Deserialize, Serialize};
use streamify_core::types::{NoteId, TodoId};

/// A free-form note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique note identifier
    pub id: NoteId,

    /// Note title, shown in the list
    pub title: String,

    /// Note body text
    pub content: String,
}

impl Note {
    /// Create a new note with a generated id
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: NoteId::generate(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique to-do identifier
    pub id: TodoId,

    /// Task title
    pub title: String,

    /// Whether the task is done
    pub completed: bool,
}

impl TodoItem {
    /// Create a new open task with a generated id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TodoId::generate(),
            title: title.into(),
            completed: false,
        }
    }
}
