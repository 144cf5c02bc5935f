//! Streamify - Notebook State
//!
//! In-memory state for the note-taking and to-do list features.
//!
//! Both stores are plain owned collections: construct once, mutate through
//! `&mut self`, and let an external storage collaborator snapshot them
//! (every type here is serde-serializable). Filtering matches the app's
//! search bars: case-insensitive substring on the title, with an empty
//! query returning everything.
//!
//! # Example
//!
//! ```rust
//! use streamify_notebook::{NoteStore, TodoStore};
//!
//! let mut notes = NoteStore::new();
//! let id = notes.add().id;
//! assert_eq!(notes.filtered("new").len(), 1);
//! notes.remove(&id).unwrap();
//!
//! let mut todos = TodoStore::new();
//! let id = todos.add().id;
//! assert!(todos.toggle_completion(&id).unwrap());
//! ```

#![forbid(unsafe_code)]

pub mod notes;
pub mod todos;
pub mod types;

pub use notes::NoteStore;
pub use todos::TodoStore;
pub use types::{Note, TodoItem};
