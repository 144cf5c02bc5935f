//! Note store
//!
//! Ordered in-memory collection of notes with title filtering.

use crate::types::Note;
use serde::{Deserialize, Serialize};
use streamify_core::{types::NoteId, Result, StreamifyError};

/// In-memory note collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Append a fresh untitled note and return a copy of it
    pub fn add(&mut self) -> Note {
        let note = Note::new("New Note", "");
        tracing::debug!("Created note: {}", note.id);
        self.notes.push(note.clone());
        note
    }

    /// Append an existing note
    pub fn add_note(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// Replace a note's title and content, matched by id
    pub fn update(&mut self, note: Note) -> Result<()> {
        let existing = self
            .notes
            .iter_mut()
            .find(|n| n.id == note.id)
            .ok_or_else(|| StreamifyError::not_found("Note", note.id.as_str()))?;
        *existing = note;
        Ok(())
    }

    /// Remove a note by id
    pub fn remove(&mut self, id: &NoteId) -> Result<Note> {
        let pos = self
            .notes
            .iter()
            .position(|n| &n.id == id)
            .ok_or_else(|| StreamifyError::not_found("Note", id.as_str()))?;
        tracing::debug!("Removed note: {}", id);
        Ok(self.notes.remove(pos))
    }

    /// Notes whose title contains the query, case-insensitive
    ///
    /// An empty query returns every note in order.
    pub fn filtered(&self, query: &str) -> Vec<&Note> {
        if query.is_empty() {
            return self.notes.iter().collect();
        }
        let query = query.to_lowercase();
        self.notes
            .iter()
            .filter(|n| n.title.to_lowercase().contains(&query))
            .collect()
    }

    /// Iterate over notes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// Number of notes
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_creates_untitled_note() {
        let mut store = NoteStore::new();
        let note = store.add();
        assert_eq!(note.title, "New Note");
        assert_eq!(note.content, "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_replaces_matching_note() {
        let mut store = NoteStore::new();
        let mut note = store.add();

        note.title = "Groceries".to_string();
        note.content = "milk, eggs".to_string();
        store.update(note.clone()).unwrap();

        assert_eq!(store.iter().next().unwrap().title, "Groceries");
    }

    #[test]
    fn update_unknown_note_fails() {
        let mut store = NoteStore::new();
        let err = store.update(Note::new("Ghost", "")).unwrap_err();
        assert!(err.to_string().starts_with("Note not found"));
    }

    #[test]
    fn remove_returns_the_note() {
        let mut store = NoteStore::new();
        store.add_note(Note::new("Keep", ""));
        let id = store.add().id;

        let removed = store.remove(&id).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(store.len(), 1);
        assert!(store.remove(&id).is_err());
    }

    #[test]
    fn filter_matches_title_case_insensitive() {
        let mut store = NoteStore::new();
        store.add_note(Note::new("Groceries", "milk"));
        store.add_note(Note::new("Travel plans", "passport"));

        let hits = store.filtered("GROC");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Groceries");

        // Content is not searched
        assert!(store.filtered("milk").is_empty());

        // Empty query returns everything
        assert_eq!(store.filtered("").len(), 2);
    }

    #[test]
    fn store_snapshot_round_trip() {
        let mut store = NoteStore::new();
        store.add_note(Note::new("Groceries", "milk, eggs"));
        store.add_note(Note::new("Ideas", ""));

        let json = serde_json::to_string(&store).unwrap();
        let restored: NoteStore = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 2);
        assert_eq!(
            restored.iter().map(|n| n.title.as_str()).collect::<Vec<_>>(),
            vec!["Groceries", "Ideas"]
        );
    }
}
