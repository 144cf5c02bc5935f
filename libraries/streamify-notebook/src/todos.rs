//! To-do store
//!
//! Ordered in-memory collection of tasks with completion toggling and
//! title filtering.

use crate::types::TodoItem;
use serde::{Deserialize, Serialize};
use streamify_core::{types::TodoId, Result, StreamifyError};

/// In-memory to-do collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoStore {
    todos: Vec<TodoItem>,
}

impl TodoStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Append a fresh open task and return a copy of it
    pub fn add(&mut self) -> TodoItem {
        let todo = TodoItem::new("New Task");
        tracing::debug!("Created task: {}", todo.id);
        self.todos.push(todo.clone());
        todo
    }

    /// Append an existing task
    pub fn add_item(&mut self, todo: TodoItem) {
        self.todos.push(todo);
    }

    /// Replace a task, matched by id
    pub fn update(&mut self, todo: TodoItem) -> Result<()> {
        let existing = self
            .todos
            .iter_mut()
            .find(|t| t.id == todo.id)
            .ok_or_else(|| StreamifyError::not_found("Task", todo.id.as_str()))?;
        *existing = todo;
        Ok(())
    }

    /// Flip a task's completion flag
    ///
    /// Returns the new completed state.
    pub fn toggle_completion(&mut self, id: &TodoId) -> Result<bool> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| StreamifyError::not_found("Task", id.as_str()))?;
        todo.completed = !todo.completed;
        tracing::debug!("Task {} completed: {}", id, todo.completed);
        Ok(todo.completed)
    }

    /// Remove a task by id
    pub fn remove(&mut self, id: &TodoId) -> Result<TodoItem> {
        let pos = self
            .todos
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| StreamifyError::not_found("Task", id.as_str()))?;
        Ok(self.todos.remove(pos))
    }

    /// Tasks whose title contains the query, case-insensitive
    ///
    /// An empty query returns every task in order.
    pub fn filtered(&self, query: &str) -> Vec<&TodoItem> {
        if query.is_empty() {
            return self.todos.iter().collect();
        }
        let query = query.to_lowercase();
        self.todos
            .iter()
            .filter(|t| t.title.to_lowercase().contains(&query))
            .collect()
    }

    /// Iterate over tasks in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TodoItem> {
        self.todos.iter()
    }

    /// Number of tasks
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
