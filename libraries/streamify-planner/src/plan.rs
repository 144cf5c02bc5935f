//! Citizenship plan state

use crate::country::Country;
use serde::{Deserialize, Serialize};
use streamify_core::{types::CountryId, Result, StreamifyError};

/// Per-user citizenship planning state
///
/// Holds the countries a user is actively pursuing and a to-do shortlist of
/// country ids. Both collections are insertion-ordered and deduplicated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CitizenshipPlan {
    in_progress: Vec<Country>,

    todo: Vec<CountryId>,
}

impl CitizenshipPlan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Start pursuing a country
    ///
    /// Returns `false` if the country is already in the plan.
    pub fn add_country(&mut self, country: Country) -> bool {
        if self.is_planned(&country.id) {
            return false;
        }
        tracing::debug!("Pursuing citizenship: {}", country.name);
        self.in_progress.push(country);
        true
    }

    /// Stop pursuing a country
    pub fn remove_country(&mut self, id: &CountryId) -> Result<Country> {
        let pos = self
            .in_progress
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| StreamifyError::not_found("Country", id.as_str()))?;
        Ok(self.in_progress.remove(pos))
    }

    /// Check whether a country is being pursued
    pub fn is_planned(&self, id: &CountryId) -> bool {
        self.in_progress.iter().any(|c| &c.id == id)
    }

    /// Countries being pursued, in the order they were added
    pub fn in_progress(&self) -> &[Country] {
        &self.in_progress
    }

    /// Toggle a country on the to-do shortlist
    ///
    /// Returns `true` if the country is on the list after the call.
    pub fn toggle_todo(&mut self, id: CountryId) -> bool {
        if let Some(pos) = self.todo.iter().position(|c| c == &id) {
            self.todo.remove(pos);
            false
        } else {
            self.todo.push(id);
            true
        }
    }

    /// The to-do shortlist, in the order entries were added
    pub fn todo_list(&self) -> &[CountryId] {
        &self.todo
    }
}
