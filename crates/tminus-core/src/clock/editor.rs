//! Editable form for inspecting, setting, or clearing the T-zero.
//!
//! Mirrors the modal-dialog workflow: opening the form pre-fills the field
//! with the current T-zero, and confirmation either saves through the store
//! or keeps the form open. An empty or unparseable field makes `confirm_set`
//! a no-op with no validation message; callers that want to surface the
//! rejection inspect the returned outcome.

use jiff::Timestamp;

use super::store::TZeroStore;
use crate::error::Result;

/// Result of a confirm action on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    /// The store was updated and the form closed.
    Saved,
    /// The input was rejected silently; the form stays open.
    StillOpen,
}

/// Form state for editing the T-zero reference instant.
#[derive(Debug, Clone, Default)]
pub struct TZeroForm {
    field: Option<String>,
}

impl TZeroForm {
    /// Opens the form, pre-filling the field with the canonical string form
    /// of the current T-zero if one is set.
    pub fn open(store: &TZeroStore) -> Self {
        Self {
            field: store.read().map(|t_zero| t_zero.to_string()),
        }
    }

    /// Returns the current field contents.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Overwrites the field contents.
    pub fn set_field(&mut self, value: impl Into<String>) {
        self.field = Some(value.into());
    }

    /// Empties the field.
    pub fn clear_field(&mut self) {
        self.field = None;
    }

    /// Saves the field as the new T-zero if it holds a parseable timestamp.
    ///
    /// An empty or unparseable field leaves the store untouched and returns
    /// [`EditorOutcome::StillOpen`]; only a storage failure is an error.
    pub fn confirm_set(&self, store: &TZeroStore) -> Result<EditorOutcome> {
        let Some(text) = self.field.as_deref().filter(|text| !text.is_empty()) else {
            return Ok(EditorOutcome::StillOpen);
        };
        match text.parse::<Timestamp>() {
            Ok(instant) => {
                store.set(instant)?;
                Ok(EditorOutcome::Saved)
            }
            Err(_) => Ok(EditorOutcome::StillOpen),
        }
    }

    /// Clears the T-zero unconditionally and closes the form.
    pub fn confirm_clear(&self, store: &TZeroStore) -> Result<EditorOutcome> {
        store.clear()?;
        Ok(EditorOutcome::Saved)
    }
}
