//! Data Model
//!
//! Todo item structure and the add-todo validation error.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub checked: bool,
}

impl Todo {
    /// Build a new todo with a generated id and `checked = false`.
    ///
    /// Rejects titles or descriptions that are empty after trimming; the
    /// stored fields keep the caller's input exactly as given.
    pub fn new(title: &str, description: &str) -> Result<Self, TodoError> {
        if title.trim().is_empty() || description.trim().is_empty() {
            return Err(TodoError::EmptyField);
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            checked: false,
        })
    }
}

/// Validation failures surfaced as error toasts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("Title or description are empty!")]
    EmptyField,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_keeps_fields_exactly() {
        let todo = Todo::new("  Buy milk ", "2 liters").expect("valid todo");
        assert_eq!(todo.title, "  Buy milk ");
        assert_eq!(todo.description, "2 liters");
        assert!(!todo.checked);
        assert!(!todo.id.is_empty());
    }

    #[test]
    fn new_todo_generates_unique_ids() {
        let a = Todo::new("a", "a").unwrap();
        let b = Todo::new("b", "b").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn empty_title_is_rejected() {
        assert_eq!(Todo::new("", "desc"), Err(TodoError::EmptyField));
        assert_eq!(Todo::new("   ", "desc"), Err(TodoError::EmptyField));
    }

    #[test]
    fn empty_description_is_rejected() {
        assert_eq!(Todo::new("title", ""), Err(TodoError::EmptyField));
        assert_eq!(Todo::new("title", "\t "), Err(TodoError::EmptyField));
    }

    #[test]
    fn error_message_matches_toast_text() {
        assert_eq!(
            TodoError::EmptyField.to_string(),
            "Title or description are empty!"
        );
    }
}
