//! Global Application State Store
//!
//! Uses Leptos reactive_stores for the todo list. The `store_*` wrappers
//! trigger re-renders; the plain functions below them hold the actual list
//! mutations and are unit-tested natively.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Todo, TodoError};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todos, insertion order = display order
    pub todos: Vec<Todo>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Validate and append a new todo
pub fn store_add_todo(store: &AppStore, title: &str, description: &str) -> Result<(), TodoError> {
    add_todo(&mut store.todos().write(), title, description)
}

/// Flip the checked flag of the todo with the given id
pub fn store_toggle_todo(store: &AppStore, id: &str) {
    toggle_todo(&mut store.todos().write(), id);
}

/// Replace title/description at the captured edit index
pub fn store_replace_todo_at(store: &AppStore, index: usize, title: &str, description: &str) {
    replace_todo_at(&mut store.todos().write(), index, title, description);
}

/// Remove the todo with the given id
pub fn store_remove_todo(store: &AppStore, id: &str) {
    remove_todo(&mut store.todos().write(), id);
}

/// Remove every checked todo in one pass
pub fn store_remove_checked_todos(store: &AppStore) {
    remove_checked_todos(&mut store.todos().write());
}

// ========================
// List Mutations
// ========================

/// Validate and append; the list is untouched when validation fails.
pub fn add_todo(todos: &mut Vec<Todo>, title: &str, description: &str) -> Result<(), TodoError> {
    let todo = Todo::new(title, description)?;
    todos.push(todo);
    Ok(())
}

/// No-op when the id is not present.
pub fn toggle_todo(todos: &mut Vec<Todo>, id: &str) {
    if let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) {
        todo.checked = !todo.checked;
    }
}

/// Commit an edit draft by positional index, keeping the row's id and
/// checked flag. Out-of-range indices are ignored; the index is captured
/// while the edit dialog is open and the list cannot reorder underneath it
/// in the current UI, but a reordering feature would have to switch this
/// to id-based lookup.
pub fn replace_todo_at(todos: &mut Vec<Todo>, index: usize, title: &str, description: &str) {
    if let Some(todo) = todos.get_mut(index) {
        todo.title = title.to_string();
        todo.description = description.to_string();
    }
}

/// Remove the single todo matching `id`, preserving the order of the rest.
pub fn remove_todo(todos: &mut Vec<Todo>, id: &str) {
    todos.retain(|todo| todo.id != id);
}

/// Remove all and only the checked todos.
pub fn remove_checked_todos(todos: &mut Vec<Todo>) {
    todos.retain(|todo| !todo.checked);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, title: &str, checked: bool) -> Todo {
        Todo {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{} description", title),
            checked,
        }
    }

    #[test]
    fn add_appends_new_todo_at_the_end() {
        let mut todos = vec![todo("a", "T1", false)];
        add_todo(&mut todos, "T2", "T2 description").expect("valid add");
        assert_eq!(todos.len(), 2);
        let added = &todos[1];
        assert_eq!(added.title, "T2");
        assert_eq!(added.description, "T2 description");
        assert!(!added.checked);
        assert_ne!(added.id, todos[0].id);
    }

    #[test]
    fn rejected_add_leaves_list_unchanged() {
        let mut todos = vec![todo("a", "T1", false)];
        let before = todos.clone();
        assert_eq!(add_todo(&mut todos, "", "desc"), Err(TodoError::EmptyField));
        assert_eq!(add_todo(&mut todos, "title", "  "), Err(TodoError::EmptyField));
        assert_eq!(todos, before);
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut todos = vec![todo("a", "T1", false)];
        toggle_todo(&mut todos, "a");
        assert!(todos[0].checked);
        toggle_todo(&mut todos, "a");
        assert!(!todos[0].checked);
    }

    #[test]
    fn toggle_leaves_other_fields_alone() {
        let mut todos = vec![todo("a", "T1", false)];
        let before = todos[0].clone();
        toggle_todo(&mut todos, "a");
        assert_eq!(todos[0].id, before.id);
        assert_eq!(todos[0].title, before.title);
        assert_eq!(todos[0].description, before.description);
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let mut todos = vec![todo("a", "T1", false)];
        let before = todos.clone();
        toggle_todo(&mut todos, "missing");
        assert_eq!(todos, before);
    }

    #[test]
    fn replace_at_index_keeps_id_and_checked() {
        let mut todos = vec![todo("a", "T1", false), todo("b", "T2", true)];
        replace_todo_at(&mut todos, 1, "New title", "New description");
        assert_eq!(todos[1].id, "b");
        assert!(todos[1].checked);
        assert_eq!(todos[1].title, "New title");
        assert_eq!(todos[1].description, "New description");
        // untouched row
        assert_eq!(todos[0], todo("a", "T1", false));
    }

    #[test]
    fn replace_out_of_range_is_a_noop() {
        let mut todos = vec![todo("a", "T1", false)];
        let before = todos.clone();
        replace_todo_at(&mut todos, 5, "x", "y");
        assert_eq!(todos, before);
    }

    #[test]
    fn remove_by_id_preserves_order_of_rest() {
        let mut todos = vec![
            todo("a", "T1", false),
            todo("b", "T2", false),
            todo("c", "T3", false),
        ];
        remove_todo(&mut todos, "b");
        let ids: Vec<&str> = todos.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn remove_checked_keeps_only_unchecked() {
        let mut todos = vec![
            todo("a", "T1", true),
            todo("b", "T2", false),
            todo("c", "T3", true),
        ];
        remove_checked_todos(&mut todos);
        let ids: Vec<&str> = todos.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn remove_checked_with_nothing_checked_is_a_noop() {
        let mut todos = vec![todo("a", "T1", false), todo("b", "T2", false)];
        let before = todos.clone();
        remove_checked_todos(&mut todos);
        assert_eq!(todos, before);
    }

    #[test]
    fn bulk_delete_scenario() {
        // One unchecked item: delete-selected leaves it, toggle + delete-selected clears it.
        let mut todos = vec![todo("a", "T1", false)];
        remove_checked_todos(&mut todos);
        assert_eq!(todos.len(), 1);
        toggle_todo(&mut todos, "a");
        remove_checked_todos(&mut todos);
        assert!(todos.is_empty());
    }
}
