//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_modal;
mod edit_todo_modal;
mod modal;
mod new_todo_form;
mod toast_stack;
mod todo_table;

pub use delete_confirm_modal::DeleteConfirmModal;
pub use edit_todo_modal::EditTodoModal;
pub use modal::Modal;
pub use new_todo_form::NewTodoForm;
pub use toast_stack::ToastStack;
pub use todo_table::TodoTable;
