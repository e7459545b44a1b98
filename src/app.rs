//! Todo List App
//!
//! Root component owning the store, the modal state, and the edit/delete
//! capture signals.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DeleteConfirmModal, EditTodoModal, NewTodoForm, ToastStack, TodoTable};
use crate::context::{Toast, ToastContext};
use crate::store::AppStateStoreFields;
use crate::models::Todo;
use crate::store::{store_remove_checked_todos, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    provide_context(store);

    // Toast queue
    let toasts = signal(Vec::<Toast>::new());
    let next_toast_id = signal(0u32);
    let toast_ctx = ToastContext::new(toasts, next_toast_id);
    provide_context(toast_ctx);

    // Edit dialog state: captured (index, item copy) plus open flag
    let (editing, set_editing) = signal::<Option<(usize, Todo)>>(None);
    let (edit_open, set_edit_open) = signal(false);

    // Delete dialog state: captured id plus open flag
    let (pending_delete, set_pending_delete) = signal::<Option<String>>(None);
    let (delete_open, set_delete_open) = signal(false);

    let begin_edit = move |(index, todo): (usize, Todo)| {
        set_editing.set(Some((index, todo)));
        set_edit_open.set(true);
    };

    let begin_delete = move |id: String| {
        set_pending_delete.set(Some(id));
        set_delete_open.set(true);
    };

    let delete_selected = move |_| {
        store_remove_checked_todos(&store);
        toast_ctx.success("Selected todos deleted!");
    };

    view! {
        <div class="todo-app">
            <h2 class="todo-heading">"Todo List"</h2>

            <NewTodoForm />

            <TodoTable on_edit=begin_edit on_delete=begin_delete />

            <Show when=move || !store.todos().get().is_empty()>
                <button class="delete-selected-btn" on:click=delete_selected>
                    "Delete selected"
                </button>
            </Show>

            <p class="todo-count">
                {move || format!("{} todos", store.todos().get().len())}
            </p>

            <EditTodoModal
                open=edit_open
                editing=editing
                on_close=move |_: ()| set_edit_open.set(false)
            />

            <DeleteConfirmModal
                open=delete_open
                pending_delete=pending_delete
                on_close=move |_: ()| set_delete_open.set(false)
            />

            <ToastStack />
        </div>
    }
}
