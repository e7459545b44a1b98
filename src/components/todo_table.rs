//! Todo Table Component
//!
//! Table of todo rows with checkbox, fields, and edit/delete actions.
//! Rows are re-evaluated as a whole on every list change.

use leptos::prelude::*;

use crate::models::Todo;
use crate::store::{store_toggle_todo, use_app_store, AppStateStoreFields};

/// Table of all todos, or a placeholder when there are none
///
/// # Arguments
/// * `on_edit` - called with the row index and a copy of the item when the
///   edit button is clicked
/// * `on_delete` - called with the item id when the delete button is clicked
#[component]
pub fn TodoTable(
    #[prop(into)] on_edit: Callback<(usize, Todo)>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show
            when=move || !store.todos().get().is_empty()
            fallback=|| view! { <div class="empty-state">"There is no todos"</div> }
        >
            <table class="todo-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"title"</th>
                        <th>"description"</th>
                        <th>"actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || store.todos().get().into_iter().enumerate().map(|(idx, todo)| {
                        let toggle_id = todo.id.clone();
                        let delete_id = todo.id.clone();
                        let edit_todo = todo.clone();
                        view! {
                            <tr class="todo-row">
                                <td>
                                    <input
                                        type="checkbox"
                                        checked=todo.checked
                                        on:change=move |_| store_toggle_todo(&store, &toggle_id)
                                    />
                                </td>
                                <td class="todo-title">{todo.title.clone()}</td>
                                <td class="todo-description">{todo.description.clone()}</td>
                                <td>
                                    <div class="row-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| on_edit.run((idx, edit_todo.clone()))
                                        >
                                            "✎"
                                        </button>
                                        <button
                                            class="delete-btn"
                                            on:click=move |_| on_delete.run(delete_id.clone())
                                        >
                                            "×"
                                        </button>
                                    </div>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </Show>
    }
}
