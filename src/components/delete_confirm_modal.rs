//! Delete Confirmation Modal
//!
//! Dialog confirming removal of the todo captured when delete was requested.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::use_toasts;
use crate::store::{store_remove_todo, use_app_store};

/// Delete confirmation dialog
#[component]
pub fn DeleteConfirmModal(
    open: ReadSignal<bool>,
    pending_delete: ReadSignal<Option<String>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();

    let commit_delete = move |_| {
        if let Some(id) = pending_delete.get() {
            store_remove_todo(&store, &id);
            on_close.run(());
            toasts.success("Todo deleted successfully!");
        }
    };

    view! {
        <Modal open=open on_close=on_close>
            <h2>"delete"</h2>
            <p>
                "Are you sure you want to delete this item? This action cannot be \
                 undone. Please double-check before confirming."
            </p>
            <div class="modal-actions">
                <button class="confirm-btn" on:click=commit_delete>"Delete"</button>
                <button class="cancel-btn" on:click=move |_| on_close.run(())>"Cancel"</button>
            </div>
        </Modal>
    }
}
