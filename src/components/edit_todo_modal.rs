//! Edit Todo Modal
//!
//! Dialog for editing one todo's title and description, committed back to the
//! list by the index captured when editing began.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::Modal;
use crate::context::use_toasts;
use crate::models::Todo;
use crate::store::{store_replace_todo_at, use_app_store};

/// Edit dialog, seeded from the active draft whenever the target changes
#[component]
pub fn EditTodoModal(
    open: ReadSignal<bool>,
    editing: ReadSignal<Option<(usize, Todo)>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    // Reseed the draft fields when a new edit target is captured
    Effect::new(move |_| {
        if let Some((_, todo)) = editing.get() {
            set_title.set(todo.title.clone());
            set_description.set(todo.description.clone());
        }
    });

    let commit_edit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some((index, _)) = editing.get() {
            store_replace_todo_at(&store, index, &title.get(), &description.get());
            on_close.run(());
            toasts.success("Todo updated successfully !");
        }
    };

    view! {
        <Modal open=open on_close=on_close>
            <h2>"Edit todos"</h2>
            <form on:submit=commit_edit>
                <div class="modal-field">
                    <label>"title"</label>
                    <input
                        type="text"
                        placeholder="enter your todo title..."
                        prop:value=move || title.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_title.set(input.value());
                        }
                    />
                </div>
                <div class="modal-field">
                    <label>"description"</label>
                    <input
                        type="text"
                        placeholder="enter your todo description..."
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_description.set(input.value());
                        }
                    />
                </div>
                <div class="modal-actions">
                    <button type="submit" class="confirm-btn">"Edit"</button>
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
