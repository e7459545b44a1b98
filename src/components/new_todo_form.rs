//! New Todo Form Component
//!
//! Title/description inputs plus the add button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_toasts;
use crate::store::{store_add_todo, use_app_store};

/// Form for adding new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_add_todo(&store, &title.get(), &description.get()) {
            Ok(()) => {
                set_title.set(String::new());
                set_description.set(String::new());
                toasts.success("Todo added successfully !");
            }
            Err(err) => toasts.error(&err.to_string()),
        }
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <label class="form-label">"Add new todo"</label>
            <div class="new-todo-row">
                <input
                    type="text"
                    placeholder="Title..."
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                />
                <input
                    type="text"
                    placeholder="Description..."
                    prop:value=move || description.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_description.set(input.value());
                    }
                />
                <button type="submit">"Add Todo"</button>
            </div>
        </form>
    }
}
