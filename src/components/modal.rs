//! Modal Component
//!
//! Generic dialog with backdrop dismissal; content is passed in as children.

use leptos::prelude::*;

/// Reusable modal dialog
///
/// Renders nothing while closed. Clicking the backdrop closes the dialog;
/// clicks inside the dialog body stop propagation so they do not.
///
/// # Arguments
/// * `open` - whether the dialog is shown
/// * `on_close` - callback run on backdrop click (cancel buttons inside the
///   content call it themselves)
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="modal-dialog"
                    on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}
