//! Toast Stack Component
//!
//! Renders the transient notification queue.

use leptos::prelude::*;

use crate::context::{use_toasts, ToastKind};

/// Stack of auto-dismissing toasts, newest last
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack">
            {move || toasts.toasts.get().into_iter().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Success => "toast success",
                    ToastKind::Error => "toast error",
                };
                view! { <div class=class>{toast.message}</div> }
            }).collect_view()}
        </div>
    }
}
