//! Application Context
//!
//! Toast notification state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo_timers::future::TimeoutFuture;

/// How long a toast stays on screen
pub const TOAST_DISMISS_MS: u32 = 2000;

/// Success vs error styling for a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}

/// App-wide toast signals provided via context
#[derive(Clone, Copy)]
pub struct ToastContext {
    /// Currently visible toasts - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Currently visible toasts - write
    set_toasts: WriteSignal<Vec<Toast>>,
    /// Monotonic toast id counter - read
    next_id: ReadSignal<u32>,
    /// Monotonic toast id counter - write
    set_next_id: WriteSignal<u32>,
}

impl ToastContext {
    pub fn new(
        toasts: (ReadSignal<Vec<Toast>>, WriteSignal<Vec<Toast>>),
        next_id: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            toasts: toasts.0,
            set_toasts: toasts.1,
            next_id: next_id.0,
            set_next_id: next_id.1,
        }
    }

    /// Show a success toast
    pub fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    /// Show an error toast
    pub fn error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }

    fn push(&self, kind: ToastKind, message: &str) {
        let id = self.next_id.get_untracked();
        self.set_next_id.update(|v| *v += 1);
        self.set_toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.to_string(),
                kind,
            })
        });

        // Auto-dismiss after the timeout
        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }
}

/// Get the toast context, provided at the app root
pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}
