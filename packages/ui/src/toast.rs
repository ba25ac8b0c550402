//! Transient notification toasts.
//!
//! [`ToastProvider`] owns the toast list and renders the stacked overlay;
//! any descendant grabs a [`Toasts`] handle via [`use_toasts`] and pushes
//! messages. Each toast dismisses itself after a few seconds.

use dioxus::prelude::*;

const TOAST_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle for pushing toasts. Copyable; backed by context signals.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut items = self.items;
        let mut next_id = self.next_id;
        let id = *next_id.peek() + 1;
        next_id.set(id);
        items.write().push(Toast { id, kind, message });
        spawn(async move {
            crate::platform::sleep_ms(TOAST_DURATION_MS).await;
            items.write().retain(|toast| toast.id != id);
        });
    }
}

/// Get the toast handle. Panics outside a [`ToastProvider`] subtree.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Provider component that renders its children plus the toast overlay.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let items = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| Toasts { items, next_id });

    rsx! {
        {children}
        div {
            class: "toast-stack",
            for toast in items() {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    "{toast.message}"
                }
            }
        }
    }
}
