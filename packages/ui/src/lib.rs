//! This crate contains the shared UI layer: authentication context,
//! notifications, shared dialogs, and the per-page state hooks.

pub mod format;
pub mod forms;
pub mod hooks;
pub mod platform;

mod auth;
pub use auth::{use_api, use_auth, use_session_events, AuthProvider, AuthState};

mod toast;
pub use toast::{use_toasts, ToastKind, ToastProvider, Toasts};

mod modal;
pub use modal::ModalOverlay;

mod confirm;
pub use confirm::ConfirmDialog;

mod debounce;
pub use debounce::use_debounced;

mod header;
pub use header::Header;
