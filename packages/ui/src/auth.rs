//! Authentication context and hooks for the UI.

use api::{Api, ApiConfig, SessionEvent, User};
use dioxus::prelude::*;
use futures_util::StreamExt;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the shared data layer handle. Panics if called outside an
/// [`AuthProvider`] subtree.
pub fn use_api() -> Api {
    use_context::<Api>()
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Run `on_event` for every session lifecycle event (expiry or logout).
/// The router shell uses this to redirect to the login view, keeping
/// navigation out of the data layer.
pub fn use_session_events(on_event: impl FnMut(SessionEvent) + 'static) {
    let api = use_api();
    let callback = use_callback(on_event);
    use_future(move || {
        let mut events = api.session.subscribe();
        async move {
            while let Some(event) = events.next().await {
                tracing::debug!(?event, "session event");
                callback.call(event);
            }
        }
    });
}

/// Provider component that owns the data layer and authentication state.
/// Wrap the app with this component; on mount it restores any persisted
/// session from storage.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let api = use_hook(|| {
        Api::new(
            ApiConfig::default(),
            crate::platform::storage_backend(),
        )
    });
    use_context_provider(|| api.clone());

    let auth_state = use_signal(|| AuthState {
        user: api.auth.current_user(),
    });
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
