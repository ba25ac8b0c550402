use api::{Api, Credentials};
use dioxus::prelude::*;

use crate::auth::{use_api, use_auth, AuthState};
use crate::toast::{use_toasts, Toasts};

/// Login form state. On success the auth state is updated and
/// `on_logged_in` fires so the view can navigate home.
#[derive(Clone)]
pub struct LoginForm {
    api: Api,
    toasts: Toasts,
    auth: Signal<AuthState>,
    on_logged_in: EventHandler<()>,
    pub email: Signal<String>,
    pub password: Signal<String>,
    pub loading: Signal<bool>,
}

pub fn use_login(on_logged_in: EventHandler<()>) -> LoginForm {
    LoginForm {
        api: use_api(),
        toasts: use_toasts(),
        auth: use_auth(),
        on_logged_in,
        email: use_signal(String::new),
        password: use_signal(String::new),
        loading: use_signal(|| false),
    }
}

impl LoginForm {
    pub async fn submit(mut self) {
        let credentials = Credentials {
            email: self.email.peek().trim().to_string(),
            password: self.password.peek().clone(),
        };
        if let Err(err) = credentials.validate() {
            self.toasts.error(err.to_string());
            return;
        }

        self.loading.set(true);
        match self.api.auth.login(&credentials).await {
            Ok(response) => {
                self.auth.set(AuthState {
                    user: Some(response.user),
                });
                self.toasts.success("Signed in successfully!");
                self.on_logged_in.call(());
            }
            Err(err) => {
                self.loading.set(false);
                self.toasts.error(err.to_string());
            }
        }
    }
}
